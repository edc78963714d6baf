//! Definición de rutas HTTP

pub mod analytics_routes;
