//! Controllers de la aplicación

pub mod analytics_controller;
