//! Tire Fleet Analytics
//!
//! Servicio de analytics para una plataforma de gestión de llantas de flota.
//! Trae snapshots de llantas, vehículos y usuarios del backend de flota y
//! deriva sobre ellos las métricas del dashboard: CPK, profundidades de
//! labrado, proyección de kilometraje, criticidad y agregados por grupo.
//! El núcleo de cálculo (`services`) es puro y sin estado; no persiste nada.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
