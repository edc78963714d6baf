//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través del router
//! de Axum: la configuración y el proveedor de snapshots de la flota.

use std::sync::Arc;

use crate::clients::ProveedorFlota;
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub proveedor: Arc<dyn ProveedorFlota>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, proveedor: Arc<dyn ProveedorFlota>) -> Self {
        Self { config, proveedor }
    }
}
