//! Modelo de Usuario
//!
//! Snapshot de usuario entregado por el backend de flota; solo se consume
//! para la distribución por rol del dashboard.

use serde::{Deserialize, Serialize};

/// Usuario de la plataforma
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Rol de plataforma; puede venir ausente en cuentas antiguas
    #[serde(default)]
    pub role: Option<String>,
}
