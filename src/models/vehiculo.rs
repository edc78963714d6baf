//! Modelo de Vehiculo
//!
//! Snapshot de vehículo entregado por el backend de flota. La placa es la
//! clave de búsqueda principal de cara al usuario (matching case-insensitive).

use serde::{Deserialize, Serialize};

/// Vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehiculo {
    pub id: String,
    pub placa: String,
    #[serde(default)]
    pub tipovhc: String,
    #[serde(default)]
    pub carga: String,
    #[serde(rename = "kilometrajeActual", default)]
    pub kilometraje_actual: f64,
    /// Cantidad de llantas montadas, derivada por el backend
    #[serde(rename = "tireCount", default)]
    pub tire_count: i32,
}
