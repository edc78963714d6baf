//! Modelo de Llanta
//!
//! Este módulo contiene el struct Llanta y sus sub-registros tal como
//! los entrega el backend de flota. Los historiales (costo, inspecciones,
//! vida) son append-only en el backend; aquí se tratan como snapshots
//! inmutables de solo lectura durante un pase de cálculo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Llanta principal - snapshot completo entregado por el backend de flota
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Llanta {
    pub id: String,
    /// Posición 1-based en el vehículo; 0 = sin asignar
    #[serde(default)]
    pub posicion: i32,
    #[serde(default)]
    pub marca: String,
    #[serde(default)]
    pub diseno: String,
    #[serde(default)]
    pub placa: Option<String>,
    /// Profundidad inicial en milímetros, inmutable desde la creación
    #[serde(rename = "profundidadInicial")]
    pub profundidad_inicial: f64,
    /// Kilometraje acumulado, monotónicamente no decreciente
    #[serde(rename = "kilometrosRecorridos", default)]
    pub kilometros_recorridos: f64,
    /// Profundidad promedio precalculada por el backend; puede venir nula
    #[serde(rename = "profundidadActual", default)]
    pub profundidad_actual: Option<f64>,
    #[serde(default)]
    pub costo: Vec<RegistroCosto>,
    #[serde(default)]
    pub inspecciones: Vec<Inspeccion>,
    #[serde(default)]
    pub vida: Vec<EventoVida>,
    #[serde(default)]
    pub desechos: Option<Desecho>,
}

/// Evento de costo (compra, reparación) asociado a la llanta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistroCosto {
    #[serde(default)]
    pub valor: f64,
    pub fecha: DateTime<Utc>,
}

/// Inspección física: tres canales de profundidad siempre presentes juntos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspeccion {
    #[serde(rename = "profundidadInt")]
    pub profundidad_int: f64,
    #[serde(rename = "profundidadCen")]
    pub profundidad_cen: f64,
    #[serde(rename = "profundidadExt")]
    pub profundidad_ext: f64,
    pub fecha: DateTime<Utc>,
    #[serde(default)]
    pub cpk: Option<f64>,
    #[serde(rename = "cpkProyectado", default)]
    pub cpk_proyectado: Option<f64>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

impl Inspeccion {
    /// Promedio de los tres canales de profundidad
    pub fn profundidad_promedio(&self) -> f64 {
        (self.profundidad_int + self.profundidad_cen + self.profundidad_ext) / 3.0
    }

    /// Mínimo de los tres canales de profundidad
    pub fn profundidad_minima(&self) -> f64 {
        self.profundidad_int
            .min(self.profundidad_cen)
            .min(self.profundidad_ext)
    }
}

/// Transición de vida de la llanta; el último elemento es el estado actual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventoVida {
    pub valor: String,
    pub fecha: DateTime<Utc>,
}

/// Registro único de desecho, presente solo cuando la llanta fue descartada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Desecho {
    pub causales: String,
    #[serde(rename = "milimetrosDesechados")]
    pub milimetros_desechados: f64,
    pub remanente: f64,
    pub fecha: DateTime<Utc>,
}
