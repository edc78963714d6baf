//! Servicio de ciclo de vida
//!
//! Resuelve el estado actual de una llanta a partir de su historial `vida`.
//! El resolutor no valida transiciones: reporta el valor del último evento
//! tal como viene del backend, mapeado a una etiqueta fija. Valores
//! desconocidos pasan tal cual como su propia etiqueta.

use crate::models::llanta::EventoVida;

/// Estado de vida actual de una llanta
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstadoVida {
    Nueva,
    Reencauche1,
    Reencauche2,
    Reencauche3,
    Descarte,
    /// Valor no reconocido; se conserva verbatim
    Otro(String),
    /// Historial de vida vacío
    SinRegistrar,
}

impl EstadoVida {
    /// Etiqueta legible para el dashboard
    pub fn etiqueta(&self) -> String {
        match self {
            EstadoVida::Nueva => "Nueva".to_string(),
            EstadoVida::Reencauche1 => "Reencauche 1".to_string(),
            EstadoVida::Reencauche2 => "Reencauche 2".to_string(),
            EstadoVida::Reencauche3 => "Reencauche 3".to_string(),
            EstadoVida::Descarte => "Descarte".to_string(),
            EstadoVida::Otro(valor) => valor.clone(),
            EstadoVida::SinRegistrar => "Sin registrar".to_string(),
        }
    }
}

/// El estado actual es función únicamente del último evento del historial
pub fn resolver_estado(vida: &[EventoVida]) -> EstadoVida {
    let ultimo = match vida.last() {
        Some(evento) => evento,
        None => return EstadoVida::SinRegistrar,
    };

    match ultimo.valor.as_str() {
        "nueva" => EstadoVida::Nueva,
        "reencauche1" => EstadoVida::Reencauche1,
        "reencauche2" => EstadoVida::Reencauche2,
        "reencauche3" => EstadoVida::Reencauche3,
        "descarte" => EstadoVida::Descarte,
        otro => EstadoVida::Otro(otro.to_string()),
    }
}
