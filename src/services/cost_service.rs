//! Servicio de costos (CPK)
//!
//! Costo por kilómetro y proyección de kilometraje restante. Todas las
//! divisiones por cero o profundidades anómalas tienen un valor centinela
//! definido; estas funciones nunca devuelven NaN ni Infinity.

use std::fmt;

use crate::models::llanta::{Inspeccion, Llanta, RegistroCosto};
use crate::services::wear_service;

/// Proyección de kilometraje de una llanta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProyeccionKm {
    /// Kilometraje total proyectado, redondeado al entero más cercano
    Kilometros(i64),
    /// La llanta no registra desgaste (profundidad usada <= 0); se muestra "∞"
    Infinita,
    /// Sin inspecciones todavía; se muestra "N/A"
    NoDisponible,
}

impl fmt::Display for ProyeccionKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProyeccionKm::Kilometros(km) => write!(f, "{}", km),
            ProyeccionKm::Infinita => write!(f, "∞"),
            ProyeccionKm::NoDisponible => write!(f, "N/A"),
        }
    }
}

/// Suma de todos los eventos de costo, sin filtrar por fecha
pub fn costo_total(costo: &[RegistroCosto]) -> f64 {
    costo.iter().map(|c| c.valor).sum()
}

/// Costo por kilómetro. Con kilometraje cero devuelve 0.0 (fallback explícito
/// para mantener estables los promedios aguas abajo, no un error)
pub fn cpk(llanta: &Llanta) -> f64 {
    if llanta.kilometros_recorridos > 0.0 {
        costo_total(&llanta.costo) / llanta.kilometros_recorridos
    } else {
        0.0
    }
}

/// Kilometraje total proyectado a partir del ritmo de desgaste observado
pub fn proyeccion_kilometraje(llanta: &Llanta) -> ProyeccionKm {
    let minima = match wear_service::profundidad_minima_actual(&llanta.inspecciones) {
        Some(minima) => minima,
        None => return ProyeccionKm::NoDisponible,
    };

    let usada = llanta.profundidad_inicial - minima;
    if usada <= 0.0 {
        // Llanta sin desgaste o inspección con profundidad >= a la inicial
        return ProyeccionKm::Infinita;
    }

    let proyectado = (llanta.kilometros_recorridos / usada) * llanta.profundidad_inicial;
    ProyeccionKm::Kilometros(proyectado.round() as i64)
}

/// CPK proyectado sobre el kilometraje estimado; `None` cuando la proyección
/// no es un número finito de kilómetros
pub fn cpk_proyectado(llanta: &Llanta) -> Option<f64> {
    match proyeccion_kilometraje(llanta) {
        ProyeccionKm::Kilometros(km) if km > 0 => {
            Some(costo_total(&llanta.costo) / km as f64)
        }
        _ => None,
    }
}

/// Devuelve la inspección con los valores de cpk y cpkProyectado vigentes al
/// momento de registrarla, como hace el backend al crear una inspección
pub fn anotar_inspeccion(llanta: &Llanta, inspeccion: Inspeccion) -> Inspeccion {
    let mut con_nueva = llanta.clone();
    con_nueva.inspecciones.push(inspeccion.clone());

    Inspeccion {
        cpk: Some(cpk(llanta)),
        cpk_proyectado: cpk_proyectado(&con_nueva),
        ..inspeccion
    }
}
