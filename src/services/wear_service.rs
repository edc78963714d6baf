//! Servicio de desgaste y profundidad
//!
//! Cálculos puros sobre el historial de inspecciones de una llanta:
//! profundidad promedio y mínima de la última inspección, y el bandeo
//! de severidad usado para colorear el dashboard.
//!
//! El orden de inserción del historial no se considera confiable: todo
//! cálculo ordena (o selecciona) por `fecha` antes de mirar la última
//! inspección.

use serde::Serialize;

use crate::models::llanta::Inspeccion;

/// Profundidad (mm) a partir de la cual la banda se considera en buen estado
pub const PROFUNDIDAD_BUENA_MM: f64 = 6.0;

/// Profundidad (mm) a partir de la cual la banda sube de crítica a advertencia.
/// Regla de coloreo visual; no confundir con el umbral de riesgo de flota
/// de `criticality_service`.
pub const PROFUNDIDAD_ADVERTENCIA_MM: f64 = 3.0;

/// Banda de severidad visual de una profundidad de labrado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandaSeveridad {
    Buena,
    Advertencia,
    Critica,
}

/// Ordena una copia del historial por `fecha` ascendente (sort estable)
pub fn ordenar_inspecciones(inspecciones: &[Inspeccion]) -> Vec<Inspeccion> {
    let mut ordenadas = inspecciones.to_vec();
    ordenadas.sort_by_key(|i| i.fecha);
    ordenadas
}

/// Última inspección por `fecha`; con fechas empatadas gana la última insertada,
/// igual que el último elemento tras un sort estable ascendente
pub fn ultima_inspeccion(inspecciones: &[Inspeccion]) -> Option<&Inspeccion> {
    inspecciones.iter().max_by_key(|i| i.fecha)
}

/// Promedio de los tres canales de la última inspección; `None` sin historial
pub fn profundidad_promedio_actual(inspecciones: &[Inspeccion]) -> Option<f64> {
    ultima_inspeccion(inspecciones).map(Inspeccion::profundidad_promedio)
}

/// Mínimo de los tres canales de la última inspección; `None` sin historial
pub fn profundidad_minima_actual(inspecciones: &[Inspeccion]) -> Option<f64> {
    ultima_inspeccion(inspecciones).map(Inspeccion::profundidad_minima)
}

/// Bandeo de severidad: >= 6 buena, >= 3 advertencia, < 3 crítica
pub fn banda_de_profundidad(profundidad_mm: f64) -> BandaSeveridad {
    if profundidad_mm >= PROFUNDIDAD_BUENA_MM {
        BandaSeveridad::Buena
    } else if profundidad_mm >= PROFUNDIDAD_ADVERTENCIA_MM {
        BandaSeveridad::Advertencia
    } else {
        BandaSeveridad::Critica
    }
}
