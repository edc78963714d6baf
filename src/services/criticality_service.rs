//! Servicio de criticidad de flota
//!
//! Regla de alerta a nivel flota: una llanta es crítica cuando el promedio
//! de los tres canales de su última inspección es <= 2.0 mm. Umbral
//! independiente del bandeo visual 3/6 de `wear_service`; son dos reglas
//! de negocio distintas y se mantienen separadas.

use crate::models::llanta::Llanta;
use crate::services::wear_service;

/// Profundidad promedio (mm) a partir de la cual una llanta cuenta como
/// crítica en el conteo de riesgo de flota
pub const PROFUNDIDAD_CRITICA_FLOTA_MM: f64 = 2.0;

/// Una llanta sin inspecciones (o sin datos de profundidad) no es crítica
pub fn es_critica(llanta: &Llanta) -> bool {
    match wear_service::profundidad_promedio_actual(&llanta.inspecciones) {
        Some(promedio) => promedio <= PROFUNDIDAD_CRITICA_FLOTA_MM,
        None => false,
    }
}

/// Conteo de llantas críticas sobre un snapshot de flota
pub fn contar_criticas(llantas: &[Llanta]) -> usize {
    llantas.iter().filter(|llanta| es_critica(llanta)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::llanta::Inspeccion;
    use chrono::{TimeZone, Utc};

    fn llanta_con_profundidades(int: f64, cen: f64, ext: f64) -> Llanta {
        Llanta {
            id: "llanta-1".to_string(),
            posicion: 1,
            marca: "Bridgestone".to_string(),
            diseno: "R268".to_string(),
            placa: None,
            profundidad_inicial: 12.0,
            kilometros_recorridos: 50000.0,
            profundidad_actual: None,
            costo: vec![],
            inspecciones: vec![Inspeccion {
                profundidad_int: int,
                profundidad_cen: cen,
                profundidad_ext: ext,
                fecha: Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
                cpk: None,
                cpk_proyectado: None,
                image_url: None,
            }],
            vida: vec![],
            desechos: None,
        }
    }

    #[test]
    fn test_limite_exacto_es_critico() {
        // promedio exactamente 2.0
        let llanta = llanta_con_profundidades(2.0, 2.0, 2.0);
        assert!(es_critica(&llanta));
    }

    #[test]
    fn test_apenas_por_encima_no_es_critico() {
        let llanta = llanta_con_profundidades(2.1, 2.1, 2.1);
        assert!(!es_critica(&llanta));
    }

    #[test]
    fn test_sin_inspecciones_no_es_critica() {
        let mut llanta = llanta_con_profundidades(2.0, 2.0, 2.0);
        llanta.inspecciones.clear();
        assert!(!es_critica(&llanta));
    }

    #[test]
    fn test_conteo_de_flota() {
        let llantas = vec![
            llanta_con_profundidades(1.5, 1.5, 1.5),
            llanta_con_profundidades(2.0, 2.0, 2.0),
            llanta_con_profundidades(7.0, 8.0, 7.5),
        ];
        assert_eq!(contar_criticas(&llantas), 2);
        assert_eq!(contar_criticas(&[]), 0);
    }
}
