//! Servicio de inspecciones
//!
//! Eliminación puntual de una inspección por su `fecha` exacta. El historial
//! es append-only salvo esta operación; las fechas dentro del historial de
//! una llanta se asumen únicas, por lo que se elimina exactamente una entrada.

use chrono::{DateTime, Utc};

use crate::models::llanta::Inspeccion;

/// Elimina la inspección cuya fecha coincide exactamente con la dada.
/// Devuelve `true` si se eliminó; una fecha inexistente es un no-op
pub fn eliminar_inspeccion_por_fecha(
    inspecciones: &mut Vec<Inspeccion>,
    fecha: DateTime<Utc>,
) -> bool {
    match inspecciones.iter().position(|i| i.fecha == fecha) {
        Some(indice) => {
            inspecciones.remove(indice);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn inspeccion(dia: u32) -> Inspeccion {
        Inspeccion {
            profundidad_int: 5.0,
            profundidad_cen: 5.0,
            profundidad_ext: 5.0,
            fecha: Utc.with_ymd_and_hms(2024, 6, dia, 10, 0, 0).unwrap(),
            cpk: None,
            cpk_proyectado: None,
            image_url: None,
        }
    }

    #[test]
    fn test_elimina_exactamente_la_entrada_con_esa_fecha() {
        let mut historial = vec![inspeccion(1), inspeccion(2), inspeccion(3)];
        let fecha_d2 = historial[1].fecha;

        assert!(eliminar_inspeccion_por_fecha(&mut historial, fecha_d2));
        assert_eq!(historial.len(), 2);
        assert_eq!(historial[0].fecha, inspeccion(1).fecha);
        assert_eq!(historial[1].fecha, inspeccion(3).fecha);
    }

    #[test]
    fn test_fecha_inexistente_es_noop() {
        let mut historial = vec![inspeccion(1), inspeccion(3)];
        let fecha_ajena = inspeccion(20).fecha;

        assert!(!eliminar_inspeccion_por_fecha(&mut historial, fecha_ajena));
        assert_eq!(historial.len(), 2);
    }

    #[test]
    fn test_historial_vacio_es_noop() {
        let mut historial: Vec<Inspeccion> = vec![];
        assert!(!eliminar_inspeccion_por_fecha(&mut historial, inspeccion(1).fecha));
        assert!(historial.is_empty());
    }
}
