//! DTOs de Analytics
//!
//! Formas de salida del dashboard: valores ya formateados para mostrar.
//! Las profundidades van a un decimal o "N/A"; la proyección de kilometraje
//! es un entero, "∞" o "N/A" según los centinelas del núcleo de cálculo.

use serde::{Deserialize, Serialize};

use crate::models::llanta::Llanta;
use crate::models::vehiculo::Vehiculo;
use crate::services::aggregation_service::{GrupoLlantas, GrupoUsuarios};
use crate::services::wear_service::BandaSeveridad;
use crate::services::{cost_service, criticality_service, lifecycle_service, wear_service};

/// Fila de analytics por llanta
#[derive(Debug, Clone, Serialize)]
pub struct ResumenLlantaResponse {
    pub id: String,
    pub placa: Option<String>,
    pub posicion: i32,
    pub marca: String,
    pub diseno: String,
    pub cpk: f64,
    pub cpk_proyectado: Option<f64>,
    pub proyeccion_km: String,
    pub profundidad_promedio: String,
    pub banda: Option<BandaSeveridad>,
    pub estado_vida: String,
    pub critica: bool,
}

impl From<&Llanta> for ResumenLlantaResponse {
    fn from(llanta: &Llanta) -> Self {
        let profundidad_promedio =
            wear_service::profundidad_promedio_actual(&llanta.inspecciones);
        let banda = wear_service::profundidad_minima_actual(&llanta.inspecciones)
            .map(wear_service::banda_de_profundidad);

        Self {
            id: llanta.id.clone(),
            placa: llanta.placa.clone(),
            posicion: llanta.posicion,
            marca: llanta.marca.clone(),
            diseno: llanta.diseno.clone(),
            cpk: cost_service::cpk(llanta),
            cpk_proyectado: cost_service::cpk_proyectado(llanta),
            proyeccion_km: cost_service::proyeccion_kilometraje(llanta).to_string(),
            profundidad_promedio: formatear_profundidad(profundidad_promedio),
            banda,
            estado_vida: lifecycle_service::resolver_estado(&llanta.vida).etiqueta(),
            critica: criticality_service::es_critica(llanta),
        }
    }
}

/// Resumen agregado de la flota de llantas
#[derive(Debug, Clone, Serialize)]
pub struct ResumenFlotaResponse {
    pub total_llantas: usize,
    pub llantas_criticas: usize,
    pub por_marca: Vec<GrupoLlantas>,
    pub por_diseno: Vec<GrupoLlantas>,
}

/// Distribución de usuarios por rol
#[derive(Debug, Clone, Serialize)]
pub struct DistribucionUsuariosResponse {
    pub total_usuarios: usize,
    pub por_rol: Vec<GrupoUsuarios>,
}

/// Panel combinado del dashboard
#[derive(Debug, Clone, Serialize)]
pub struct PanelGeneralResponse {
    pub flota: ResumenFlotaResponse,
    pub usuarios: DistribucionUsuariosResponse,
    pub total_vehiculos: usize,
}

/// Query de búsqueda por placa
#[derive(Debug, Deserialize)]
pub struct BusquedaPlacaQuery {
    pub placa: Option<String>,
}

/// Resultado de búsqueda de vehículos
#[derive(Debug, Clone, Serialize)]
pub struct BusquedaVehiculosResponse {
    pub consulta: String,
    pub total: usize,
    pub resultados: Vec<Vehiculo>,
}

/// Profundidad a un decimal, o "N/A" sin inspecciones
pub fn formatear_profundidad(profundidad: Option<f64>) -> String {
    match profundidad {
        Some(valor) => format!("{:.1}", valor),
        None => "N/A".to_string(),
    }
}
