//! Controller de Analytics
//!
//! Orquesta el flujo snapshot -> núcleo de cálculo -> DTO. Los fetches de
//! llantas, usuarios y vehículos son independientes entre sí y corren en
//! paralelo; los cálculos en sí son síncronos y puros.

use std::sync::Arc;

use crate::clients::ProveedorFlota;
use crate::dto::analytics_dto::{
    BusquedaVehiculosResponse, DistribucionUsuariosResponse, PanelGeneralResponse,
    ResumenFlotaResponse, ResumenLlantaResponse,
};
use crate::models::llanta::Llanta;
use crate::models::usuario::Usuario;
use crate::models::vehiculo::Vehiculo;
use crate::services::{aggregation_service, criticality_service, vehicle_search_service};
use crate::utils::errors::AppResult;

pub struct AnalyticsController {
    proveedor: Arc<dyn ProveedorFlota>,
}

impl AnalyticsController {
    pub fn new(proveedor: Arc<dyn ProveedorFlota>) -> Self {
        Self { proveedor }
    }

    /// Resumen agregado de la flota de llantas
    pub async fn resumen_flota(&self) -> AppResult<ResumenFlotaResponse> {
        let llantas = self.proveedor.obtener_llantas().await?;
        Ok(Self::armar_resumen_flota(&llantas))
    }

    /// Fila de analytics por cada llanta del snapshot
    pub async fn listado_llantas(&self) -> AppResult<Vec<ResumenLlantaResponse>> {
        let llantas = self.proveedor.obtener_llantas().await?;
        Ok(llantas.iter().map(ResumenLlantaResponse::from).collect())
    }

    /// Distribución de usuarios por rol
    pub async fn distribucion_usuarios(&self) -> AppResult<DistribucionUsuariosResponse> {
        let usuarios = self.proveedor.obtener_usuarios().await?;
        Ok(Self::armar_distribucion(&usuarios))
    }

    /// Búsqueda de vehículos por placa (case-insensitive)
    pub async fn buscar_vehiculos(&self, consulta: &str) -> AppResult<BusquedaVehiculosResponse> {
        let vehiculos = self.proveedor.obtener_vehiculos().await?;
        let resultados: Vec<Vehiculo> =
            vehicle_search_service::buscar_por_placa(&vehiculos, consulta)
                .into_iter()
                .cloned()
                .collect();

        Ok(BusquedaVehiculosResponse {
            consulta: consulta.trim().to_string(),
            total: resultados.len(),
            resultados,
        })
    }

    /// Panel combinado del dashboard; los tres fetches corren en paralelo
    pub async fn panel_general(&self) -> AppResult<PanelGeneralResponse> {
        let (llantas, usuarios, vehiculos) = tokio::try_join!(
            self.proveedor.obtener_llantas(),
            self.proveedor.obtener_usuarios(),
            self.proveedor.obtener_vehiculos(),
        )?;

        Ok(PanelGeneralResponse {
            flota: Self::armar_resumen_flota(&llantas),
            usuarios: Self::armar_distribucion(&usuarios),
            total_vehiculos: vehiculos.len(),
        })
    }

    fn armar_resumen_flota(llantas: &[Llanta]) -> ResumenFlotaResponse {
        ResumenFlotaResponse {
            total_llantas: llantas.len(),
            llantas_criticas: criticality_service::contar_criticas(llantas),
            por_marca: aggregation_service::resumir_llantas_por_marca(llantas),
            por_diseno: aggregation_service::resumir_llantas_por_diseno(llantas),
        }
    }

    fn armar_distribucion(usuarios: &[Usuario]) -> DistribucionUsuariosResponse {
        DistribucionUsuariosResponse {
            total_usuarios: usuarios.len(),
            por_rol: aggregation_service::resumir_usuarios_por_rol(usuarios),
        }
    }
}
