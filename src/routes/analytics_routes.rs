//! Rutas de Analytics
//!
//! Superficie de solo lectura del dashboard; cada handler delega en el
//! AnalyticsController.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::analytics_controller::AnalyticsController;
use crate::dto::analytics_dto::{
    BusquedaPlacaQuery, BusquedaVehiculosResponse, DistribucionUsuariosResponse,
    PanelGeneralResponse, ResumenFlotaResponse, ResumenLlantaResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/panel", get(panel_general))
        .route("/flota", get(resumen_flota))
        .route("/llantas", get(listado_llantas))
        .route("/usuarios", get(distribucion_usuarios))
        .route("/vehiculos/buscar", get(buscar_vehiculos))
}

async fn panel_general(
    State(state): State<AppState>,
) -> Result<Json<PanelGeneralResponse>, AppError> {
    let controller = AnalyticsController::new(state.proveedor.clone());
    Ok(Json(controller.panel_general().await?))
}

async fn resumen_flota(
    State(state): State<AppState>,
) -> Result<Json<ResumenFlotaResponse>, AppError> {
    let controller = AnalyticsController::new(state.proveedor.clone());
    Ok(Json(controller.resumen_flota().await?))
}

async fn listado_llantas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumenLlantaResponse>>, AppError> {
    let controller = AnalyticsController::new(state.proveedor.clone());
    Ok(Json(controller.listado_llantas().await?))
}

async fn distribucion_usuarios(
    State(state): State<AppState>,
) -> Result<Json<DistribucionUsuariosResponse>, AppError> {
    let controller = AnalyticsController::new(state.proveedor.clone());
    Ok(Json(controller.distribucion_usuarios().await?))
}

async fn buscar_vehiculos(
    State(state): State<AppState>,
    Query(query): Query<BusquedaPlacaQuery>,
) -> Result<Json<BusquedaVehiculosResponse>, AppError> {
    let controller = AnalyticsController::new(state.proveedor.clone());
    let consulta = query.placa.unwrap_or_default();
    Ok(Json(controller.buscar_vehiculos(&consulta).await?))
}
