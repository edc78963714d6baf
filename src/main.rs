use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tracing::info;

use tire_fleet_analytics::clients::FleetApiClient;
use tire_fleet_analytics::config::environment::EnvironmentConfig;
use tire_fleet_analytics::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use tire_fleet_analytics::routes;
use tire_fleet_analytics::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🛞 Tire Fleet Analytics - Dashboard de flota");
    info!("===========================================");

    let config = EnvironmentConfig::default();

    // Cliente del backend de flota (colaborador externo)
    let fleet_client = FleetApiClient::new(
        config.fleet_api_base_url.clone(),
        config.fleet_api_timeout_seconds,
    );

    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(&config.cors_origins)
    } else {
        cors_middleware()
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config, Arc::new(fleet_client));

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest(
            "/api/analytics",
            routes::analytics_routes::create_analytics_router(),
        )
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("📊 Endpoints de Analytics:");
    info!("   GET  /api/analytics/panel - Panel combinado del dashboard");
    info!("   GET  /api/analytics/flota - Resumen agregado de llantas");
    info!("   GET  /api/analytics/llantas - Analytics por llanta");
    info!("   GET  /api/analytics/usuarios - Distribución de usuarios por rol");
    info!("   GET  /api/analytics/vehiculos/buscar?placa= - Búsqueda por placa");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Tire Fleet Analytics funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
