//! Tests de la API de analytics con la app real y un proveedor de flota fijo

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tire_fleet_analytics::clients::ProveedorFlota;
use tire_fleet_analytics::config::environment::EnvironmentConfig;
use tire_fleet_analytics::models::llanta::Llanta;
use tire_fleet_analytics::models::usuario::Usuario;
use tire_fleet_analytics::models::vehiculo::Vehiculo;
use tire_fleet_analytics::routes::analytics_routes::create_analytics_router;
use tire_fleet_analytics::state::AppState;
use tire_fleet_analytics::utils::errors::{AppError, AppResult};

/// Snapshots fijos en el formato del wire del backend de flota
struct ProveedorDePrueba;

#[async_trait]
impl ProveedorFlota for ProveedorDePrueba {
    async fn obtener_llantas(&self) -> AppResult<Vec<Llanta>> {
        let llantas = json!([
            {
                "id": "llanta-1",
                "posicion": 1,
                "marca": "Michelin",
                "diseno": "XZE2",
                "placa": "ABC123",
                "profundidadInicial": 10.0,
                "kilometrosRecorridos": 20000.0,
                "costo": [{ "valor": 400000.0, "fecha": "2024-01-10T00:00:00Z" }],
                "inspecciones": [{
                    "profundidadInt": 6.0,
                    "profundidadCen": 5.0,
                    "profundidadExt": 7.0,
                    "fecha": "2024-03-15T12:00:00Z"
                }],
                "vida": [{ "valor": "nueva", "fecha": "2024-01-10T00:00:00Z" }]
            },
            {
                // Llanta recién montada, sin desgaste: proyección "∞"
                "id": "llanta-2",
                "marca": "Bridgestone",
                "diseno": "R268",
                "profundidadInicial": 12.0,
                "kilometrosRecorridos": 500.0,
                "inspecciones": [{
                    "profundidadInt": 12.0,
                    "profundidadCen": 12.0,
                    "profundidadExt": 12.0,
                    "fecha": "2024-06-01T08:00:00Z"
                }],
                "vida": [{ "valor": "nueva", "fecha": "2024-05-20T00:00:00Z" }]
            }
        ]);
        Ok(serde_json::from_value(llantas).unwrap())
    }

    async fn obtener_vehiculos(&self) -> AppResult<Vec<Vehiculo>> {
        let vehiculos = json!([
            { "id": "vhc-1", "placa": "ABC123", "kilometrajeActual": 150000.0, "tireCount": 6 },
            { "id": "vhc-2", "placa": "xyz789", "kilometrajeActual": 90000.0, "tireCount": 10 }
        ]);
        Ok(serde_json::from_value(vehiculos).unwrap())
    }

    async fn obtener_usuarios(&self) -> AppResult<Vec<Usuario>> {
        let usuarios = json!([
            { "id": "u1", "nombre": "Ana", "role": "admin" },
            { "id": "u2", "nombre": "Luis", "role": "conductor" },
            { "id": "u3", "nombre": "Eva" }
        ]);
        Ok(serde_json::from_value(usuarios).unwrap())
    }
}

/// Proveedor que siempre falla, para el camino de error del boundary
struct ProveedorCaido;

#[async_trait]
impl ProveedorFlota for ProveedorCaido {
    async fn obtener_llantas(&self) -> AppResult<Vec<Llanta>> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }

    async fn obtener_vehiculos(&self) -> AppResult<Vec<Vehiculo>> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }

    async fn obtener_usuarios(&self) -> AppResult<Vec<Usuario>> {
        Err(AppError::ExternalApi("connection refused".to_string()))
    }
}

fn config_de_prueba() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        cors_origins: vec![],
        fleet_api_base_url: "http://localhost:9".to_string(),
        fleet_api_timeout_seconds: 1,
    }
}

fn crear_app(proveedor: Arc<dyn ProveedorFlota>) -> Router {
    let state = AppState::new(config_de_prueba(), proveedor);
    Router::new()
        .nest("/api/analytics", create_analytics_router())
        .with_state(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_resumen_flota() {
    let app = crear_app(Arc::new(ProveedorDePrueba));
    let (status, body) = get_json(app, "/api/analytics/flota").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_llantas"], 2);
    assert_eq!(body["llantas_criticas"], 0);

    let por_marca = body["por_marca"].as_array().unwrap();
    assert_eq!(por_marca.len(), 2);
    let michelin = por_marca
        .iter()
        .find(|g| g["clave"] == "Michelin")
        .unwrap();
    assert_eq!(michelin["cantidad"], 1);
    assert_eq!(michelin["porcentaje"], 50.0);
}

#[tokio::test]
async fn test_listado_llantas_formatea_centinelas() {
    let app = crear_app(Arc::new(ProveedorDePrueba));
    let (status, body) = get_json(app, "/api/analytics/llantas").await;

    assert_eq!(status, StatusCode::OK);
    let llantas = body.as_array().unwrap();
    assert_eq!(llantas.len(), 2);

    assert_eq!(llantas[0]["cpk"], 20.0);
    assert_eq!(llantas[0]["proyeccion_km"], "40000");
    assert_eq!(llantas[0]["profundidad_promedio"], "6.0");
    assert_eq!(llantas[0]["estado_vida"], "Nueva");

    // Sin desgaste -> proyección infinita
    assert_eq!(llantas[1]["proyeccion_km"], "∞");
    assert_eq!(llantas[1]["cpk_proyectado"], Value::Null);
    assert_eq!(llantas[1]["banda"], "buena");
}

#[tokio::test]
async fn test_distribucion_usuarios() {
    let app = crear_app(Arc::new(ProveedorDePrueba));
    let (status, body) = get_json(app, "/api/analytics/usuarios").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_usuarios"], 3);

    let por_rol = body["por_rol"].as_array().unwrap();
    let desconocido = por_rol
        .iter()
        .find(|g| g["rol"] == "desconocido")
        .unwrap();
    assert_eq!(desconocido["cantidad"], 1);
    assert_eq!(desconocido["porcentaje"], 33.3);
}

#[tokio::test]
async fn test_busqueda_de_vehiculos_case_insensitive() {
    let app = crear_app(Arc::new(ProveedorDePrueba));
    let (status, body) = get_json(app, "/api/analytics/vehiculos/buscar?placa=XYZ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["resultados"][0]["placa"], "xyz789");
}

#[tokio::test]
async fn test_panel_general() {
    let app = crear_app(Arc::new(ProveedorDePrueba));
    let (status, body) = get_json(app, "/api/analytics/panel").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flota"]["total_llantas"], 2);
    assert_eq!(body["usuarios"]["total_usuarios"], 3);
    assert_eq!(body["total_vehiculos"], 2);
}

#[tokio::test]
async fn test_backend_caido_responde_bad_gateway() {
    let app = crear_app(Arc::new(ProveedorCaido));
    let (status, body) = get_json(app, "/api/analytics/flota").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "EXTERNAL_API_ERROR");
}
