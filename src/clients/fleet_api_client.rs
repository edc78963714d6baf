//! Cliente del backend de flota
//!
//! El backend de flota (auth, CRUD, persistencia) es un colaborador externo;
//! este cliente solo trae los snapshots de llantas, vehículos y usuarios que
//! consume el núcleo de analytics. Todo fallo de red o de deserialización
//! se devuelve como `AppError::ExternalApi`, nunca como pánico.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::models::llanta::Llanta;
use crate::models::usuario::Usuario;
use crate::models::vehiculo::Vehiculo;
use crate::utils::errors::{AppError, AppResult};

/// Fuente de snapshots de la flota. Abstraída para poder ejercitar los
/// controllers contra un stub en tests
#[async_trait]
pub trait ProveedorFlota: Send + Sync {
    async fn obtener_llantas(&self) -> AppResult<Vec<Llanta>>;
    async fn obtener_vehiculos(&self) -> AppResult<Vec<Vehiculo>>;
    async fn obtener_usuarios(&self) -> AppResult<Vec<Usuario>>;
}

/// Cliente HTTP real contra el backend de flota
pub struct FleetApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl FleetApiClient {
    pub fn new(base_url: String, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    async fn get_json<T: DeserializeOwned>(&self, ruta: &str) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ruta);
        info!("🌐 GET {}", url);

        let respuesta = self
            .client
            .get(&url)
            .header("User-Agent", "TireFleetAnalytics/1.0")
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("fallo de red en {}: {}", ruta, e)))?;

        let status = respuesta.status();
        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "GET {} respondió {}",
                ruta, status
            )));
        }

        respuesta
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("respuesta inválida de {}: {}", ruta, e)))
    }
}

#[async_trait]
impl ProveedorFlota for FleetApiClient {
    async fn obtener_llantas(&self) -> AppResult<Vec<Llanta>> {
        self.get_json("api/tires").await
    }

    async fn obtener_vehiculos(&self) -> AppResult<Vec<Vehiculo>> {
        self.get_json("api/vehicles").await
    }

    async fn obtener_usuarios(&self) -> AppResult<Vec<Usuario>> {
        self.get_json("api/users").await
    }
}
