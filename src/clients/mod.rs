//! Clientes HTTP hacia servicios externos

pub mod fleet_api_client;

pub use fleet_api_client::{FleetApiClient, ProveedorFlota};
