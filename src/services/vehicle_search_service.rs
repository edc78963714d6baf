//! Servicio de búsqueda de vehículos
//!
//! La placa es la clave de búsqueda principal de cara al usuario; el match
//! es case-insensitive y por subcadena.

use crate::models::vehiculo::Vehiculo;

/// Filtra un snapshot de vehículos por placa; consulta vacía devuelve todo
pub fn buscar_por_placa<'a>(vehiculos: &'a [Vehiculo], consulta: &str) -> Vec<&'a Vehiculo> {
    let consulta = consulta.trim().to_lowercase();
    if consulta.is_empty() {
        return vehiculos.iter().collect();
    }

    vehiculos
        .iter()
        .filter(|vehiculo| vehiculo.placa.to_lowercase().contains(&consulta))
        .collect()
}
