//! Servicio de agregación
//!
//! Agrupación de snapshots por una clave (marca, diseño, rol) con conteo,
//! promedio de una métrica derivada y porcentaje del total. Un grupo nunca
//! se indexa por cadena vacía: las claves en blanco se normalizan a
//! "Desconocido". El promedio de un grupo sin datos es el centinela "N/A",
//! no un cero numérico.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::models::llanta::Llanta;
use crate::models::usuario::Usuario;
use crate::services::cost_service;

/// Etiqueta para claves de agrupación vacías
pub const GRUPO_DESCONOCIDO: &str = "Desconocido";

/// Rol por defecto cuando el usuario no tiene rol asignado
pub const ROL_DESCONOCIDO: &str = "desconocido";

/// Promedio de una métrica sobre un grupo; "N/A" cuando no hay datos
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promedio {
    Valor(f64),
    NoDisponible,
}

impl Serialize for Promedio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Promedio::Valor(valor) => serializer.serialize_f64(*valor),
            Promedio::NoDisponible => serializer.serialize_str("N/A"),
        }
    }
}

/// Resumen de un grupo de llantas (eje marca o diseño)
#[derive(Debug, Clone, Serialize)]
pub struct GrupoLlantas {
    pub clave: String,
    pub cantidad: usize,
    pub cpk_promedio: Promedio,
    pub kilometros_promedio: Promedio,
    pub porcentaje: f64,
}

/// Resumen de un grupo de usuarios por rol
#[derive(Debug, Clone, Serialize)]
pub struct GrupoUsuarios {
    pub rol: String,
    pub cantidad: usize,
    pub porcentaje: f64,
}

/// Claves vacías o en blanco se sustituyen por "Desconocido"
pub fn normalizar_clave(clave: &str) -> String {
    let limpia = clave.trim();
    if limpia.is_empty() {
        GRUPO_DESCONOCIDO.to_string()
    } else {
        limpia.to_string()
    }
}

/// Agrupación genérica por clave normalizada; orden determinista por clave
pub fn agrupar<'a, T, F>(items: &'a [T], clave: F) -> BTreeMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> String,
{
    let mut grupos: BTreeMap<String, Vec<&T>> = BTreeMap::new();
    for item in items {
        grupos.entry(normalizar_clave(&clave(item))).or_default().push(item);
    }
    grupos
}

/// Promedio de una métrica sobre un grupo; grupo vacío -> "N/A"
pub fn promedio<T, F>(grupo: &[&T], metrica: F) -> Promedio
where
    F: Fn(&T) -> f64,
{
    if grupo.is_empty() {
        return Promedio::NoDisponible;
    }
    let suma: f64 = grupo.iter().map(|item| metrica(item)).sum();
    Promedio::Valor(suma / grupo.len() as f64)
}

/// Porcentaje del total redondeado a un decimal, con guarda de total cero
pub fn porcentaje(cantidad: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((cantidad as f64 / total as f64) * 1000.0).round() / 10.0
}

fn resumir_llantas<F>(llantas: &[Llanta], clave: F) -> Vec<GrupoLlantas>
where
    F: Fn(&Llanta) -> String,
{
    let total = llantas.len();
    agrupar(llantas, clave)
        .into_iter()
        .map(|(clave, grupo)| GrupoLlantas {
            cantidad: grupo.len(),
            cpk_promedio: promedio(&grupo, |llanta| cost_service::cpk(llanta)),
            kilometros_promedio: promedio(&grupo, |llanta| llanta.kilometros_recorridos),
            porcentaje: porcentaje(grupo.len(), total),
            clave,
        })
        .collect()
}

/// Eje de agregación por marca
pub fn resumir_llantas_por_marca(llantas: &[Llanta]) -> Vec<GrupoLlantas> {
    resumir_llantas(llantas, |llanta| llanta.marca.clone())
}

/// Eje de agregación por diseño de banda
pub fn resumir_llantas_por_diseno(llantas: &[Llanta]) -> Vec<GrupoLlantas> {
    resumir_llantas(llantas, |llanta| llanta.diseno.clone())
}

/// Distribución de usuarios por rol; sin rol cuenta como "desconocido"
pub fn resumir_usuarios_por_rol(usuarios: &[Usuario]) -> Vec<GrupoUsuarios> {
    let total = usuarios.len();
    agrupar(usuarios, |usuario| {
        usuario
            .role
            .as_deref()
            .map(str::trim)
            .filter(|rol| !rol.is_empty())
            .unwrap_or(ROL_DESCONOCIDO)
            .to_string()
    })
    .into_iter()
    .map(|(rol, grupo)| GrupoUsuarios {
        cantidad: grupo.len(),
        porcentaje: porcentaje(grupo.len(), total),
        rol,
    })
    .collect()
}
