//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! a los JSON que entrega el backend de flota (nombres de campo en
//! camelCase español, tal como viajan por el wire).

pub mod llanta;
pub mod usuario;
pub mod vehiculo;
