//! DTOs de salida hacia la capa de presentación

pub mod analytics_dto;
