//! DTOs de la API
//!
//! Requests y responses HTTP, separados de los modelos internos.

pub mod dimension_dto;
pub mod flight_dto;
