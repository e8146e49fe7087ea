//! Controllers de la API
//!
//! Validan la entrada, orquestan los servicios y convierten los
//! resultados a DTOs de respuesta.

pub mod dimension_controller;
pub mod flight_controller;
