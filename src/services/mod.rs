//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: cálculo
//! geográfico, muestreo de fechas y el sintetizador de vuelos.

pub mod date_sampler;
pub mod flight_synthesizer;
pub mod geo;

pub use flight_synthesizer::*;
