//! Reference Data Store
//!
//! Este módulo carga las tablas de referencia (aerolíneas, aeronaves,
//! aeropuertos) desde archivos delimitados y las mantiene en memoria,
//! de sólo lectura, durante toda la vida del proceso. También contiene
//! el evaluador genérico de predicados sobre esas tablas.

pub mod csv_loader;
pub mod filter;
pub mod reference_data;

pub use csv_loader::*;
pub use filter::*;
pub use reference_data::*;
