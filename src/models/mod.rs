//! Modelos del sistema
//!
//! Este módulo contiene los registros tipados que mapean exactamente
//! a las tablas de referencia (delimitadas por `|`) y el vuelo generado.

pub mod airline;
pub mod airport;
pub mod carrier;
pub mod flight;

pub use airline::*;
pub use airport::*;
pub use carrier::*;
pub use flight::*;
