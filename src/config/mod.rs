//! Configuración del proyecto
//!
//! Este módulo contiene las variables de entorno y otras
//! configuraciones del sistema.

pub mod environment;

pub use environment::*;
