//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Las tablas de referencia se cargan una
//! sola vez y se comparten de sólo lectura entre handlers.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::store::ReferenceData;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<ReferenceData>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(data: ReferenceData, config: EnvironmentConfig) -> Self {
        Self {
            data: Arc::new(data),
            config,
        }
    }
}
