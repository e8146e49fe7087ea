//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las
//! variables tienen un valor por defecto razonable para desarrollo.

use std::env;

use crate::services::DEFAULT_FARE_RATE;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Directorio con las tablas de referencia delimitadas por `|`.
    pub data_dir: String,
    /// Tarifa USD por kilómetro usada si la request no trae una.
    pub default_fare_rate: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "dimensions".to_string()),
            default_fare_rate: env::var("DEFAULT_FARE_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FARE_RATE),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
