//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas. Ningún error se
//! traga ni se reintenta internamente: todos suben al caller tipados.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    /// Archivo de referencia ausente o malformado. Fatal en el arranque.
    #[error("Load error: {0}")]
    Load(String),

    #[error("Unknown airline: {0}")]
    UnknownAirline(String),

    /// La aerolínea configurada no tiene aeronaves ACTIVE.
    #[error("No aircraft carrier available: {0}")]
    NoCarrierAvailable(String),

    /// El conjunto de aeropuertos requerido para el sorteo está vacío.
    #[error("No airport available: {0}")]
    NoAirportAvailable(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Date parse error: {0}")]
    DateParse(String),

    #[error("Invalid record count: {0}")]
    InvalidCount(i64),

    #[error("Type mismatch in filter predicate: {0}")]
    TypeMismatch(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Load(msg) => {
                log::error!("Error de carga: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Load Error".to_string(),
                        message: "Reference tables could not be loaded".to_string(),
                        details: Some(json!({ "load_error": msg })),
                        code: Some("LOAD_ERROR".to_string()),
                    },
                )
            }

            AppError::UnknownAirline(code) => {
                log::warn!("Aerolínea desconocida: {}", code);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Unknown Airline".to_string(),
                        message: format!("Airline '{}' not found in reference tables", code),
                        details: None,
                        code: Some("UNKNOWN_AIRLINE".to_string()),
                    },
                )
            }

            AppError::NoCarrierAvailable(msg) => {
                log::warn!("Sin aeronaves disponibles: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "No Carrier Available".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NO_CARRIER_AVAILABLE".to_string()),
                    },
                )
            }

            AppError::NoAirportAvailable(msg) => {
                log::warn!("Sin aeropuertos disponibles: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse {
                        error: "No Airport Available".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NO_AIRPORT_AVAILABLE".to_string()),
                    },
                )
            }

            AppError::InvalidRange(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid Date Range".to_string(),
                    message: msg,
                    details: None,
                    code: Some("INVALID_RANGE".to_string()),
                },
            ),

            AppError::DateParse(value) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Date Parse Error".to_string(),
                    message: format!(
                        "'{}' is not a valid date (expected YYYY-MM-DD or YYYYMMDD)",
                        value
                    ),
                    details: None,
                    code: Some("DATE_PARSE_ERROR".to_string()),
                },
            ),

            AppError::InvalidCount(count) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Invalid Count".to_string(),
                    message: format!("Record count must be >= 1, got {}", count),
                    details: None,
                    code: Some("INVALID_COUNT".to_string()),
                },
            ),

            AppError::TypeMismatch(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Type Mismatch".to_string(),
                    message: msg,
                    details: None,
                    code: Some("TYPE_MISMATCH".to_string()),
                },
            ),

            AppError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                },
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
