//! Modelo de Airline
//!
//! Mapea una fila de `airlines.csv`. Inmutable después de la carga.

use serde::{Deserialize, Serialize};

/// Aerolínea de referencia. `code` es el identificador único de cara a la API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}
