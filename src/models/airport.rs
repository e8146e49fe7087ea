//! Modelo de Airport
//!
//! Mapea una fila de `airports.csv`. Las coordenadas se parsean como
//! grados decimales en el momento de la carga, no en cada acceso.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub iata: String,
    pub name: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
}

impl Airport {
    /// Coordenadas (latitud, longitud) en grados decimales.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}
