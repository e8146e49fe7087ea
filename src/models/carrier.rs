//! Modelo de AircraftCarrier
//!
//! Mapea una fila de `aircraft_carriers.csv`. Sólo las aeronaves con
//! estado ACTIVE son elegibles para el muestreo de vuelos.

use serde::{Deserialize, Serialize};

/// Estado operativo de la aeronave - mapea la columna `aircraftStatus`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftStatus {
    Active,
    Inactive,
    Maintenance,
}

impl AircraftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AircraftStatus::Active => "ACTIVE",
            AircraftStatus::Inactive => "INACTIVE",
            AircraftStatus::Maintenance => "MAINTENANCE",
        }
    }
}

/// Aeronave de una aerolínea. `airline_id` es clave foránea hacia [`super::Airline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftCarrier {
    pub id: String,
    #[serde(rename = "airlineId")]
    pub airline_id: String,
    pub registration: String,
    pub model: String,
    #[serde(rename = "aircraftStatus")]
    pub aircraft_status: AircraftStatus,
}
