//! Modelo de FlightRecord
//!
//! Vuelo sintetizado, efímero: se crea en cada llamada de generación y
//! pertenece exclusivamente al caller que lo recibe. No se persiste.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{AircraftCarrier, Airline, Airport};

#[derive(Debug, Clone, Serialize)]
pub struct FlightRecord {
    pub airline: Airline,
    pub aircraft_carrier: Option<AircraftCarrier>,
    pub origin: Airport,
    pub destination: Airport,
    pub departure_time: NaiveDateTime,
    pub distance_km: f64,
    pub fare_usd: f64,
}
