//! DTOs de las tablas de referencia (listados de sólo lectura)

use serde::{Deserialize, Serialize};

use crate::models::{AircraftCarrier, Airline, Airport};

/// Filtros para `GET /api/airports`
#[derive(Debug, Deserialize)]
pub struct AirportFilters {
    pub iata_code: Option<String>,
    pub country_code: Option<String>,
}

/// Filtros para `GET /api/airlines`
#[derive(Debug, Deserialize)]
pub struct AirlineFilters {
    pub airline_code: Option<String>,
    pub country_code: Option<String>,
}

/// Filtros para `GET /api/aircraft-carriers`
#[derive(Debug, Deserialize)]
pub struct CarrierFilters {
    pub airline_code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AirlineResponse {
    pub id: String,
    pub code: String,
    pub name: String,
    pub country_code: String,
}

impl From<Airline> for AirlineResponse {
    fn from(airline: Airline) -> Self {
        Self {
            id: airline.id,
            code: airline.code,
            name: airline.name,
            country_code: airline.country_code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarrierResponse {
    pub id: String,
    pub airline_id: String,
    pub registration: String,
    pub model: String,
    pub aircraft_status: String,
}

impl From<AircraftCarrier> for CarrierResponse {
    fn from(carrier: AircraftCarrier) -> Self {
        Self {
            id: carrier.id,
            airline_id: carrier.airline_id,
            registration: carrier.registration,
            model: carrier.model,
            aircraft_status: carrier.aircraft_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AirportResponse {
    pub iata: String,
    pub name: String,
    pub country_code: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<Airport> for AirportResponse {
    fn from(airport: Airport) -> Self {
        Self {
            iata: airport.iata,
            name: airport.name,
            country_code: airport.country_code,
            lat: airport.lat,
            lon: airport.lon,
        }
    }
}
