//! DTOs de generación de vuelos

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::dimension_dto::{AirlineResponse, AirportResponse, CarrierResponse};
use crate::models::FlightRecord;
use crate::services::FlightDirection;

/// Formato de salida del timestamp de despegue.
const DEPARTURE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tipo de vuelo solicitado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightType {
    Domestic,
    International,
}

/// Query de `GET /api/flights/generate`
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateFlightsQuery {
    #[validate(length(min = 2, max = 3))]
    pub airline_code: String,

    pub start_date: String,
    pub end_date: String,

    pub flight_type: FlightType,

    /// Sólo aplica a vuelos internacionales; ausente equivale a aleatorio.
    pub direction: Option<FlightDirection>,

    pub num_records: Option<i64>,

    #[validate(range(min = 0.0))]
    pub fare_rate: Option<f64>,
}

/// Vuelo generado, tal como sale por la API
#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub airline: AirlineResponse,
    pub aircraft_carrier: Option<CarrierResponse>,
    pub origin: AirportResponse,
    pub destination: AirportResponse,
    pub departure_time: String,
    pub distance_km: f64,
    pub fare_usd: f64,
}

impl From<FlightRecord> for FlightResponse {
    fn from(flight: FlightRecord) -> Self {
        Self {
            airline: flight.airline.into(),
            aircraft_carrier: flight.aircraft_carrier.map(Into::into),
            origin: flight.origin.into(),
            destination: flight.destination.into(),
            departure_time: flight
                .departure_time
                .format(DEPARTURE_TIME_FORMAT)
                .to_string(),
            distance_km: flight.distance_km,
            fare_usd: flight.fare_usd,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
