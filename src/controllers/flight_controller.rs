//! Controller de generación de vuelos
//!
//! Orquesta el [`FlightSynthesizer`]: valida la query, configura el
//! generador para la aerolínea pedida y devuelve el batch completo o
//! un error tipado (nunca un batch parcial).

use std::sync::Arc;

use validator::Validate;

use crate::dto::flight_dto::{ApiResponse, FlightResponse, FlightType, GenerateFlightsQuery};
use crate::services::date_sampler::parse_date;
use crate::services::{FlightDirection, FlightSynthesizer};
use crate::store::ReferenceData;
use crate::utils::errors::AppResult;

pub struct FlightController {
    data: Arc<ReferenceData>,
    default_fare_rate: f64,
}

impl FlightController {
    pub fn new(data: Arc<ReferenceData>, default_fare_rate: f64) -> Self {
        Self {
            data,
            default_fare_rate,
        }
    }

    pub fn generate(
        &self,
        query: GenerateFlightsQuery,
    ) -> AppResult<ApiResponse<Vec<FlightResponse>>> {
        query.validate()?;

        let start_date = parse_date(&query.start_date)?;
        let end_date = parse_date(&query.end_date)?;
        let fare_rate = query.fare_rate.unwrap_or(self.default_fare_rate);
        let num_records = query.num_records.unwrap_or(1);
        let direction = query.direction.unwrap_or(FlightDirection::Random);

        let synthesizer = FlightSynthesizer::configure(
            &self.data,
            &query.airline_code,
            start_date,
            end_date,
            fare_rate,
        )?;

        let mut rng = rand::thread_rng();
        let flights = match query.flight_type {
            FlightType::Domestic => synthesizer.generate_domestic(&mut rng, num_records)?,
            FlightType::International => {
                synthesizer.generate_international(&mut rng, num_records, direction)?
            }
        };

        log::info!(
            "Generados {} vuelos {:?} para {}",
            flights.len(),
            query.flight_type,
            synthesizer.airline().code
        );

        let responses: Vec<FlightResponse> = flights.into_iter().map(Into::into).collect();
        Ok(ApiResponse::success_with_message(
            responses,
            format!("{} vuelos generados", num_records),
        ))
    }
}
