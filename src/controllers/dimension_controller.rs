//! Controller de tablas de referencia
//!
//! Listados de sólo lectura sobre el Reference Data Store, con filtros
//! opcionales resueltos por el Filter Engine. Pass-through puro: sin
//! lógica de negocio.

use std::sync::Arc;

use crate::dto::dimension_dto::{
    AirlineFilters, AirlineResponse, AirportFilters, AirportResponse, CarrierFilters,
    CarrierResponse,
};
use crate::store::{filter, Predicate, ReferenceData};
use crate::utils::errors::AppResult;

pub struct DimensionController {
    data: Arc<ReferenceData>,
}

impl DimensionController {
    pub fn new(data: Arc<ReferenceData>) -> Self {
        Self { data }
    }

    pub fn list_airports(&self, filters: AirportFilters) -> AppResult<Vec<AirportResponse>> {
        let mut predicates = Vec::new();
        if let Some(country_code) = filters.country_code {
            predicates.push(Predicate::eq("countryCode", country_code));
        }
        if let Some(iata_code) = filters.iata_code {
            predicates.push(Predicate::eq("iata", iata_code));
        }

        let rows = filter(&self.data.airports, &predicates)?;
        Ok(rows.into_iter().cloned().map(Into::into).collect())
    }

    pub fn list_airlines(&self, filters: AirlineFilters) -> AppResult<Vec<AirlineResponse>> {
        let mut predicates = Vec::new();
        if let Some(country_code) = filters.country_code {
            predicates.push(Predicate::eq("countryCode", country_code));
        }
        if let Some(airline_code) = filters.airline_code {
            predicates.push(Predicate::eq("code", airline_code));
        }

        let rows = filter(&self.data.airlines, &predicates)?;
        Ok(rows.into_iter().cloned().map(Into::into).collect())
    }

    pub fn list_aircraft_carriers(
        &self,
        filters: CarrierFilters,
    ) -> AppResult<Vec<CarrierResponse>> {
        let mut predicates = Vec::new();
        if let Some(airline_code) = filters.airline_code {
            // Las filas de aeronaves referencian el id interno de la
            // aerolínea, no su código público: resolver primero.
            match self.data.find_airline(&airline_code) {
                Some(airline) => predicates.push(Predicate::eq("airlineId", airline.id.clone())),
                None => return Ok(Vec::new()),
            }
        }

        let rows = filter(&self.data.aircraft_carriers, &predicates)?;
        Ok(rows.into_iter().cloned().map(Into::into).collect())
    }
}
