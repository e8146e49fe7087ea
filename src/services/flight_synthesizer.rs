//! Flight Synthesizer
//!
//! El núcleo del sistema: dado una aerolínea configurada y un rango de
//! fechas, sortea una aeronave y un par de aeropuertos según las reglas
//! doméstico/internacional, calcula distancia y tarifa, y ensambla un
//! [`FlightRecord`].
//!
//! Toda fuente de aleatoriedad entra por `&mut impl Rng`, de modo que
//! los tests pueden inyectar un generador con semilla fija.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{AircraftCarrier, AircraftStatus, Airline, Airport, FlightRecord};
use crate::services::{date_sampler, geo};
use crate::store::ReferenceData;
use crate::utils::errors::AppError;

/// Tarifa por kilómetro por defecto, en USD.
pub const DEFAULT_FARE_RATE: f64 = 0.12;

/// Direccionalidad de un vuelo internacional respecto del país de la
/// aerolínea: `In` llega al país, `Out` sale de él.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightDirection {
    In,
    Out,
    Random,
}

/// Generador de vuelos sintéticos para una aerolínea concreta.
///
/// El estado por instancia (aerolínea, aeronaves activas, partición de
/// aeropuertos en locales/extranjeros) se resuelve una sola vez en
/// [`FlightSynthesizer::configure`]; cada generación sólo lee.
pub struct FlightSynthesizer {
    airline: Airline,
    active_carriers: Vec<AircraftCarrier>,
    local_airports: Vec<Airport>,
    foreign_airports: Vec<Airport>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    fare_rate: f64,
}

impl FlightSynthesizer {
    /// Configura un generador para `airline_code`.
    ///
    /// Falla con `UnknownAirline` si el código no existe en las tablas
    /// de referencia y con `InvalidRange` si `start_date > end_date`;
    /// en ambos casos no queda nada construido a medias.
    pub fn configure(
        data: &ReferenceData,
        airline_code: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        fare_rate: f64,
    ) -> Result<Self, AppError> {
        if start_date > end_date {
            return Err(AppError::InvalidRange(format!(
                "la fecha inicial {} es posterior a la final {}",
                start_date, end_date
            )));
        }

        let airline = data
            .find_airline(airline_code)
            .cloned()
            .ok_or_else(|| AppError::UnknownAirline(airline_code.to_string()))?;

        let active_carriers: Vec<AircraftCarrier> = data
            .aircraft_carriers
            .iter()
            .filter(|c| {
                c.airline_id == airline.id && c.aircraft_status == AircraftStatus::Active
            })
            .cloned()
            .collect();

        let (local_airports, foreign_airports): (Vec<Airport>, Vec<Airport>) = data
            .airports
            .iter()
            .cloned()
            .partition(|a| a.country_code == airline.country_code);

        log::debug!(
            "Generador configurado para {}: {} aeronaves activas, {} aeropuertos locales, {} extranjeros",
            airline.code,
            active_carriers.len(),
            local_airports.len(),
            foreign_airports.len()
        );

        Ok(Self {
            airline,
            active_carriers,
            local_airports,
            foreign_airports,
            start_date,
            end_date,
            fare_rate,
        })
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    pub fn set_fare_rate(&mut self, fare_rate: f64) {
        self.fare_rate = fare_rate;
    }

    /// Reemplaza el rango de fechas de salida, revalidando `start <= end`.
    pub fn set_departure_date_range(
        &mut self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), AppError> {
        if start_date > end_date {
            return Err(AppError::InvalidRange(format!(
                "la fecha inicial {} es posterior a la final {}",
                start_date, end_date
            )));
        }
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    fn sample_carrier<'a>(&'a self, rng: &mut impl Rng) -> Result<&'a AircraftCarrier, AppError> {
        self.active_carriers.choose(rng).ok_or_else(|| {
            AppError::NoCarrierAvailable(format!(
                "la aerolínea {} no tiene aeronaves activas",
                self.airline.code
            ))
        })
    }

    fn sample_airport<'a>(
        &'a self,
        rng: &mut impl Rng,
        domestic: bool,
    ) -> Result<&'a Airport, AppError> {
        let (pool, scope) = if domestic {
            (&self.local_airports, "locales")
        } else {
            (&self.foreign_airports, "extranjeros")
        };

        pool.choose(rng).ok_or_else(|| {
            AppError::NoAirportAvailable(format!(
                "no hay aeropuertos {} para el país {}",
                scope, self.airline.country_code
            ))
        })
    }

    /// Genera un único vuelo sintético.
    ///
    /// Reglas de direccionalidad:
    /// - doméstico: origen y destino se sortean independientemente (con
    ///   reemplazo) entre los dos aeropuertos muestreados, así que pueden
    ///   coincidir en el mismo aeropuerto;
    /// - internacional `In`: origen extranjero, destino local;
    /// - internacional `Out`: origen local, destino extranjero;
    /// - internacional `Random`: mismo sorteo independiente que el caso
    ///   doméstico.
    pub fn generate_flight(
        &self,
        rng: &mut impl Rng,
        domestic: bool,
        direction: FlightDirection,
    ) -> Result<FlightRecord, AppError> {
        let carrier = self.sample_carrier(rng)?;
        let domestic_side = self.sample_airport(rng, true)?;
        let counter = self.sample_airport(rng, domestic)?;

        let distance_km = geo::distance_km(domestic_side.coordinates(), counter.coordinates());
        let fare_usd = geo::fare_usd(distance_km, self.fare_rate);
        let departure_time =
            date_sampler::random_date(self.start_date, self.end_date, true, rng)?;

        let (origin, destination) = match (domestic, direction) {
            (false, FlightDirection::In) => (counter, domestic_side),
            (false, FlightDirection::Out) => (domestic_side, counter),
            _ => {
                // Sorteo independiente con reemplazo para cada extremo
                let pair = [domestic_side, counter];
                (pair[rng.gen_range(0..2)], pair[rng.gen_range(0..2)])
            }
        };

        Ok(FlightRecord {
            airline: self.airline.clone(),
            aircraft_carrier: Some(carrier.clone()),
            origin: origin.clone(),
            destination: destination.clone(),
            departure_time,
            distance_km,
            fare_usd,
        })
    }

    /// Genera `count` vuelos independientes. El batch es atómico: si una
    /// generación intermedia falla, no se devuelve ningún resultado parcial.
    pub fn generate_batch(
        &self,
        rng: &mut impl Rng,
        count: i64,
        domestic: bool,
        direction: FlightDirection,
    ) -> Result<Vec<FlightRecord>, AppError> {
        if count < 1 {
            return Err(AppError::InvalidCount(count));
        }

        (0..count)
            .map(|_| self.generate_flight(rng, domestic, direction))
            .collect()
    }

    /// Vuelos con ambos extremos en el país de la aerolínea.
    pub fn generate_domestic(
        &self,
        rng: &mut impl Rng,
        count: i64,
    ) -> Result<Vec<FlightRecord>, AppError> {
        self.generate_batch(rng, count, true, FlightDirection::Random)
    }

    /// Vuelos con un extremo local y otro extranjero.
    pub fn generate_international(
        &self,
        rng: &mut impl Rng,
        count: i64,
        direction: FlightDirection,
    ) -> Result<Vec<FlightRecord>, AppError> {
        self.generate_batch(rng, count, false, direction)
    }
}
