//! Tablas de referencia en memoria
//!
//! Las tres tablas se cargan una única vez al arranque del proceso y
//! son de sólo lectura de ahí en adelante. Un fallo en cualquiera de
//! ellas aborta la inicialización completa.

use std::path::Path;

use crate::models::{AircraftCarrier, Airline, Airport};
use crate::store::csv_loader::load_table;
use crate::utils::errors::AppError;

/// Nombres de archivo convencionales dentro del directorio de datos.
const AIRLINES_FILE: &str = "airlines.csv";
const CARRIERS_FILE: &str = "aircraft_carriers.csv";
const AIRPORTS_FILE: &str = "airports.csv";

/// Conjunto inmutable de tablas de referencia.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub airlines: Vec<Airline>,
    pub aircraft_carriers: Vec<AircraftCarrier>,
    pub airports: Vec<Airport>,
}

impl ReferenceData {
    /// Carga las tres tablas desde `dir`. Sin estado parcial: o cargan
    /// todas, o la inicialización falla con `LoadError`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, AppError> {
        let airlines: Vec<Airline> = load_table(&dir.join(AIRLINES_FILE))?;
        let aircraft_carriers: Vec<AircraftCarrier> = load_table(&dir.join(CARRIERS_FILE))?;
        let airports: Vec<Airport> = load_table(&dir.join(AIRPORTS_FILE))?;

        log::info!(
            "Tablas de referencia cargadas: {} aerolíneas, {} aeronaves, {} aeropuertos",
            airlines.len(),
            aircraft_carriers.len(),
            airports.len()
        );

        Ok(Self {
            airlines,
            aircraft_carriers,
            airports,
        })
    }

    /// Busca una aerolínea por su código único.
    pub fn find_airline(&self, code: &str) -> Option<&Airline> {
        self.airlines.iter().find(|a| a.code == code)
    }
}
