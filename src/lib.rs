//! Flight Synth API
//!
//! Sintetizador de registros de vuelo plausibles (domésticos e
//! internacionales) a partir de tablas de referencia estáticas de
//! aerolíneas, aeronaves y aeropuertos, expuesto como una API de
//! consulta pequeña.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
