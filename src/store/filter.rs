//! Filter Engine
//!
//! Evaluador genérico de predicados sobre las tablas de referencia.
//! Cada predicado es `(campo, operador, valor)` y una fila matchea si
//! TODOS los predicados se cumplen (AND lógico). El orden de entrada
//! se preserva en la salida.

use crate::models::{AircraftCarrier, Airline, Airport};
use crate::utils::errors::AppError;
use std::cmp::Ordering;

/// Valor de campo ya resuelto a su tipo natural (texto o numérico).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Operadores de comparación soportados.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

/// Predicado sobre un campo con nombre.
#[derive(Debug, Clone)]
pub struct Predicate {
    pub field: String,
    pub op: FilterOp,
    pub value: FieldValue,
}

impl Predicate {
    pub fn new(field: &str, op: FilterOp, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.to_string(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: &str, value: impl Into<FieldValue>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    pub fn ne(field: &str, value: impl Into<FieldValue>) -> Self {
        Self::new(field, FilterOp::Ne, value)
    }
}

/// Acceso por nombre a los campos de una fila tipada.
///
/// Un nombre de campo desconocido devuelve `None`: el predicado no
/// matchea, pero no es un error.
pub trait Filterable {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

impl Filterable for Airline {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "code" => Some(FieldValue::Text(self.code.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "countryCode" => Some(FieldValue::Text(self.country_code.clone())),
            _ => None,
        }
    }
}

impl Filterable for AircraftCarrier {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "airlineId" => Some(FieldValue::Text(self.airline_id.clone())),
            "registration" => Some(FieldValue::Text(self.registration.clone())),
            "model" => Some(FieldValue::Text(self.model.clone())),
            "aircraftStatus" => Some(FieldValue::Text(self.aircraft_status.as_str().to_string())),
            _ => None,
        }
    }
}

impl Filterable for Airport {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "iata" => Some(FieldValue::Text(self.iata.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "countryCode" => Some(FieldValue::Text(self.country_code.clone())),
            "lat" => Some(FieldValue::Number(self.lat)),
            "lon" => Some(FieldValue::Number(self.lon)),
            _ => None,
        }
    }
}

/// Devuelve las filas para las que todos los predicados se cumplen.
pub fn filter<'a, T: Filterable>(
    rows: &'a [T],
    predicates: &[Predicate],
) -> Result<Vec<&'a T>, AppError> {
    let mut matched = Vec::new();

    'rows: for row in rows {
        for predicate in predicates {
            match row.field(&predicate.field) {
                Some(actual) => {
                    if !compare(&actual, predicate.op, &predicate.value)? {
                        continue 'rows;
                    }
                }
                // Campo inexistente: la fila no matchea este predicado
                None => continue 'rows,
            }
        }
        matched.push(row);
    }

    Ok(matched)
}

fn compare(actual: &FieldValue, op: FilterOp, expected: &FieldValue) -> Result<bool, AppError> {
    let ordering = match (actual, expected) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b).ok_or_else(|| {
            AppError::TypeMismatch(format!("comparación numérica no ordenable: {} vs {}", a, b))
        })?,
        (a, b) => {
            return Err(AppError::TypeMismatch(format!(
                "no se puede comparar {:?} con {:?}",
                a, b
            )))
        }
    };

    Ok(match op {
        FilterOp::Eq => ordering == Ordering::Equal,
        FilterOp::Ne => ordering != Ordering::Equal,
        FilterOp::Lt => ordering == Ordering::Less,
        FilterOp::Gt => ordering == Ordering::Greater,
        FilterOp::Le => ordering != Ordering::Greater,
        FilterOp::Ge => ordering != Ordering::Less,
    })
}
