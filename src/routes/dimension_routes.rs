use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::dimension_controller::DimensionController;
use crate::dto::dimension_dto::{
    AirlineFilters, AirlineResponse, AirportFilters, AirportResponse, CarrierFilters,
    CarrierResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airport_router() -> Router<AppState> {
    Router::new().route("/", get(list_airports))
}

pub fn create_airline_router() -> Router<AppState> {
    Router::new().route("/", get(list_airlines))
}

pub fn create_carrier_router() -> Router<AppState> {
    Router::new().route("/", get(list_aircraft_carriers))
}

async fn list_airports(
    State(state): State<AppState>,
    Query(filters): Query<AirportFilters>,
) -> Result<Json<Vec<AirportResponse>>, AppError> {
    let controller = DimensionController::new(state.data.clone());
    let response = controller.list_airports(filters)?;
    Ok(Json(response))
}

async fn list_airlines(
    State(state): State<AppState>,
    Query(filters): Query<AirlineFilters>,
) -> Result<Json<Vec<AirlineResponse>>, AppError> {
    let controller = DimensionController::new(state.data.clone());
    let response = controller.list_airlines(filters)?;
    Ok(Json(response))
}

async fn list_aircraft_carriers(
    State(state): State<AppState>,
    Query(filters): Query<CarrierFilters>,
) -> Result<Json<Vec<CarrierResponse>>, AppError> {
    let controller = DimensionController::new(state.data.clone());
    let response = controller.list_aircraft_carriers(filters)?;
    Ok(Json(response))
}
