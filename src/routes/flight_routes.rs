use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::flight_controller::FlightController;
use crate::dto::flight_dto::{ApiResponse, FlightResponse, GenerateFlightsQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_flight_router() -> Router<AppState> {
    Router::new().route("/generate", get(generate_flights))
}

async fn generate_flights(
    State(state): State<AppState>,
    Query(query): Query<GenerateFlightsQuery>,
) -> Result<Json<ApiResponse<Vec<FlightResponse>>>, AppError> {
    let controller = FlightController::new(state.data.clone(), state.config.default_fare_rate);
    let response = controller.generate(query)?;
    Ok(Json(response))
}
