use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::path::Path;
use tower::ServiceExt;

use flight_synth_api::config::environment::EnvironmentConfig;
use flight_synth_api::routes::create_app_router;
use flight_synth_api::state::AppState;
use flight_synth_api::store::ReferenceData;

// Función helper para crear la app de test sobre las tablas de ejemplo
fn create_test_app() -> Router {
    let data = ReferenceData::load_from_dir(Path::new("dimensions"))
        .expect("las tablas de ejemplo deberían cargar");
    create_app_router(AppState::new(data, EnvironmentConfig::default()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "flight-synth-api");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_airports_filtered_by_country() {
    let (status, body) = get(create_test_app(), "/api/airports?country_code=IDN").await;

    assert_eq!(status, StatusCode::OK);
    let airports = body.as_array().unwrap();
    assert_eq!(airports.len(), 4);
    for airport in airports {
        assert_eq!(airport["country_code"], "IDN");
    }
}

#[tokio::test]
async fn test_list_airports_by_iata() {
    let (status, body) = get(create_test_app(), "/api/airports?iata_code=SIN").await;

    assert_eq!(status, StatusCode::OK);
    let airports = body.as_array().unwrap();
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0]["name"], "Singapore Changi Airport");
}

#[tokio::test]
async fn test_list_airlines_unfiltered_preserves_order() {
    let (status, body) = get(create_test_app(), "/api/airlines").await;

    assert_eq!(status, StatusCode::OK);
    let airlines = body.as_array().unwrap();
    assert_eq!(airlines.len(), 5);
    assert_eq!(airlines[0]["code"], "GA");
    assert_eq!(airlines[4]["code"], "BA");
}

#[tokio::test]
async fn test_list_carriers_by_airline_code() {
    let (status, body) = get(create_test_app(), "/api/aircraft-carriers?airline_code=GA").await;

    assert_eq!(status, StatusCode::OK);
    let carriers = body.as_array().unwrap();
    assert_eq!(carriers.len(), 3);
    for carrier in carriers {
        assert_eq!(carrier["airline_id"], "1");
    }
}

#[tokio::test]
async fn test_list_carriers_unknown_airline_is_empty() {
    let (status, body) = get(create_test_app(), "/api/aircraft-carriers?airline_code=ZZ").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_domestic_flights() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=2024-01-01&end_date=2024-01-31&flight_type=domestic&num_records=3";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let flights = body["data"].as_array().unwrap();
    assert_eq!(flights.len(), 3);
    for flight in flights {
        assert_eq!(flight["airline"]["code"], "GA");
        assert_eq!(flight["origin"]["country_code"], "IDN");
        assert_eq!(flight["destination"]["country_code"], "IDN");
        assert!(flight["distance_km"].as_f64().unwrap() >= 0.0);
        assert!(flight["fare_usd"].as_f64().unwrap() >= 0.0);
    }
}

#[tokio::test]
async fn test_generate_international_out() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=20240101&end_date=20240131&flight_type=international&direction=out&num_records=5";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body["data"].as_array().unwrap();
    assert_eq!(flights.len(), 5);
    for flight in flights {
        assert_eq!(flight["origin"]["country_code"], "IDN");
        assert_ne!(flight["destination"]["country_code"], "IDN");
    }
}

#[tokio::test]
async fn test_generate_international_in() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=2024-01-01&end_date=2024-01-31&flight_type=international&direction=in";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    let flights = body["data"].as_array().unwrap();
    assert_eq!(flights.len(), 1);
    assert_ne!(flights[0]["origin"]["country_code"], "IDN");
    assert_eq!(flights[0]["destination"]["country_code"], "IDN");
}

#[tokio::test]
async fn test_generate_unknown_airline() {
    let uri = "/api/flights/generate?airline_code=ZZ&start_date=2024-01-01&end_date=2024-01-31&flight_type=domestic";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "UNKNOWN_AIRLINE");
}

#[tokio::test]
async fn test_generate_invalid_count() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=2024-01-01&end_date=2024-01-31&flight_type=domestic&num_records=0";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_COUNT");
}

#[tokio::test]
async fn test_generate_inverted_date_range() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=2024-02-01&end_date=2024-01-01&flight_type=domestic";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RANGE");
}

#[tokio::test]
async fn test_generate_unparseable_date() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=01-01-2024&end_date=2024-01-31&flight_type=domestic";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DATE_PARSE_ERROR");
}

#[tokio::test]
async fn test_generate_departure_time_format() {
    let uri = "/api/flights/generate?airline_code=GA&start_date=2024-06-01&end_date=2024-06-01&flight_type=domestic";
    let (status, body) = get(create_test_app(), uri).await;

    assert_eq!(status, StatusCode::OK);
    let departure = body["data"][0]["departure_time"].as_str().unwrap();
    // "YYYY-MM-DD HH:MM:SS", con la fecha fijada por el rango degenerado
    assert!(departure.starts_with("2024-06-01 "));
    assert_eq!(departure.len(), 19);
}
