use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use flight_synth_api::config::environment::EnvironmentConfig;
use flight_synth_api::routes::create_app_router;
use flight_synth_api::state::AppState;
use flight_synth_api::store::ReferenceData;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️  Flight Synth API - Generador de vuelos sintéticos");
    info!("====================================================");

    let config = EnvironmentConfig::default();

    // Cargar las tablas de referencia (fatal si alguna falla)
    let data = match ReferenceData::load_from_dir(Path::new(&config.data_dir)) {
        Ok(data) => data,
        Err(e) => {
            error!("❌ Error cargando las tablas de referencia: {}", e);
            return Err(anyhow::anyhow!("Error de inicialización: {}", e));
        }
    };
    info!(
        "✅ Tablas de referencia cargadas desde '{}': {} aerolíneas, {} aeronaves, {} aeropuertos",
        config.data_dir,
        data.airlines.len(),
        data.aircraft_carriers.len(),
        data.airports.len()
    );

    // Crear router de la API
    let app_state = AppState::new(data, config.clone());
    let app = create_app_router(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("✈️  Endpoints de generación:");
    info!("   GET  /api/flights/generate - Generar vuelos sintéticos");
    info!("📋 Endpoints de referencia:");
    info!("   GET  /api/airports - Listar aeropuertos (filtros: iata_code, country_code)");
    info!("   GET  /api/airlines - Listar aerolíneas (filtros: airline_code, country_code)");
    info!("   GET  /api/aircraft-carriers - Listar aeronaves (filtro: airline_code)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
