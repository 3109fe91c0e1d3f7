use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use tour_booking_views::clients::BookingApiClient;
use tour_booking_views::config::environment::EnvironmentConfig;
use tour_booking_views::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("🐢 Tour Booking Views - API de vistas");
    info!("================================================");
    info!("🔗 Booking API: {}", config.booking_api.base_url);

    let booking_api = match BookingApiClient::new(&config.booking_api) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("❌ Error creando el cliente del API de reservas: {}", e);
            return Err(anyhow::anyhow!("Error de cliente HTTP: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config, booking_api);
    let app = create_app(app_state.clone());

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   GET  /api/views/estimates");
    info!("   GET  /api/views/estimates/preview");
    info!("   POST /api/views/estimates");
    info!("   POST /api/views/estimates/:id/cancel");
    info!("   GET  /api/views/dispatch/:route_id?tab=확정|미확정");
    info!("   GET  /api/views/profile");
    info!("   GET  /api/views/mypage");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    app_state.teardown().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
