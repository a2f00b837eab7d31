use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use apod_proxy::config::environment::EnvironmentConfig;
use apod_proxy::routes::create_app;
use apod_proxy::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🔭 APOD Proxy - NASA Astronomy Picture of the Day");
    info!("================================================");

    let config = EnvironmentConfig::from_env().map_err(|e| {
        error!("❌ Configuración inválida: {}", e);
        anyhow::anyhow!("Error de configuración: {}", e)
    })?;

    info!(
        "🗄️ Cache APOD: {} entradas, TTL {} min, zona horaria {}",
        config.cache.max_entries,
        config.cache.ttl.as_secs() / 60,
        config.timezone
    );

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(config)?;
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/apod/today - APOD de hoy");
    info!("   GET  /api/apod?date=YYYY-MM-DD - APOD por fecha");
    info!("   GET  /api/apod/recent?days=N - Últimos N días (1-30)");
    info!("   GET  /api/apod/cache/stats - Estadísticas del cache");

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
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
