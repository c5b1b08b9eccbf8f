use std::process::ExitCode;

use seprr_server::config::{ConfigError, ServerConfig};
use seprr_server::septa::{ArrivalSource, MockSeptaClient, SeptaClient, SeptaError};
use seprr_server::stations::StationCatalog;
use seprr_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create SEPTA client: {0}")]
    Septa(#[from] SeptaError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seprr_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let arrivals = if config.mock {
        warn!("SEPRR_MOCK set: serving canned trains");
        ArrivalSource::from(MockSeptaClient::sample())
    } else {
        info!(base_url = %config.septa.base_url, "using SEPTA NextToArrive API");
        ArrivalSource::from(SeptaClient::new(config.septa.clone())?)
    };

    let catalog = StationCatalog::septa();
    info!(
        rules = catalog.len(),
        fallback = %catalog.fallback(),
        "loaded station catalog"
    );

    let mock = arrivals.is_mock();
    let app = create_router(AppState::new(arrivals));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(mock, "listening on http://{}", config.bind_addr);
    info!("  GET      /health          - Health check");
    info!("  GET/POST /api/next-trains - Slack command (text=rr SOURCE-DEST)");

    axum::serve(listener, app).await?;
    Ok(())
}
