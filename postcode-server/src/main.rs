use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use postcode_server::config::ServerConfig;
use postcode_server::directory::PostalDirectory;
use postcode_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("postcode_server=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().compact())
        .init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;

    // Load the directory (fail fast if the dataset is malformed)
    let directory = match &config.dataset {
        Some(path) => PostalDirectory::from_path(path, config.country)?,
        None => PostalDirectory::for_country(config.country)?,
    };
    info!(
        country = %directory.country(),
        records = directory.len(),
        "loaded postal directory"
    );

    let app = create_router(AppState::new(directory));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Postal code server listening on http://{}", config.addr);
    info!("  GET  /health");
    info!("  GET  /api/postcodes");
    info!("  GET  /api/postcodes/:code");
    info!("  GET  /api/cities");
    info!("  GET  /api/cities/lookup?name=<city>");
    info!("  GET  /api/validate/:code");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
