use sea_orm::{ConnectOptions, Database};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use menu_board::{app, bootstrap, config::Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().inspect_err(|err| error!("Configuration failed: {err}"))?;

    let mut options = ConnectOptions::new(config.database_url.clone());
    options.sqlx_logging(config.is_development());
    let db = Database::connect(options)
        .await
        .inspect_err(|err| error!("Failed to connect to the database: {err}"))?;

    bootstrap(&db, &config)
        .await
        .inspect_err(|err| error!("Failed to prepare the database: {err}"))?;

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app(db, config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
