//! The main entry point for the Quill API server.

use api_server::Application;
use api_server::config::AppConfig;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        "Starting Quill API server on {}:{}",
        config.host,
        config.port
    );

    let app = Application::build(&config).await?;
    tracing::info!(port = app.port(), "Listener bound");

    app.run_until_stopped().await?;

    Ok(())
}
