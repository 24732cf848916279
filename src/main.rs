mod config;
mod core;
mod models;
mod services;
mod ui;

use config::Settings;
use services::{CatalogClient, SessionStore};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging; logs go to stderr so they do not interleave
    // with the view output
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let client = Arc::new(CatalogClient::new(
        settings.api.base_url.clone(),
        settings.api.timeout_secs,
    ));
    let session = SessionStore::new(&settings.session.state_file);

    info!("Catalog client initialized for {}", settings.api.base_url);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    ui::run(client, &session, &settings, &mut input, &mut output).await
}
