//! lemmata-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use lemmata_api::ApiError;
use lemmata_api::api::{AppState, run_server};
use lemmata_api::config::{Config, ENV_LOG};
use lemmata_api::service::LemmataApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  let config = Config::from_env()?;

  // LEMMATA_LOG directives win over the configured level
  let level = config.lemmata.log_level();
  let filter =
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    model_dir = ?config.lemmata.model_dir(),
    default_language = %config.lemmata.default_language(),
    "Configuration loaded"
  );

  // Models are loaded lazily per language
  let service = Arc::new(LemmataApiServiceFull::new(&config)?);

  let state = AppState::new(config, service);

  run_server(state).await
}
