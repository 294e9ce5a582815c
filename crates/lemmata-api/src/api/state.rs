//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::LemmataApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Lemmatization Service
  ///
  /// - Production: `Arc::new(LemmataApiServiceFull::new(&config)?)`
  /// - Test: a stub implementing `LemmataApiService`
  pub service: Arc<dyn LemmataApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn LemmataApiService>) -> Self {
    Self { config, service }
  }
}
