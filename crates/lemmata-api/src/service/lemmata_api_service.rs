//! Lemmatization service

use lemmata::{Analysis, LemmataService};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::ProcessRequest;

/// Common interface for the lemmatization service
///
/// This trait allows swapping the production implementation (`LemmataApiServiceFull`) with
/// test stubs.
pub trait LemmataApiService: Send + Sync {
  /// Lemmatizes the request text
  ///
  /// # Errors
  /// - Input error (blank text, length exceeded)
  /// - Internal error (model load or lemmatization failure)
  fn process(&self, request: ProcessRequest) -> Result<Analysis>;
}

/// Lemmatization service backed by [`LemmataService`]
///
/// Profiles are loaded lazily on the first request for each language and shared by
/// every later request.
#[derive(Debug)]
pub struct LemmataApiServiceFull {
  inner: LemmataService,
}

impl LemmataApiServiceFull {
  /// Initializes the service
  ///
  /// # Errors
  /// Returns an error if the library configuration is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let inner = LemmataService::init(&config.lemmata)?;
    Ok(Self { inner })
  }

  /// Wraps an already built library service
  #[must_use]
  pub fn from_service(inner: LemmataService) -> Self {
    Self { inner }
  }

  /// Lemmatizes the request text
  ///
  /// # Errors
  /// - If the text is blank
  /// - If the text exceeds the maximum length
  /// - If the model cannot be loaded or fails
  pub fn process(&self, request: ProcessRequest) -> Result<Analysis> {
    if request.text.trim().is_empty() {
      return Err(ApiError::invalid_input("text is empty"));
    }

    let text_bytes = request.text.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    Ok(self.inner.analyze(&request.text)?)
  }
}

impl LemmataApiService for LemmataApiServiceFull {
  fn process(&self, request: ProcessRequest) -> Result<Analysis> {
    // Inherent method, not a recursive trait call
    LemmataApiServiceFull::process(self, request)
  }
}
