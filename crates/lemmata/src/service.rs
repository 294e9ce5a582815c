// crates/lemmata/src/service.rs

//! LemmataService: integration facade of the lemmata crate.
//!
//! - Profile cache (ProfileCache) - owned here, injected into the router
//! - Language router (LanguageRouter) - detection + fallbacks
//! - Token filter (extract_lemmas)
//!
//! Delivery layers (CLI, HTTP) only need this struct.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::config::{Language, LemmataConfig};
use crate::errors::{LemmataError, LemmataResult};
use crate::filter::extract_lemmas;
use crate::language::{LanguageDetector, LanguageRouter, ProfileCache, WhatlangDetector};
use crate::model::{LookupModelProvider, ModelProvider};

/// Result of processing one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
  /// Language whose profile produced the lemmas
  pub language: Language,
  /// Lowercase lemmas in input order
  pub lemmas: Vec<String>,
}

/// Integration facade of the lemmata crate.
#[derive(Debug)]
pub struct LemmataService {
  router: LanguageRouter,
  cache: Arc<ProfileCache>,
}

impl LemmataService {
  /// Initialization with the production collaborators (whatlang + lookup model)
  ///
  /// # Errors
  /// - Invalid configuration
  pub fn init(config: &LemmataConfig) -> LemmataResult<Self> {
    Self::with_components(
      config,
      Arc::new(WhatlangDetector::new()),
      Arc::new(LookupModelProvider::from_config(config)),
    )
  }

  /// Initialization with injected collaborators
  ///
  /// # Errors
  /// - Invalid configuration
  pub fn with_components(
    config: &LemmataConfig,
    detector: Arc<dyn LanguageDetector>,
    provider: Arc<dyn ModelProvider>,
  ) -> LemmataResult<Self> {
    // ConfigError converts into LemmataError via #[from]
    config.validate()?;

    let cache = Arc::new(ProfileCache::new(provider));
    let router = LanguageRouter::from_config(config, detector, Arc::clone(&cache));

    Ok(Self { router, cache })
  }

  /// Language router
  pub fn router(&self) -> &LanguageRouter {
    &self.router
  }

  /// Profile cache owned by this service
  pub fn cache(&self) -> &ProfileCache {
    &self.cache
  }

  /// Detects the language of `text` and returns its lemmas.
  ///
  /// # Errors
  /// - `EmptyInput` if `text` is blank
  /// - `Model` if the model cannot be loaded or fails
  pub fn process_text(&self, text: &str) -> LemmataResult<Vec<String>> {
    self.analyze(text).map(|analysis| analysis.lemmas)
  }

  /// Returns the lemmas of `text` using the profile of `code` (no detection).
  ///
  /// Unsupported codes use the default profile.
  pub fn process_text_with_language(&self, text: &str, code: &str) -> LemmataResult<Vec<String>> {
    self.analyze_with_language(text, Some(code)).map(|analysis| analysis.lemmas)
  }

  /// Like [`process_text`](Self::process_text), also reporting the language used
  pub fn analyze(&self, text: &str) -> LemmataResult<Analysis> {
    self.analyze_with_language(text, None)
  }

  /// Core processing flow.
  ///
  /// 1. Reject blank text
  /// 2. Resolve the language (or take `code`)
  /// 3. Load the profile (unsupported codes → default)
  /// 4. Extract lemmas
  pub fn analyze_with_language(&self, text: &str, code: Option<&str>) -> LemmataResult<Analysis> {
    if text.trim().is_empty() {
      return Err(LemmataError::EmptyInput);
    }

    let code = code.unwrap_or_else(|| self.router.resolve_language(text).code());

    let result = self.router.load_profile(code).and_then(|profile| {
      let lemmas = extract_lemmas(text, &profile)?;
      Ok(Analysis { language: profile.language(), lemmas })
    });

    if let Err(err) = &result {
      error!(error = %err, "Text processing failed");
    }

    result
  }
}
