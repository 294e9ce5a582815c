//! Config loading from environment variables

use lemmata::LemmataConfig;

use super::constants::{DEFAULT_BIND_ADDR, ENV_BIND_ADDR};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5540")
  pub bind_addr: String,
  /// Library configuration (model directory, default language, fallback)
  pub lemmata: LemmataConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR)
      .filter(|addr| !addr.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let lemmata =
      LemmataConfig::default().with_env(&lookup).map_err(|e| ApiError::config(e.to_string()))?;
    lemmata.validate().map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self { bind_addr, lemmata })
  }
}
