//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while validating a [`LemmataConfig`](crate::config::LemmataConfig)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// routing.min_detect_chars must be at least 1
  #[error("routing.min_detect_chars must be at least 1: actual={actual}")]
  InvalidMinDetectChars {
    /// Value that was configured
    actual: usize,
  },

  /// model.model_dir exists but is not a directory
  #[error("model.model_dir is not a directory: path={path:?}")]
  InvalidModelDir {
    /// Offending path
    path: PathBuf,
  },

  /// A language code in the configuration is not one of the supported codes
  #[error("unsupported language code in configuration: {code}")]
  UnknownLanguage {
    /// Code as written in the configuration
    code: String,
  },

  /// Unknown lemma fallback mode
  #[error("unknown lemma fallback: {value} (expected \"surface\" or \"stem\")")]
  UnknownFallback {
    /// Value as written in the configuration
    value: String,
  },

  /// Unknown log level
  #[error("unknown log level: {value} (expected trace, debug, info, warn or error)")]
  UnknownLogLevel {
    /// Value as written in the configuration
    value: String,
  },
}

/// Errors raised by the language detector.
///
/// Both variants are recovered inside the language router by falling back to
/// the default language; they never reach the caller of `process_text`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DetectionError {
  /// The detector could not classify the text
  #[error("language could not be determined")]
  Undetermined,

  /// The detector classified the text as a language without a profile
  #[error("detected language has no profile: {code}")]
  UnsupportedLanguage {
    /// Code reported by the detector
    code: String,
  },
}

/// Errors raised while loading or running a lemmatization model
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ModelError {
  /// Lemma lookup table file does not exist
  #[error("lemma table not found: {0}")]
  TableNotFound(PathBuf),

  /// Lemma lookup table could not be read
  #[error("failed to read lemma table: path={path:?}, error={source}")]
  TableRead {
    /// Table path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Lemma lookup table is not a JSON object of strings
  #[error("malformed lemma table: path={path:?}, error={source}")]
  TableFormat {
    /// Table path
    path: PathBuf,
    /// Underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// The model failed while analysing text
  #[error("lemmatization failed: {reason}")]
  Analysis {
    /// Failure reason
    reason: String,
  },
}

/// Unified error
/// Public APIs of this crate return this error
/// Use as `LemmataResult<T>` = `Result<T, LemmataError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LemmataError {
  /// Input text is empty after trimming
  #[error("input text is empty")]
  EmptyInput,

  /// Model loading or lemmatization failed
  #[error(transparent)]
  Model(#[from] ModelError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result type alias for the lemmata crate
pub type LemmataResult<T> = Result<T, LemmataError>;
