// crates/lemmata/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::lookup::LEMMA_TABLE_FILE;

/// Supported language types.
///
/// Each language has its own profile (stop-word set + lemmatization model).
/// Codes coming from the detector or from callers are mapped onto this closed set
/// with [`Language::from_code`]; anything else is treated as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  /// Portuguese
  Pt,
  /// English
  En,
}

impl Language {
  /// Every supported language, in a stable order.
  pub const ALL: [Language; 2] = [Language::Pt, Language::En];

  /// Returns the ISO 639-1 language code.
  ///
  /// # Examples
  /// - `Language::Pt` → `"pt"`
  /// - `Language::En` → `"en"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::Pt => "pt",
      Language::En => "en",
    }
  }

  /// Maps a language code onto a supported language.
  ///
  /// Matching is case-insensitive and ignores surrounding whitespace.
  /// Returns `None` for codes without a profile.
  pub fn from_code(code: &str) -> Option<Self> {
    match code.trim().to_lowercase().as_str() {
      "pt" => Some(Language::Pt),
      "en" => Some(Language::En),
      _ => None,
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Language {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Language::from_code(s).ok_or_else(|| ConfigError::UnknownLanguage { code: s.to_string() })
  }
}

/// Default language used by every fallback path.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Texts shorter than this (in characters) skip detection.
pub const DEFAULT_MIN_DETECT_CHARS: usize = 10;

/// Top-level configuration for lemmata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LemmataConfig {
  /// [routing] section
  #[serde(default)]
  pub routing: RoutingConfig,
  /// [model] section
  #[serde(default)]
  pub model: ModelConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [routing] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
  /// Language used when detection is skipped, fails, or finds an unsupported language
  #[serde(default = "default_language")]
  pub default_language: Language,
  /// Minimum number of characters before the detector is consulted
  #[serde(default = "default_min_detect_chars")]
  pub min_detect_chars: usize,
}

fn default_language() -> Language {
  DEFAULT_LANGUAGE
}

fn default_min_detect_chars() -> usize {
  DEFAULT_MIN_DETECT_CHARS
}

impl Default for RoutingConfig {
  fn default() -> Self {
    Self { default_language: DEFAULT_LANGUAGE, min_detect_chars: DEFAULT_MIN_DETECT_CHARS }
  }
}

/// [model] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
  /// Directory holding `<code>/lemma_lookup.json` tables.
  ///
  /// `None` runs the lookup model without a table: every lemma is the fallback form.
  #[serde(default)]
  pub model_dir: Option<PathBuf>,
  /// What to use as the lemma when a surface form is missing from the table
  #[serde(default)]
  pub fallback: LemmaFallback,
}

/// Lemma used for surface forms that are absent from the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaFallback {
  /// The surface form itself
  #[default]
  Surface,
  /// Snowball stem of the lowercased surface form
  Stem,
}

impl FromStr for LemmaFallback {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "surface" => Ok(Self::Surface),
      "stem" => Ok(Self::Stem),
      _ => Err(ConfigError::UnknownFallback { value: s.to_string() }),
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_filter(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(ConfigError::UnknownLogLevel { value: s.to_string() }),
    }
  }
}

// ===== Accessor Methods =====

impl LemmataConfig {
  /// Returns the default language.
  pub fn default_language(&self) -> Language {
    self.routing.default_language
  }

  /// Returns the minimum text length (characters) required for detection.
  pub fn min_detect_chars(&self) -> usize {
    self.routing.min_detect_chars
  }

  /// Returns the configured model directory.
  pub fn model_dir(&self) -> Option<&Path> {
    self.model.model_dir.as_deref()
  }

  /// Returns the lemma table path for the given language, if a model directory is set.
  ///
  /// Directory structure:
  /// ```text
  /// models/
  ///   ├── pt/
  ///   │   └── lemma_lookup.json
  ///   └── en/
  ///       └── lemma_lookup.json
  /// ```
  pub fn lemma_table_path(&self, language: Language) -> Option<PathBuf> {
    self.model.model_dir.as_ref().map(|dir| dir.join(language.code()).join(LEMMA_TABLE_FILE))
  }

  /// Returns the lemma fallback mode.
  pub fn lemma_fallback(&self) -> LemmaFallback {
    self.model.fallback
  }

  /// Returns the log level used when `LEMMATA_LOG` holds no filter directives.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `routing.min_detect_chars` >= 1
  /// - `model.model_dir`, when it exists, is a directory
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.routing.min_detect_chars < 1 {
      return Err(ConfigError::InvalidMinDetectChars { actual: self.routing.min_detect_chars });
    }

    // A missing directory is reported later, per language, when its table is loaded
    if let Some(dir) = &self.model.model_dir
      && dir.exists()
      && !dir.is_dir()
    {
      return Err(ConfigError::InvalidModelDir { path: dir.clone() });
    }

    Ok(())
  }
}

// ===== Environment Overrides =====

/// Environment variable holding the model directory
pub const ENV_MODEL_DIR: &str = "LEMMATA_MODEL_DIR";

/// Environment variable holding the default language code
pub const ENV_DEFAULT_LANGUAGE: &str = "LEMMATA_DEFAULT_LANGUAGE";

/// Environment variable holding the lemma fallback mode
pub const ENV_LEMMA_FALLBACK: &str = "LEMMATA_LEMMA_FALLBACK";

/// Environment variable holding the default log level
pub const ENV_LOG_LEVEL: &str = "LEMMATA_LOG_LEVEL";

/// Platform model directory (`<data dir>/lemmata/models`), if it exists.
pub fn default_model_dir() -> Option<PathBuf> {
  dirs::data_dir().map(|dir| dir.join("lemmata").join("models")).filter(|dir| dir.is_dir())
}

impl LemmataConfig {
  /// Default configuration with the `LEMMATA_*` environment variables applied.
  ///
  /// # Errors
  /// Returns `ConfigError` if a variable holds an unknown language, fallback or log level.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::default().with_env(|key| std::env::var(key).ok())
  }

  /// Applies overrides read through `lookup`. Blank values are ignored.
  ///
  /// Without an explicit model directory the platform directory is used when present.
  ///
  /// # Errors
  /// Returns `ConfigError` if a variable holds an unknown language, fallback or log level.
  pub fn with_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(dir) = var(ENV_MODEL_DIR) {
      self.model.model_dir = Some(PathBuf::from(dir));
    } else if self.model.model_dir.is_none() {
      self.model.model_dir = default_model_dir();
    }

    if let Some(code) = var(ENV_DEFAULT_LANGUAGE) {
      self.routing.default_language = code.parse()?;
    }

    if let Some(fallback) = var(ENV_LEMMA_FALLBACK) {
      self.model.fallback = fallback.parse()?;
    }

    if let Some(level) = var(ENV_LOG_LEVEL) {
      self.logging.level = level.parse()?;
    }

    Ok(self)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::TempDir;

  // ─── Language Tests ────────────────────────────────────────────────────

  #[test]
  fn language_code_returns_correct_value() {
    assert_eq!(Language::Pt.code(), "pt");
    assert_eq!(Language::En.code(), "en");
  }

  #[test]
  fn language_from_code_is_case_insensitive() {
    assert_eq!(Language::from_code("PT"), Some(Language::Pt));
    assert_eq!(Language::from_code(" en "), Some(Language::En));
  }

  #[test]
  fn language_from_code_rejects_unsupported() {
    assert_eq!(Language::from_code("es"), None);
    assert_eq!(Language::from_code(""), None);
    assert!(matches!(
      "de".parse::<Language>(),
      Err(ConfigError::UnknownLanguage { code }) if code == "de"
    ));
  }

  #[test]
  fn language_display() {
    assert_eq!(format!("{}", Language::Pt), "pt");
    assert_eq!(format!("{}", Language::En), "en");
  }

  // ─── Defaults / Deserialize ────────────────────────────────────────────

  #[test]
  fn default_config_matches_constants() {
    let config = LemmataConfig::default();
    assert_eq!(config.default_language(), Language::En);
    assert_eq!(config.min_detect_chars(), 10);
    assert_eq!(config.lemma_fallback(), LemmaFallback::Surface);
    assert_eq!(config.log_level(), LogLevel::Info);
    assert!(config.model_dir().is_none());
    assert!(config.lemma_table_path(Language::Pt).is_none());
  }

  #[test]
  fn deserialize_partial_config_fills_defaults() {
    let json = r#"{ "model": { "model_dir": "/srv/models", "fallback": "stem" } }"#;
    let config: LemmataConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.lemma_fallback(), LemmaFallback::Stem);
    assert_eq!(config.default_language(), Language::En);
    assert_eq!(config.min_detect_chars(), 10);

    let pt = config.lemma_table_path(Language::Pt).unwrap();
    assert!(pt.ends_with("pt/lemma_lookup.json"));
  }

  #[test]
  fn fallback_from_str() {
    assert_eq!("STEM".parse::<LemmaFallback>().unwrap(), LemmaFallback::Stem);
    assert_eq!("surface".parse::<LemmaFallback>().unwrap(), LemmaFallback::Surface);
    assert!("lemma".parse::<LemmaFallback>().is_err());
  }

  #[test]
  fn log_level_from_str() {
    assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
    assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert!(matches!("loud".parse::<LogLevel>(), Err(ConfigError::UnknownLogLevel { .. })));
  }

  #[test]
  fn log_level_filter_strings() {
    assert_eq!(LogLevel::Warn.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.as_filter(), "trace");
  }

  // ─── Environment ───────────────────────────────────────────────────────

  fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
  }

  #[test]
  fn with_env_applies_overrides() {
    let vars = [
      (ENV_MODEL_DIR, "/srv/lemmata"),
      (ENV_DEFAULT_LANGUAGE, "PT"),
      (ENV_LEMMA_FALLBACK, "stem"),
      (ENV_LOG_LEVEL, "debug"),
    ];
    let config = LemmataConfig::default().with_env(lookup(&vars)).unwrap();

    assert_eq!(config.model_dir(), Some(Path::new("/srv/lemmata")));
    assert_eq!(config.default_language(), Language::Pt);
    assert_eq!(config.lemma_fallback(), LemmaFallback::Stem);
    assert_eq!(config.log_level(), LogLevel::Debug);
  }

  #[test]
  fn with_env_keeps_base_log_level_when_unset() {
    let mut base = LemmataConfig::default();
    base.logging.level = LogLevel::Warn;

    assert_eq!(base.clone().with_env(lookup(&[])).unwrap().log_level(), LogLevel::Warn);
    let config = base.with_env(lookup(&[(ENV_LOG_LEVEL, "error")])).unwrap();
    assert_eq!(config.log_level(), LogLevel::Error);
  }

  #[test]
  fn with_env_ignores_blank_values() {
    let vars = [(ENV_DEFAULT_LANGUAGE, "  "), (ENV_LEMMA_FALLBACK, "")];
    let config = LemmataConfig::default().with_env(lookup(&vars)).unwrap();

    assert_eq!(config.default_language(), Language::En);
    assert_eq!(config.lemma_fallback(), LemmaFallback::Surface);
  }

  #[test]
  fn with_env_keeps_configured_model_dir() {
    let mut config = LemmataConfig::default();
    config.model.model_dir = Some(PathBuf::from("/opt/models"));

    let config = config.with_env(lookup(&[])).unwrap();
    assert_eq!(config.model_dir(), Some(Path::new("/opt/models")));
  }

  #[test]
  fn with_env_rejects_unknown_values() {
    let err =
      LemmataConfig::default().with_env(lookup(&[(ENV_DEFAULT_LANGUAGE, "fr")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLanguage { .. }));

    let err =
      LemmataConfig::default().with_env(lookup(&[(ENV_LEMMA_FALLBACK, "guess")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownFallback { .. }));
  }

  // ─── validate() ────────────────────────────────────────────────────────

  #[test]
  fn validate_accepts_default_config() {
    assert!(LemmataConfig::default().validate().is_ok());
  }

  #[test]
  fn validate_rejects_zero_min_detect_chars() {
    let mut config = LemmataConfig::default();
    config.routing.min_detect_chars = 0;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMinDetectChars { actual: 0 }));
  }

  #[test]
  fn validate_accepts_missing_model_dir() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = LemmataConfig::default();
    config.model.model_dir = Some(temp_dir.path().join("not-created-yet"));

    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_model_dir_is_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not-a-dir");
    fs::write(&file_path, b"dummy").unwrap();

    let mut config = LemmataConfig::default();
    config.model.model_dir = Some(file_path.clone());

    match config.validate().unwrap_err() {
      ConfigError::InvalidModelDir { path } => assert_eq!(path, file_path),
      other => panic!("expected InvalidModelDir error, got {other:?}"),
    }
  }
}
