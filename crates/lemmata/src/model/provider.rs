//! Model provider: constructs lemmatization models and stop-word sets per language

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::config::{Language, LemmaFallback, LemmataConfig};
use crate::errors::ModelError;

use super::lemmatizer::Lemmatizer;
use super::lookup::{LEMMA_TABLE_FILE, LemmaTable, LookupLemmatizer};
use super::stop_list::builtin_stop_words;

/// Source of models and stop-word sets.
///
/// The profile cache calls this at most once per language; implementations may
/// therefore do expensive work (reading tables, loading weights) in `load_model`.
pub trait ModelProvider: Send + Sync {
  /// Loads the lemmatization model for `language`
  ///
  /// # Errors
  /// Returns `ModelError` if the model cannot be constructed
  fn load_model(&self, language: Language) -> Result<Arc<dyn Lemmatizer>, ModelError>;

  /// Returns the stop-word set for `language` (lowercase strings)
  fn stop_words(&self, language: Language) -> HashSet<String> {
    builtin_stop_words(language)
  }
}

/// Production provider backed by [`LookupLemmatizer`]
#[derive(Debug, Clone)]
pub struct LookupModelProvider {
  /// Directory with `<code>/lemma_lookup.json`; `None` runs without tables
  model_dir: Option<PathBuf>,
  fallback: LemmaFallback,
}

impl LookupModelProvider {
  /// Constructs a provider
  pub fn new(model_dir: Option<PathBuf>, fallback: LemmaFallback) -> Self {
    Self { model_dir, fallback }
  }

  /// Constructs a provider from the `[model]` section of the configuration
  pub fn from_config(config: &LemmataConfig) -> Self {
    Self::new(config.model.model_dir.clone(), config.lemma_fallback())
  }

  fn table_path(&self, language: Language) -> Option<PathBuf> {
    self.model_dir.as_ref().map(|dir| dir.join(language.code()).join(LEMMA_TABLE_FILE))
  }
}

impl ModelProvider for LookupModelProvider {
  fn load_model(&self, language: Language) -> Result<Arc<dyn Lemmatizer>, ModelError> {
    let table = match self.table_path(language) {
      Some(path) => LemmaTable::load(&path)?,
      None => LemmaTable::empty(),
    };

    info!(
      language = %language,
      table_entries = table.len(),
      fallback = ?self.fallback,
      "Loaded lookup lemmatization model"
    );

    let stop_words = builtin_stop_words(language);
    Ok(Arc::new(LookupLemmatizer::new(language, table, stop_words, self.fallback)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn loads_without_model_dir() {
    let provider = LookupModelProvider::new(None, LemmaFallback::Surface);
    let model = provider.load_model(Language::En).unwrap();

    let tokens = model.analyze("Cats").unwrap();
    assert_eq!(tokens[0].lemma, "Cats");
  }

  #[test]
  fn loads_table_from_language_subdirectory() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("en")).unwrap();
    std::fs::write(dir.path().join("en").join("lemma_lookup.json"), r#"{"cats": "cat"}"#).unwrap();

    let provider = LookupModelProvider::new(Some(dir.path().to_path_buf()), LemmaFallback::Surface);
    let model = provider.load_model(Language::En).unwrap();

    assert_eq!(model.analyze("cats").unwrap()[0].lemma, "cat");
  }

  #[test]
  fn missing_table_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let provider = LookupModelProvider::new(Some(dir.path().to_path_buf()), LemmaFallback::Surface);

    let err = provider.load_model(Language::Pt).err().expect("load should fail");
    assert!(matches!(err, ModelError::TableNotFound(_)));
  }

  #[test]
  fn default_stop_words_come_from_builtin_lists() {
    let provider = LookupModelProvider::new(None, LemmaFallback::Surface);
    assert!(provider.stop_words(Language::Pt).contains("por"));
  }
}
