//! Lookup-table lemmatization model
//!
//! Segments text on Unicode word boundaries and assigns each segment the lemma
//! recorded for it in a per-language lookup table. Segments missing from the table
//! receive the configured fallback form (the surface itself, or its Snowball stem).

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{LemmaFallback, Language};
use crate::errors::ModelError;

use super::lemmatizer::Lemmatizer;
use super::token::Token;

/// File name of a lemma table inside a language directory
pub const LEMMA_TABLE_FILE: &str = "lemma_lookup.json";

/// Surface form → lemma table
#[derive(Debug, Clone, Default)]
pub struct LemmaTable {
  entries: HashMap<String, String>,
}

impl LemmaTable {
  /// Empty table (every lookup misses)
  pub fn empty() -> Self {
    Self::default()
  }

  /// Builds a table from `(surface, lemma)` pairs
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self { entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
  }

  /// Loads a table from a JSON object file (`{"surface": "lemma", ...}`)
  ///
  /// # Errors
  /// - `TableNotFound` if `path` is not a file
  /// - `TableRead` if the file cannot be read
  /// - `TableFormat` if the content is not a JSON object of strings
  pub fn load(path: &Path) -> Result<Self, ModelError> {
    if !path.is_file() {
      return Err(ModelError::TableNotFound(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)
      .map_err(|e| ModelError::TableRead { path: path.to_path_buf(), source: Arc::new(e) })?;

    let entries: HashMap<String, String> = serde_json::from_str(&raw)
      .map_err(|e| ModelError::TableFormat { path: path.to_path_buf(), source: Arc::new(e) })?;

    Ok(Self { entries })
  }

  /// Looks up a surface form, first as written, then lowercased
  pub fn lookup(&self, surface: &str) -> Option<&str> {
    self
      .entries
      .get(surface)
      .or_else(|| self.entries.get(&surface.to_lowercase()))
      .map(String::as_str)
  }

  /// Number of entries
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether the table has no entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Lookup-table model for one language.
///
/// - Stateless after construction
/// - `Send + Sync`, shared through `Arc<dyn Lemmatizer>`
pub struct LookupLemmatizer {
  language: Language,
  table: LemmaTable,
  /// Stop-word flag source, compared against the lowercased surface form
  stop_words: HashSet<String>,
  fallback: LemmaFallback,
  stemmer: Stemmer,
}

impl LookupLemmatizer {
  /// Constructs a model from an already loaded table
  pub fn new(
    language: Language,
    table: LemmaTable,
    stop_words: HashSet<String>,
    fallback: LemmaFallback,
  ) -> Self {
    Self { language, table, stop_words, fallback, stemmer: Stemmer::create(to_algorithm(language)) }
  }

  /// Language this model was built for
  pub fn language(&self) -> Language {
    self.language
  }

  fn lemma_for(&self, surface: &str) -> String {
    if let Some(lemma) = self.table.lookup(surface) {
      return lemma.to_string();
    }
    match self.fallback {
      LemmaFallback::Surface => surface.to_string(),
      LemmaFallback::Stem => self.stemmer.stem(&surface.to_lowercase()).into_owned(),
    }
  }
}

fn to_algorithm(language: Language) -> Algorithm {
  match language {
    Language::Pt => Algorithm::Portuguese,
    Language::En => Algorithm::English,
  }
}

/// Whether a segment consists only of punctuation or symbol characters.
pub fn is_punctuation(segment: &str) -> bool {
  !segment.is_empty() && segment.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

impl Lemmatizer for LookupLemmatizer {
  fn analyze(&self, text: &str) -> Result<Vec<Token>, ModelError> {
    let tokens: Vec<Token> = text
      .split_word_bounds()
      .map(|segment| {
        let is_punct = is_punctuation(segment);
        // Whitespace and punctuation keep their surface as lemma
        let lemma = if is_punct || segment.trim().is_empty() {
          segment.to_string()
        } else {
          self.lemma_for(segment)
        };
        let is_stop = self.stop_words.contains(&segment.to_lowercase());
        Token::new(segment, lemma, is_stop, is_punct)
      })
      .collect();

    debug!(language = %self.language, tokens = tokens.len(), "Lookup lemmatization completed");

    Ok(tokens)
  }
}

/// Manual `Debug` implementation for `LookupLemmatizer`
///
/// `rust_stemmers::Stemmer` does not implement `Debug`; show sizes instead.
impl fmt::Debug for LookupLemmatizer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LookupLemmatizer")
      .field("language", &self.language)
      .field("table_entries", &self.table.len())
      .field("stop_words", &self.stop_words.len())
      .field("fallback", &self.fallback)
      .finish()
  }
}
