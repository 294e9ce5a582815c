//! Lemmatization model capability

use crate::errors::ModelError;

use super::token::Token;

/// A loaded lemmatization model.
///
/// Implementations turn text into an ordered token sequence, one token per
/// segment of the input, in input order. They are shared between requests
/// through `Arc<dyn Lemmatizer>`, hence `Send + Sync`.
pub trait Lemmatizer: Send + Sync {
  /// Analyses `text` into tokens
  ///
  /// # Errors
  /// Returns `ModelError` if the model cannot process the text
  fn analyze(&self, text: &str) -> Result<Vec<Token>, ModelError>;
}
