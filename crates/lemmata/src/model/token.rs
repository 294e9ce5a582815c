//! Token produced by a lemmatization model

/// One token of analysed text.
///
/// Carries exactly what the filter stage needs. Tokens are produced per request
/// and discarded once the lemmas have been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  /// Surface form as it appears in the input
  pub text: String,
  /// Lemma (dictionary form) assigned by the model
  pub lemma: String,
  /// Whether the model flags the token as a stop-word
  pub is_stop: bool,
  /// Whether the model flags the token as punctuation
  pub is_punct: bool,
}

impl Token {
  /// Constructs a token
  pub fn new(
    text: impl Into<String>,
    lemma: impl Into<String>,
    is_stop: bool,
    is_punct: bool,
  ) -> Self {
    Self { text: text.into(), lemma: lemma.into(), is_stop, is_punct }
  }
}
