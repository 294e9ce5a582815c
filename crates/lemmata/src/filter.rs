//! Token filter / normalizer
//!
//! Runs a profile's model over text and reduces the tokens to lowercase lemmas
//! of content words.

use std::collections::HashSet;

use tracing::debug;

use crate::errors::ModelError;
use crate::language::LanguageProfile;
use crate::model::Token;

/// Whether a token survives filtering.
///
/// A token is kept only if all of the following hold:
/// 1. the model does not flag it as a stop-word
/// 2. the model does not flag it as punctuation
/// 3. its surface text is not blank
/// 4. its lowercased lemma is not in `stop_words`
///
/// Rule 4 catches surface forms that only become stop-words after lemmatization.
pub fn should_keep(token: &Token, stop_words: &HashSet<String>) -> bool {
  !token.is_stop
    && !token.is_punct
    && !token.text.trim().is_empty()
    && !stop_words.contains(&token.lemma.to_lowercase())
}

/// Extracts the lowercase lemmas of the content words of `text`.
///
/// Order follows the input; repeated words are repeated in the output.
///
/// # Errors
/// Returns `ModelError` if the model fails on the text
pub fn extract_lemmas(text: &str, profile: &LanguageProfile) -> Result<Vec<String>, ModelError> {
  let tokens = profile.model().analyze(text)?;
  let total = tokens.len();

  let lemmas: Vec<String> = tokens
    .into_iter()
    .filter(|token| should_keep(token, profile.stop_words()))
    .map(|token| token.lemma.to_lowercase())
    .collect();

  debug!(
    language = %profile.language(),
    total_tokens = total,
    kept_tokens = lemmas.len(),
    "Lemma extraction completed"
  );

  Ok(lemmas)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Language;
  use crate::model::Lemmatizer;
  use std::sync::Arc;

  /// Model returning a fixed token sequence
  struct ScriptedModel(Vec<Token>);

  impl Lemmatizer for ScriptedModel {
    fn analyze(&self, _text: &str) -> Result<Vec<Token>, ModelError> {
      Ok(self.0.clone())
    }
  }

  struct BrokenModel;

  impl Lemmatizer for BrokenModel {
    fn analyze(&self, _text: &str) -> Result<Vec<Token>, ModelError> {
      Err(ModelError::Analysis { reason: "model crashed".to_string() })
    }
  }

  fn profile(tokens: Vec<Token>, stop_words: &[&str]) -> LanguageProfile {
    LanguageProfile::new(
      Language::Pt,
      stop_words.iter().map(|s| s.to_string()).collect(),
      Arc::new(ScriptedModel(tokens)),
    )
  }

  fn stop_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
  }

  #[test]
  fn keeps_content_word() {
    assert!(should_keep(&Token::new("Gatos", "gato", false, false), &stop_set(&[])));
  }

  #[test]
  fn drops_model_stop_word() {
    assert!(!should_keep(&Token::new("sobre", "sobre", true, false), &stop_set(&[])));
  }

  #[test]
  fn drops_punctuation() {
    assert!(!should_keep(&Token::new(".", ".", false, true), &stop_set(&[])));
  }

  #[test]
  fn drops_blank_surface() {
    assert!(!should_keep(&Token::new("  ", "x", false, false), &stop_set(&[])));
    assert!(!should_keep(&Token::new("\n", "\n", false, false), &stop_set(&[])));
  }

  #[test]
  fn drops_lemma_in_profile_stop_words() {
    // "foram" is not flagged by the model but lemmatizes to the stop-word "ser"
    assert!(!should_keep(&Token::new("foram", "Ser", false, false), &stop_set(&["ser"])));
  }

  #[test]
  fn extract_lowercases_and_preserves_order_and_duplicates() {
    let profile = profile(
      vec![
        Token::new("Gatos", "Gato", false, false),
        Token::new(" ", " ", false, false),
        Token::new("e", "e", true, false),
        Token::new(" ", " ", false, false),
        Token::new("gatos", "gato", false, false),
        Token::new("foram", "ser", false, false),
        Token::new("Cadeiras", "CADEIRA", false, false),
        Token::new("!", "!", false, true),
      ],
      &["ser"],
    );

    let lemmas = extract_lemmas("ignored", &profile).unwrap();
    assert_eq!(lemmas, vec!["gato", "gato", "cadeira"]);
  }

  #[test]
  fn extract_propagates_model_failure() {
    let profile = LanguageProfile::new(Language::En, HashSet::new(), Arc::new(BrokenModel));
    let err = extract_lemmas("anything at all", &profile).unwrap_err();
    assert!(matches!(err, ModelError::Analysis { .. }));
  }
}
