//! Built-in stop-word sets

use std::collections::HashSet;

use ::stop_words::LANGUAGE;

use crate::config::Language;

fn to_stop_words_language(language: Language) -> LANGUAGE {
  match language {
    Language::Pt => LANGUAGE::Portuguese,
    Language::En => LANGUAGE::English,
  }
}

/// Returns the built-in stop-word set for `language`, lowercased.
pub fn builtin_stop_words(language: Language) -> HashSet<String> {
  ::stop_words::get(to_stop_words_language(language))
    .iter()
    .map(|w| w.to_string().to_lowercase())
    .collect()
}
