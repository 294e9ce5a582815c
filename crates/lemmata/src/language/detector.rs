//! Language detection

use tracing::trace;
use whatlang::{Detector, Lang};

use crate::errors::DetectionError;

/// Statistical language detector capability.
///
/// Returns a language code for the text. Codes are ISO 639-1 where the
/// detector knows one for a supported language; anything else is passed
/// through as-is and later treated as unsupported by the router.
pub trait LanguageDetector: Send + Sync {
  /// Detects the language of `text`
  ///
  /// # Errors
  /// `DetectionError::Undetermined` if the text cannot be classified
  fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

/// Detector backed by `whatlang` (trigram model, deterministic output)
#[derive(Debug, Clone)]
pub struct WhatlangDetector {
  inner: Detector,
}

impl WhatlangDetector {
  /// Detector considering every language whatlang knows
  pub fn new() -> Self {
    Self { inner: Detector::new() }
  }
}

impl Default for WhatlangDetector {
  fn default() -> Self {
    Self::new()
  }
}

/// Maps whatlang's ISO 639-3 codes to the codes used for profiles
fn lang_to_code(lang: Lang) -> String {
  match lang {
    Lang::Por => "pt".to_string(),
    Lang::Eng => "en".to_string(),
    other => other.code().to_string(),
  }
}

impl LanguageDetector for WhatlangDetector {
  fn detect(&self, text: &str) -> Result<String, DetectionError> {
    let info = self.inner.detect(text).ok_or(DetectionError::Undetermined)?;

    trace!(
      lang = info.lang().code(),
      confidence = info.confidence(),
      reliable = info.is_reliable(),
      "whatlang detection"
    );

    Ok(lang_to_code(info.lang()))
  }
}
