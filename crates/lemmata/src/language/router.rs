//! Language router: picks the profile used for a text

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::{Language, LemmataConfig};
use crate::errors::{DetectionError, LemmataResult};

use super::detector::LanguageDetector;
use super::profile::{LanguageProfile, ProfileCache};

/// Decides which language profile handles a text.
///
/// Two independent fallbacks lead to the default language:
/// 1. `resolve_language`: short text, detector failure, or a detected language without a profile
/// 2. `load_profile`: a requested code without a profile
pub struct LanguageRouter {
  detector: Arc<dyn LanguageDetector>,
  cache: Arc<ProfileCache>,
  default_language: Language,
  /// Texts with fewer characters than this go straight to the default language
  min_detect_chars: usize,
}

impl LanguageRouter {
  /// Constructs a router over an injected detector and profile cache
  pub fn new(
    detector: Arc<dyn LanguageDetector>,
    cache: Arc<ProfileCache>,
    default_language: Language,
    min_detect_chars: usize,
  ) -> Self {
    Self { detector, cache, default_language, min_detect_chars }
  }

  /// Constructs a router using the `[routing]` section of the configuration
  pub fn from_config(
    config: &LemmataConfig,
    detector: Arc<dyn LanguageDetector>,
    cache: Arc<ProfileCache>,
  ) -> Self {
    Self::new(detector, cache, config.default_language(), config.min_detect_chars())
  }

  /// Default language
  pub fn default_language(&self) -> Language {
    self.default_language
  }

  /// Profile cache shared with the owner of this router
  pub fn cache(&self) -> &Arc<ProfileCache> {
    &self.cache
  }

  /// Resolves the language of `text`. Never fails.
  pub fn resolve_language(&self, text: &str) -> Language {
    let chars = text.chars().count();
    if chars < self.min_detect_chars {
      debug!(
        chars,
        min = self.min_detect_chars,
        "Text too short for detection, using default language"
      );
      return self.default_language;
    }

    match self.detect_supported(text) {
      Ok(language) => {
        debug!(language = %language, "Language detected");
        language
      }
      Err(err) => {
        debug!(error = %err, default = %self.default_language, "Falling back to default language");
        self.default_language
      }
    }
  }

  /// Runs the detector and maps its code onto a supported language
  fn detect_supported(&self, text: &str) -> Result<Language, DetectionError> {
    let code = self.detector.detect(text)?;
    Language::from_code(&code).ok_or(DetectionError::UnsupportedLanguage { code })
  }

  /// Returns the profile for `code`, loading it on first use.
  ///
  /// Unsupported codes are served with the default language profile.
  ///
  /// # Errors
  /// Returns `LemmataError::Model` if the model cannot be loaded
  pub fn load_profile(&self, code: &str) -> LemmataResult<Arc<LanguageProfile>> {
    let language = Language::from_code(code).unwrap_or_else(|| {
      debug!(code, default = %self.default_language, "No profile for language code, using default");
      self.default_language
    });

    Ok(self.cache.get_or_load(language)?)
  }
}

impl fmt::Debug for LanguageRouter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LanguageRouter")
      .field("default_language", &self.default_language)
      .field("min_detect_chars", &self.min_detect_chars)
      .field("cache", &self.cache)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::ModelError;
  use crate::model::{Lemmatizer, ModelProvider, Token};
  use std::sync::atomic::{AtomicUsize, Ordering};

  /// Detector returning a fixed answer and counting calls
  struct FixedDetector {
    answer: Result<String, DetectionError>,
    calls: AtomicUsize,
  }

  impl FixedDetector {
    fn code(code: &str) -> Arc<Self> {
      Arc::new(Self { answer: Ok(code.to_string()), calls: AtomicUsize::new(0) })
    }

    fn failing() -> Arc<Self> {
      Arc::new(Self { answer: Err(DetectionError::Undetermined), calls: AtomicUsize::new(0) })
    }
  }

  impl LanguageDetector for FixedDetector {
    fn detect(&self, _text: &str) -> Result<String, DetectionError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.answer.clone()
    }
  }

  struct EchoModel;

  impl Lemmatizer for EchoModel {
    fn analyze(&self, text: &str) -> Result<Vec<Token>, ModelError> {
      Ok(vec![Token::new(text, text, false, false)])
    }
  }

  #[derive(Default)]
  struct CountingProvider {
    loads: AtomicUsize,
  }

  impl ModelProvider for CountingProvider {
    fn load_model(&self, _language: Language) -> Result<Arc<dyn Lemmatizer>, ModelError> {
      self.loads.fetch_add(1, Ordering::SeqCst);
      Ok(Arc::new(EchoModel))
    }
  }

  fn router(detector: Arc<FixedDetector>) -> (LanguageRouter, Arc<CountingProvider>) {
    let provider = Arc::new(CountingProvider::default());
    let cache = Arc::new(ProfileCache::new(provider.clone()));
    (LanguageRouter::new(detector, cache, Language::En, 10), provider)
  }

  #[test]
  fn short_text_skips_detector() {
    let detector = FixedDetector::code("pt");
    let (router, _) = router(detector.clone());

    assert_eq!(router.resolve_language("xq7z!"), Language::En);
    assert_eq!(router.resolve_language("olá mundo"), Language::En); // 9 chars
    assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
  }

  #[test]
  fn length_is_counted_in_characters() {
    let detector = FixedDetector::code("pt");
    let (router, _) = router(detector.clone());

    // 9 characters, 18 bytes
    assert_eq!(router.resolve_language("çãççãçãçã"), Language::En);
    // exactly 10 characters reaches the detector
    assert_eq!(router.resolve_language("ãããããããããã"), Language::Pt);
    assert_eq!(detector.calls.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn detected_supported_language_is_returned() {
    let (router, _) = router(FixedDetector::code("pt"));
    assert_eq!(router.resolve_language("Gatos bonitos estão pulando sobre cadeiras"), Language::Pt);
  }

  #[test]
  fn detector_failure_falls_back_to_default() {
    let (router, _) = router(FixedDetector::failing());
    assert_eq!(router.resolve_language("?????????? ??????????"), Language::En);
  }

  #[test]
  fn unsupported_detection_falls_back_to_default() {
    let (router, _) = router(FixedDetector::code("deu"));
    assert_eq!(router.resolve_language("Die Katzen springen über die Stühle"), Language::En);
  }

  #[test]
  fn detect_supported_reports_unsupported_code() {
    let (router, _) = router(FixedDetector::code("es"));
    assert_eq!(
      router.detect_supported("Los gatos saltan sobre las sillas"),
      Err(DetectionError::UnsupportedLanguage { code: "es".to_string() })
    );
  }

  #[test]
  fn load_profile_with_unsupported_code_uses_default() {
    let (router, provider) = router(FixedDetector::code("pt"));

    let profile = router.load_profile("fr").unwrap();
    assert_eq!(profile.language(), Language::En);

    // Cached under the substituted language
    let en = router.load_profile("en").unwrap();
    assert!(Arc::ptr_eq(&profile, &en));
    assert_eq!(provider.loads.load(Ordering::SeqCst), 1);
    assert_eq!(router.cache().loaded_languages(), vec![Language::En]);
  }

  #[test]
  fn load_profile_is_idempotent() {
    let (router, provider) = router(FixedDetector::code("pt"));

    let a = router.load_profile("pt").unwrap();
    let b = router.load_profile("PT").unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.stop_words(), b.stop_words());
    assert_eq!(provider.loads.load(Ordering::SeqCst), 1);
  }
}
