//! Language profiles and the profile cache
//!
//! A profile bundles the stop-word set and the loaded lemmatization model of one
//! language. Profiles are built on first use and kept until the cache is reset
//! or dropped.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info};

use crate::config::Language;
use crate::errors::ModelError;
use crate::model::{Lemmatizer, ModelProvider};

/// Stop-word set and model for one language
pub struct LanguageProfile {
  language: Language,
  stop_words: HashSet<String>,
  model: Arc<dyn Lemmatizer>,
}

impl LanguageProfile {
  /// Constructs a profile
  pub fn new(language: Language, stop_words: HashSet<String>, model: Arc<dyn Lemmatizer>) -> Self {
    Self { language, stop_words, model }
  }

  /// Language of this profile
  pub fn language(&self) -> Language {
    self.language
  }

  /// Stop-word set (lowercase)
  pub fn stop_words(&self) -> &HashSet<String> {
    &self.stop_words
  }

  /// Loaded lemmatization model
  pub fn model(&self) -> &Arc<dyn Lemmatizer> {
    &self.model
  }
}

impl fmt::Debug for LanguageProfile {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LanguageProfile")
      .field("language", &self.language)
      .field("stop_words", &self.stop_words.len())
      .finish_non_exhaustive()
  }
}

/// One cache entry per supported language
#[derive(Default)]
struct ProfileSlot {
  /// Published profile; read-mostly
  profile: RwLock<Option<Arc<LanguageProfile>>>,
  /// Held while the profile of this language is being built
  init: Mutex<()>,
}

impl ProfileSlot {
  fn current(&self) -> Option<Arc<LanguageProfile>> {
    self.profile.read().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

/// Process-lifetime cache of language profiles.
///
/// - At most one load per language runs at a time (per-language init lock)
/// - Readers only observe fully constructed profiles
/// - Failed loads are not cached; the next call retries
pub struct ProfileCache {
  provider: Arc<dyn ModelProvider>,
  /// Indexed by `slot_index`
  slots: [ProfileSlot; 2],
}

fn slot_index(language: Language) -> usize {
  match language {
    Language::Pt => 0,
    Language::En => 1,
  }
}

impl ProfileCache {
  /// Creates an empty cache that builds profiles with `provider`
  pub fn new(provider: Arc<dyn ModelProvider>) -> Self {
    Self { provider, slots: Default::default() }
  }

  fn slot(&self, language: Language) -> &ProfileSlot {
    &self.slots[slot_index(language)]
  }

  /// Returns the cached profile for `language`, if it has been loaded
  pub fn get(&self, language: Language) -> Option<Arc<LanguageProfile>> {
    self.slot(language).current()
  }

  /// Returns the profile for `language`, building it on first use
  ///
  /// # Errors
  /// Returns `ModelError` if the model cannot be loaded. Nothing is cached in that case.
  pub fn get_or_load(&self, language: Language) -> Result<Arc<LanguageProfile>, ModelError> {
    let slot = self.slot(language);

    if let Some(profile) = slot.current() {
      return Ok(profile);
    }

    let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);

    // Another caller may have finished loading while we waited
    if let Some(profile) = slot.current() {
      debug!(language = %language, "Profile loaded by concurrent caller");
      return Ok(profile);
    }

    let model = self.provider.load_model(language)?;
    let stop_words = self.provider.stop_words(language);
    let profile = Arc::new(LanguageProfile::new(language, stop_words, model));

    *slot.profile.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&profile));

    info!(language = %language, stop_words = profile.stop_words().len(), "Language profile cached");

    Ok(profile)
  }

  /// Languages whose profile is currently cached
  pub fn loaded_languages(&self) -> Vec<Language> {
    Language::ALL.into_iter().filter(|&language| self.slot(language).current().is_some()).collect()
  }

  /// Drops every cached profile.
  ///
  /// Waits for in-flight loads so that none of them publishes after the reset.
  pub fn reset(&self) {
    for slot in &self.slots {
      let _guard = slot.init.lock().unwrap_or_else(PoisonError::into_inner);
      *slot.profile.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
  }
}

impl fmt::Debug for ProfileCache {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProfileCache").field("loaded", &self.loaded_languages()).finish_non_exhaustive()
  }
}
