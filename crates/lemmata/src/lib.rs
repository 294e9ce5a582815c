//! lemmata lemmatization library
//!
//! Detects whether a text is Portuguese or English, runs the matching
//! lemmatization model and returns the lowercase lemmas of its content words.

/// Configuration module - LemmataConfig, Language, etc.
pub mod config;

/// Error module - LemmataError, LemmataResult, etc.
pub mod errors;

/// Token filter - turns model tokens into lemmas
pub mod filter;

/// Language module - detection, profiles, profile cache and router
pub mod language;

/// Model module - lemmatization capability and the lookup-table model
pub mod model;

/// Service module - LemmataService facade
pub mod service;

/// Re-exports
pub use config::{Language, LemmataConfig};
pub use errors::{LemmataError, LemmataResult};
pub use service::{Analysis, LemmataService};
