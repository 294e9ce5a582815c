//! language module
pub mod detector;
pub mod profile;
pub mod router;

/// Re-export
pub use detector::{LanguageDetector, WhatlangDetector};
pub use profile::{LanguageProfile, ProfileCache};
pub use router::LanguageRouter;
