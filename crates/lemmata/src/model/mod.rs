//! model module
pub mod lemmatizer;
pub mod lookup;
pub mod provider;
pub mod stop_list;
pub mod token;

/// Re-export
pub use lemmatizer::Lemmatizer;
pub use lookup::{LemmaTable, LookupLemmatizer};
pub use provider::{LookupModelProvider, ModelProvider};
pub use stop_list::builtin_stop_words;
pub use token::Token;
