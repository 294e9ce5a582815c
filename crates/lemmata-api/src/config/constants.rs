//! API configuration constants

/// Maximum input text length (bytes)
///
/// Kept below axum's default 2MB body limit so oversized texts get a
/// `text_too_long` error rather than a bare 413.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5540";

/// Environment variable holding the bind address
pub const ENV_BIND_ADDR: &str = "LEMMATA_API_BIND_ADDR";

/// Environment variable holding the `EnvFilter` directives
pub const ENV_LOG: &str = "LEMMATA_LOG";
