//! lemmata-api crate
//!
//! Web server exposing lemmatization as an HTTP API.
//!
//! ## Endpoints
//! - `POST /process` - Lemmatization
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/process \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Gatos bonitos estão pulando sobre cadeiras"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::ProcessRequest;
pub use service::{LemmataApiService, LemmataApiServiceFull};
