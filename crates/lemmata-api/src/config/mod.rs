//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_LOG, MAX_TEXT_LENGTH};
pub use env::Config;
