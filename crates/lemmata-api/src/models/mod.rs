//! Request models

mod request;

pub use request::ProcessRequest;
