//! Service module

mod lemmata_api_service;

pub use lemmata_api_service::{LemmataApiService, LemmataApiServiceFull};
