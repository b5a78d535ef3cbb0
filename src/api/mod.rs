//! HTTP side of search and deletion.

pub mod client;
pub mod error;
pub mod models;

pub use client::GrafanaClient;
pub use error::ApiError;
pub use models::{sections_from_hits, HitType, SearchHit};
