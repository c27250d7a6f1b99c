//! Upstream Module
//!
//! Adapter for the third-party game-data API: the resource table and the
//! HTTP client that the cache layer calls on a miss.

mod client;
mod resource;

pub use client::GameApiClient;
pub use resource::MetaResource;
