//! Loadout Server - caching proxy and build-sharing backend
//!
//! Fronts a third-party game-data API with a TTL response cache and persists
//! user-created equipment builds under short shareable ids.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
