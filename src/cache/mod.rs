//! Cache Module
//!
//! TTL caching of upstream API responses with lazy expiry.

mod entry;
mod key;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::cache_key;
pub use store::{ResponseCache, SharedCache};
