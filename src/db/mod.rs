//! Persistence Module
//!
//! SQLite-backed build storage and short-id generation.

mod builds;
mod id;

pub use builds::BuildStore;
pub use id::{IdGenerator, RandomIdGenerator, ID_LENGTH, MAX_ID_ATTEMPTS};
