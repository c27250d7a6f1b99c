//! Service Module
//!
//! Save/load orchestration consumed by the HTTP layer.

mod builds;

pub use builds::BuildService;
