//! Background Tasks Module
//!
//! Periodic maintenance tasks that run alongside the HTTP server.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
