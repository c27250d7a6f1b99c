//! Build ID Generation
//!
//! Produces the short URL-safe slugs builds are shared under. The randomness
//! is deliberately non-cryptographic: these are public share links, not
//! secrets, and collisions are handled by the save retry loop.

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Length of a build id.
pub const ID_LENGTH: usize = 8;

/// Maximum id-generation attempts before a save gives up.
///
/// At 62^8 possible ids a collision is astronomically rare against any
/// realistic store size; hitting this bound indicates a degenerate store
/// state or a bug in the uniqueness check.
pub const MAX_ID_ATTEMPTS: usize = 10;

// == Id Generator Trait ==
/// Source of candidate build ids.
///
/// A trait so tests can substitute deterministic or deliberately colliding
/// sequences for the random production source.
pub trait IdGenerator: Send + Sync {
    /// Produces one candidate id. Uniqueness is the caller's concern.
    fn candidate(&self) -> String;
}

// == Random Id Generator ==
/// Production generator: 8 characters drawn uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn candidate(&self) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect()
    }
}
