//! Save/Load Service
//!
//! Orchestrates id generation and store access: the contract the HTTP layer
//! consumes. A save either fully commits a new build under a fresh id or
//! fails without writing anything; the INSERT is the single commit point.

use chrono::Utc;
use serde_json::Value;
use tracing::{error, warn};

use crate::db::{BuildStore, IdGenerator, RandomIdGenerator, MAX_ID_ATTEMPTS};
use crate::error::{AppError, Result};

// == Build Service ==
/// Save/load orchestration over the build store.
pub struct BuildService {
    store: BuildStore,
    ids: Box<dyn IdGenerator>,
}

impl BuildService {
    // == Constructor ==
    /// Creates a service with the production random id generator.
    pub fn new(store: BuildStore) -> Self {
        Self::with_generator(store, Box::new(RandomIdGenerator))
    }

    /// Creates a service with a custom id generator (used by tests to force
    /// collisions).
    pub fn with_generator(store: BuildStore, ids: Box<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    // == Save ==
    /// Persists an opaque build payload under a freshly generated unique id.
    ///
    /// Candidate ids are pre-checked against the store to keep retries rare,
    /// but the insert's uniqueness constraint is the authoritative guard: a
    /// concurrent save that wins the race surfaces as `DuplicateId` here and
    /// is retried with a new candidate, invisible to the caller. After
    /// `MAX_ID_ATTEMPTS` failed candidates the save fails with
    /// `IdSpaceExhausted`.
    pub fn save(&self, payload: &Value) -> Result<String> {
        let data = serde_json::to_string(payload)?;
        let created_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.candidate();

            if self.store.exists(&id)? {
                warn!("Duplicate id generated, retrying");
                continue;
            }

            match self.store.insert(&id, &data, &created_at) {
                Ok(()) => return Ok(id),
                Err(AppError::DuplicateId(id)) => {
                    // Lost the check-then-insert race to a concurrent save.
                    warn!("Build id {} taken between check and insert, retrying", id);
                    continue;
                }
                Err(other) => return Err(other),
            }
        }

        error!(
            "Failed to find a free build id in {} attempts; store may be degenerate",
            MAX_ID_ATTEMPTS
        );
        Err(AppError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    // == Load ==
    /// Returns the payload stored under `id`, structurally identical to what
    /// was saved.
    pub fn load(&self, id: &str) -> Result<Value> {
        let data = self.store.get(id)?;
        Ok(serde_json::from_str(&data)?)
    }
}
