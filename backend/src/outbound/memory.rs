//! In-process `EngineerRepository` used when no database is configured.
//!
//! Rows live in a `BTreeMap` keyed by id, so iteration follows insertion
//! order. Ids come from a counter that only grows; clearing the map never
//! resets it, so an id is not handed out twice.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{EngineerRepository, EngineerRepositoryError};
use crate::domain::{Engineer, EngineerDraft, EngineerId};

#[derive(Debug)]
struct State {
    rows: BTreeMap<EngineerId, Engineer>,
    next_id: i32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Mutex-guarded in-memory engineer store.
#[derive(Debug, Default)]
pub struct InMemoryEngineerRepository {
    state: Mutex<State>,
}

impl InMemoryEngineerRepository {
    /// Create an empty store whose first assigned id is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means another request panicked mid-call; the
        // map itself is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("in-memory engineer store lock was poisoned");
            poisoned.into_inner()
        })
    }
}

#[async_trait]
impl EngineerRepository for InMemoryEngineerRepository {
    async fn find_all(&self) -> Result<Vec<Engineer>, EngineerRepositoryError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: EngineerId,
    ) -> Result<Option<Engineer>, EngineerRepositoryError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: EngineerId) -> Result<bool, EngineerRepositoryError> {
        Ok(self.lock().rows.contains_key(&id))
    }

    async fn save(&self, draft: EngineerDraft) -> Result<Engineer, EngineerRepositoryError> {
        let mut state = self.lock();
        let id = match draft.id {
            Some(id) => {
                if id.get() >= state.next_id {
                    state.next_id = id.get().saturating_add(1);
                }
                id
            }
            None => {
                let id = EngineerId::new(state.next_id);
                state.next_id = state
                    .next_id
                    .checked_add(1)
                    .ok_or_else(|| EngineerRepositoryError::query("engineer id space exhausted"))?;
                id
            }
        };
        let engineer = Engineer::new(id, draft.name, draft.tech_stack);
        state.rows.insert(id, engineer.clone());
        Ok(engineer)
    }

    async fn delete_by_id(&self, id: EngineerId) -> Result<(), EngineerRepositoryError> {
        self.lock().rows.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<usize, EngineerRepositoryError> {
        let mut state = self.lock();
        let removed = state.rows.len();
        state.rows.clear();
        Ok(removed)
    }
}
