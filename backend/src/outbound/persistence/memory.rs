//! In-memory visit store adapter.
//!
//! Backs the service when no external store is wired in, and gives
//! integration tests a deterministic store with real persistence semantics:
//! sequential identifiers from 1 and insertion-order reads.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{VisitStore, VisitStoreError};
use crate::domain::{NewVisit, Visit};

#[derive(Debug)]
struct StoreState {
    next_id: i32,
    visits: Vec<Visit>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: 1,
            visits: Vec::new(),
        }
    }
}

/// Mutex-guarded visit store holding records for the process lifetime.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use visits_service::domain::ports::VisitStore;
/// use visits_service::outbound::persistence::InMemoryVisitStore;
///
/// let store: Arc<dyn VisitStore> = Arc::new(InMemoryVisitStore::new());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryVisitStore {
    state: Mutex<StoreState>,
}

impl InMemoryVisitStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, StoreState>, VisitStoreError> {
        self.state
            .lock()
            .map_err(|_| VisitStoreError::connection("visit store lock poisoned"))
    }
}

#[async_trait]
impl VisitStore for InMemoryVisitStore {
    async fn save(&self, visit: NewVisit) -> Result<Visit, VisitStoreError> {
        let mut state = self.lock_state()?;
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| VisitStoreError::query("visit identifier space exhausted"))?;
        let stored = visit.into_persisted(id);
        state.visits.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, VisitStoreError> {
        let state = self.lock_state()?;
        Ok(state
            .visits
            .iter()
            .filter(|visit| visit.pet_id() == pet_id)
            .cloned()
            .collect())
    }

    async fn find_by_pet_id_in(&self, pet_ids: Vec<i32>) -> Result<Vec<Visit>, VisitStoreError> {
        let state = self.lock_state()?;
        Ok(state
            .visits
            .iter()
            .filter(|visit| pet_ids.contains(&visit.pet_id()))
            .cloned()
            .collect())
    }
}
