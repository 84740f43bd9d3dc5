//! In-memory subject store for handler tests and throwaway servers.

use std::collections::BTreeMap;

use async_trait::async_trait;
use gestor_core::{CourseSubject, SubjectDraft};
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::SubjectStore;

#[derive(Debug)]
struct MemoryState {
    subjects: BTreeMap<i64, CourseSubject>,
    next_id: i64,
}

/// [`SubjectStore`] over a `BTreeMap`, with ids assigned from 1 upwards and
/// never reused, like an `AUTOINCREMENT` column.
#[derive(Debug)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                subjects: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored subjects.
    pub async fn len(&self) -> usize {
        self.state.lock().await.subjects.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubjectStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<CourseSubject>, StoreError> {
        Ok(self.state.lock().await.subjects.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<CourseSubject>, StoreError> {
        Ok(self.state.lock().await.subjects.values().cloned().collect())
    }

    async fn insert(&self, draft: &SubjectDraft) -> Result<CourseSubject, StoreError> {
        let mut state = self.state.lock().await;
        let id = state.next_id;
        state.next_id += 1;

        let subject = draft.clone().into_subject(id);
        state.subjects.insert(id, subject.clone());
        Ok(subject)
    }

    async fn replace(&self, id: i64, draft: &SubjectDraft) -> Result<CourseSubject, StoreError> {
        let mut state = self.state.lock().await;
        let slot = state
            .subjects
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        *slot = draft.clone().into_subject(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.state
            .lock()
            .await
            .subjects
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
