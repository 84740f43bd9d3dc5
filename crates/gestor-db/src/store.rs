//! The record store capability consumed by request handlers.

use async_trait::async_trait;
use gestor_core::{CourseSubject, SubjectDraft};

use crate::error::StoreError;

/// Persistence for course subjects, keyed by store-assigned integer id.
///
/// Drafts are written as given: deriving `total_hours` and validating are the
/// caller's job. Any `id` carried by a draft is ignored; the id argument of
/// [`SubjectStore::replace`] is authoritative.
#[async_trait]
pub trait SubjectStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<CourseSubject>, StoreError>;

    /// All subjects, ordered by id.
    async fn list_all(&self) -> Result<Vec<CourseSubject>, StoreError>;

    /// Persist a new subject and return it with its assigned id.
    async fn insert(&self, draft: &SubjectDraft) -> Result<CourseSubject, StoreError>;

    /// Overwrite every column of an existing subject.
    ///
    /// Returns `StoreError::NotFound` rather than creating a row when `id` is
    /// absent.
    async fn replace(&self, id: i64, draft: &SubjectDraft) -> Result<CourseSubject, StoreError>;

    /// Remove a subject. Returns `StoreError::NotFound` if `id` is absent.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
