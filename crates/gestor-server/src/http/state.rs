use std::sync::Arc;

use gestor_db::SubjectStore;

/// Shared handler state: the subject store behind a trait object.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SubjectStore>,
}

impl AppState {
    pub fn new(store: impl SubjectStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Share an existing store, so tests can inspect it after requests.
    pub fn from_shared(store: Arc<dyn SubjectStore>) -> Self {
        Self { store }
    }
}
