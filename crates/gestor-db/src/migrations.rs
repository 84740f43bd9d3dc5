//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::GestorDb;
use crate::error::StoreError;

/// Initial schema: the `course_subjects` table and its code index.
const MIGRATION_001: &str = include_str!("../migrations/001_course_subjects.sql");

impl GestorDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_course_subjects: {e}")))?;
        Ok(())
    }
}
