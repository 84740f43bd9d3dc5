//! # gestor-db
//!
//! Record store for Gestor course subjects.
//!
//! [`SubjectStore`] is the capability request handlers depend on. Two
//! implementations ship here:
//! - [`GestorDb`], backed by a local libSQL database whose schema is created by
//!   embedded migrations on open.
//! - [`memory::MemoryStore`], an in-memory fake with the same semantics.

pub mod error;
pub mod memory;
mod migrations;
pub mod repos;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::SubjectStore;

use std::time::Duration;

use libsql::Builder;

/// Path that selects a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

/// How long a connection waits on a locked database before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// libSQL-backed subject store.
///
/// Every store operation opens its own connection and drops it when the
/// operation returns. An in-memory database exists only as long as one
/// connection to it does, so `:memory:` pins a single shared connection
/// instead.
///
/// Writers on separate connections contend for the file lock. Every
/// connection waits up to [`BUSY_TIMEOUT`] for it, and file databases run in
/// WAL mode so readers never block the writer.
pub struct GestorDb {
    db: libsql::Database,
    pinned: Option<libsql::Connection>,
}

impl GestorDb {
    /// Open a local database at the given path, or `:memory:`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let pinned = if path == MEMORY_PATH {
            Some(with_busy_timeout(db.connect()?)?)
        } else {
            None
        };

        let gestor_db = Self { db, pinned };
        if gestor_db.pinned.is_none() {
            gestor_db.enable_wal().await?;
        }
        gestor_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(gestor_db)
    }

    /// Acquire a connection for one unit of work.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LibSql` if a new connection cannot be opened.
    pub fn connect(&self) -> Result<libsql::Connection, StoreError> {
        match &self.pinned {
            Some(conn) => Ok(conn.clone()),
            None => with_busy_timeout(self.db.connect()?),
        }
    }

    /// Switch a file database to write-ahead logging. The mode is stored in
    /// the file, so later connections inherit it.
    async fn enable_wal(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        let mut rows = conn.query("PRAGMA journal_mode = WAL", ()).await?;
        let mode = match rows.next().await? {
            Some(row) => row.get::<String>(0)?,
            None => return Err(StoreError::NoResult),
        };
        tracing::debug!(mode = %mode, "journal mode set");
        Ok(())
    }
}

fn with_busy_timeout(conn: libsql::Connection) -> Result<libsql::Connection, StoreError> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    Ok(conn)
}
