//! Repository modules implementing [`crate::SubjectStore`] over libSQL.
//!
//! Each module adds trait impls or methods to `GestorDb`.

pub mod subject;
