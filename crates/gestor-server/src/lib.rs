//! # gestor-server
//!
//! HTTP surface and command-line entry point for Gestor.
//!
//! The router in [`http`] depends only on [`gestor_db::SubjectStore`], so tests
//! drive it against the in-memory store while `gestor serve` wires in the
//! libSQL one.

pub mod cli;
pub mod commands;
pub mod http;

pub use http::{AppState, app};
