//! # gestor-core
//!
//! Core types and business rules for Gestor, the course subject manager.
//!
//! This crate provides the foundational pieces shared by the store and the
//! HTTP server:
//! - Entity structs for persisted subjects and candidate drafts
//! - Form binding from raw submitted strings
//! - The validation/derivation engine for weekly hour components
//! - Field constraints (lengths and ranges) for every subject column
//! - JSON response types returned by the server

pub mod entities;
pub mod form;
pub mod responses;
pub mod validation;

pub use entities::{CourseSubject, DEFAULT_AREA, SubjectDraft};
pub use form::SubjectForm;
pub use validation::{Assessment, ValidationFailure, review, validate_and_derive};
