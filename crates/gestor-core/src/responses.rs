//! JSON response types returned by the `gestor` HTTP server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CourseSubject, SubjectDraft};
use crate::validation::{Assessment, ValidationFailure};

/// Response from `GET /subjects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubjectListResponse {
    pub subjects: Vec<CourseSubject>,
    pub total: usize,
}

impl From<Vec<CourseSubject>> for SubjectListResponse {
    fn from(subjects: Vec<CourseSubject>) -> Self {
        Self {
            total: subjects.len(),
            subjects,
        }
    }
}

/// Form payload for redisplay: the bound input plus why it was rejected.
///
/// Returned by `GET /subjects/new` (no failures) and by rejected submissions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubjectFormResponse {
    pub subject: SubjectDraft,
    pub failures: Vec<ValidationFailure>,
}

impl From<Assessment> for SubjectFormResponse {
    fn from(assessment: Assessment) -> Self {
        let (subject, failures) = assessment.into_parts();
        Self { subject, failures }
    }
}

/// Body of every non-validation error response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
