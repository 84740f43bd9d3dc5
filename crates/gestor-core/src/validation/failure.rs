use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single human-readable reason a draft cannot be persisted.
///
/// `field` names the offending column; `None` marks a form-level failure that
/// involves several fields at once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationFailure {
    /// Failure attached to one field.
    #[must_use]
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.into(),
        }
    }

    /// Failure attached to the form as a whole.
    #[must_use]
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_form_level(&self) -> bool {
        self.field.is_none()
    }

    /// Whether this failure is attached to `field`.
    #[must_use]
    pub fn concerns(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}
