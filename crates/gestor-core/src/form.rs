//! Binding of submitted form fields into a [`SubjectDraft`].
//!
//! Every field arrives as an optional string and is trimmed. Integer fields
//! are then parsed, and a missing or malformed integer becomes a field
//! failure and binds as 0. There is deliberately no
//! `total_hours` field: the derived value is never accepted from a client.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::{SubjectDraft, fields};
use crate::validation::{Assessment, ValidationFailure, review};

/// Raw subject form submission.
///
/// The component fields also accept the short `CD`, `CP`, and `AA` names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default, alias = "CD", alias = "cd")]
    pub component_cd: Option<String>,
    #[serde(default, alias = "CP", alias = "cp")]
    pub component_cp: Option<String>,
    #[serde(default, alias = "AA", alias = "aa")]
    pub component_aa: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

impl SubjectForm {
    /// Convert the submission into a draft plus any binding failures.
    ///
    /// A blank `id` binds as `None`; a malformed one is a failure on `id`.
    #[must_use]
    pub fn bind(self) -> (SubjectDraft, Vec<ValidationFailure>) {
        let mut failures = Vec::new();

        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => parse_whole::<i64>(raw).map_or_else(
                || {
                    failures.push(ValidationFailure::field(
                        fields::ID,
                        "The id must be a whole number.",
                    ));
                    None
                },
                Some,
            ),
        };

        let credits = required_int(&mut failures, fields::CREDITS, "Credits", self.credits);
        let component_cd = required_int(&mut failures, fields::COMPONENT_CD, "CD", self.component_cd);
        let component_cp = required_int(&mut failures, fields::COMPONENT_CP, "CP", self.component_cp);
        let component_aa = required_int(&mut failures, fields::COMPONENT_AA, "AA", self.component_aa);

        let draft = SubjectDraft {
            id,
            name: trimmed(self.name),
            code: trimmed(self.code),
            credits,
            component_cd,
            component_cp,
            component_aa,
            total_hours: 0,
            area: trimmed(self.area),
        };
        (draft, failures)
    }

    /// Bind the submission and run the full server-side review on it.
    ///
    /// Binding failures come first, followed by everything [`review`] finds.
    #[must_use]
    pub fn review(self) -> Assessment {
        let (draft, mut failures) = self.bind();
        let reviewed = review(draft);
        failures.extend(reviewed.failures);
        Assessment {
            subject: reviewed.subject,
            failures,
        }
    }
}

impl From<&SubjectDraft> for SubjectForm {
    fn from(draft: &SubjectDraft) -> Self {
        Self {
            id: draft.id.map(|id| id.to_string()),
            name: Some(draft.name.clone()),
            code: Some(draft.code.clone()),
            credits: Some(draft.credits.to_string()),
            component_cd: Some(draft.component_cd.to_string()),
            component_cp: Some(draft.component_cp.to_string()),
            component_aa: Some(draft.component_aa.to_string()),
            area: Some(draft.area.clone()),
        }
    }
}

fn trimmed(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_string()).unwrap_or_default()
}

fn parse_whole<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

fn required_int(
    failures: &mut Vec<ValidationFailure>,
    field: &str,
    label: &str,
    raw: Option<String>,
) -> i64 {
    match raw.as_deref().map(str::trim) {
        None | Some("") => {
            failures.push(ValidationFailure::field(field, format!("{label} is required.")));
            0
        }
        Some(value) => parse_whole(value).unwrap_or_else(|| {
            failures.push(ValidationFailure::field(
                field,
                format!("{label} must be a whole number."),
            ));
            0
        }),
    }
}
