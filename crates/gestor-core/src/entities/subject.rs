use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::DEFAULT_AREA;

/// A course subject as persisted by the store.
///
/// `total_hours` is always `component_cd + component_cp + component_aa`; it is
/// derived before every write and never taken from client input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseSubject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub credits: i64,
    /// Weekly hours of direct instruction.
    pub component_cd: i64,
    /// Weekly hours of practical work.
    pub component_cp: i64,
    /// Weekly hours of autonomous work.
    pub component_aa: i64,
    pub total_hours: i64,
    pub area: String,
}

/// A candidate subject that has not been written to the store yet.
///
/// `id` is `None` for creations and carries the target id for edits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubjectDraft {
    pub id: Option<i64>,
    pub name: String,
    pub code: String,
    pub credits: i64,
    pub component_cd: i64,
    pub component_cp: i64,
    pub component_aa: i64,
    pub total_hours: i64,
    pub area: String,
}

impl Default for SubjectDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: String::new(),
            credits: 0,
            component_cd: 0,
            component_cp: 0,
            component_aa: 0,
            total_hours: 0,
            area: DEFAULT_AREA.to_string(),
        }
    }
}

impl SubjectDraft {
    /// Weekly hours the components must add up to for this credit count.
    ///
    /// Zero-credit subjects still carry two hours; every credit is worth three.
    #[must_use]
    pub const fn expected_hours(&self) -> i64 {
        if self.credits == 0 {
            2
        } else {
            self.credits.saturating_mul(3)
        }
    }

    /// Sum of the three weekly hour components.
    #[must_use]
    pub const fn component_sum(&self) -> i64 {
        self.component_cd
            .saturating_add(self.component_cp)
            .saturating_add(self.component_aa)
    }

    /// Attach a store-assigned id, producing the persisted shape.
    #[must_use]
    pub fn into_subject(self, id: i64) -> CourseSubject {
        CourseSubject {
            id,
            name: self.name,
            code: self.code,
            credits: self.credits,
            component_cd: self.component_cd,
            component_cp: self.component_cp,
            component_aa: self.component_aa,
            total_hours: self.total_hours,
            area: self.area,
        }
    }
}

impl From<CourseSubject> for SubjectDraft {
    fn from(subject: CourseSubject) -> Self {
        Self {
            id: Some(subject.id),
            name: subject.name,
            code: subject.code,
            credits: subject.credits,
            component_cd: subject.component_cd,
            component_cp: subject.component_cp,
            component_aa: subject.component_aa,
            total_hours: subject.total_hours,
            area: subject.area,
        }
    }
}
