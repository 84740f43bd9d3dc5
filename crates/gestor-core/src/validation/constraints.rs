//! Per-field length and range constraints for subject drafts.
//!
//! Lower bounds of the hour components are owned by the engine in the parent
//! module and are not repeated here.

use std::ops::RangeInclusive;

use crate::entities::{SubjectDraft, fields};

use super::ValidationFailure;

pub const NAME_MAX_LEN: usize = 100;
pub const CODE_MAX_LEN: usize = 7;
pub const AREA_MAX_LEN: usize = 50;
pub const CREDITS_RANGE: RangeInclusive<i64> = 0..=15;
pub const COMPONENT_MAX: i64 = 45;

/// Check required fields, maximum lengths, and ranges.
///
/// Lengths count Unicode scalar values, so accented names are not penalized.
#[must_use]
pub fn check_field_constraints(draft: &SubjectDraft) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    required_text(&mut failures, fields::NAME, "The subject name", &draft.name, NAME_MAX_LEN);
    required_text(&mut failures, fields::CODE, "The subject code", &draft.code, CODE_MAX_LEN);

    if !CREDITS_RANGE.contains(&draft.credits) {
        failures.push(ValidationFailure::field(
            fields::CREDITS,
            format!(
                "Credits must be between {} and {}.",
                CREDITS_RANGE.start(),
                CREDITS_RANGE.end()
            ),
        ));
    }

    for (field, label, value) in [
        (fields::COMPONENT_CD, "CD", draft.component_cd),
        (fields::COMPONENT_CP, "CP", draft.component_cp),
        (fields::COMPONENT_AA, "AA", draft.component_aa),
    ] {
        if value > COMPONENT_MAX {
            failures.push(ValidationFailure::field(
                field,
                format!("{label} cannot exceed {COMPONENT_MAX}."),
            ));
        }
    }

    if draft.area.chars().count() > AREA_MAX_LEN {
        failures.push(ValidationFailure::field(
            fields::AREA,
            format!("The area cannot exceed {AREA_MAX_LEN} characters."),
        ));
    }

    failures
}

fn required_text(
    failures: &mut Vec<ValidationFailure>,
    field: &str,
    label: &str,
    value: &str,
    max_len: usize,
) {
    if value.trim().is_empty() {
        failures.push(ValidationFailure::field(field, format!("{label} is required.")));
    } else if value.chars().count() > max_len {
        failures.push(ValidationFailure::field(
            field,
            format!("{label} cannot exceed {max_len} characters."),
        ));
    }
}
