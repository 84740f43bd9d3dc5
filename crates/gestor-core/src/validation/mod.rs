//! Validation and derivation of subject hours.
//!
//! [`validate_and_derive`] is a pure function: it takes a draft by value and
//! returns the normalized draft together with every failure it found. The
//! derived `total_hours` is recomputed even when failures are reported, so a
//! redisplayed form always shows the sum of what was submitted. Whether to
//! persist is the caller's decision, gated on [`Assessment::is_valid`].
//!
//! [`review`] is what request handlers run: the engine plus the per-field
//! length and range constraints of [`constraints`].

pub mod constraints;
mod failure;

pub use constraints::check_field_constraints;
pub use failure::ValidationFailure;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{DEFAULT_AREA, SubjectDraft, fields};

/// Outcome of running a draft through validation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assessment {
    /// The draft with `area` normalized and `total_hours` recomputed.
    pub subject: SubjectDraft,
    pub failures: Vec<ValidationFailure>,
}

impl Assessment {
    /// True when the draft may be written to the store.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (SubjectDraft, Vec<ValidationFailure>) {
        (self.subject, self.failures)
    }
}

/// Normalize the area, check the hour components, and derive `total_hours`.
#[must_use]
pub fn validate_and_derive(mut draft: SubjectDraft) -> Assessment {
    if draft.area.trim().is_empty() {
        draft.area = DEFAULT_AREA.to_string();
    }

    let expected = draft.expected_hours();
    let mut failures = Vec::new();

    if draft.component_cd <= 0 {
        failures.push(ValidationFailure::field(
            fields::COMPONENT_CD,
            "CD must be at least 1 (it cannot be 0).",
        ));
    }
    if draft.component_aa <= 0 {
        failures.push(ValidationFailure::field(
            fields::COMPONENT_AA,
            "AA must be at least 1 (it cannot be 0).",
        ));
    }
    if draft.component_cp < 0 {
        failures.push(ValidationFailure::field(
            fields::COMPONENT_CP,
            "CP cannot be negative.",
        ));
    }

    let sum = draft.component_sum();
    if sum != expected {
        failures.push(ValidationFailure::form(format!(
            "CD({}) + CP({}) + AA({}) must add up to {expected} for {} credit(s).",
            draft.component_cd, draft.component_cp, draft.component_aa, draft.credits
        )));
    }

    // Zero credits pins the exact distribution, not only the total.
    if draft.credits == 0
        && !(draft.component_cd == 2 && draft.component_cp == 0 && draft.component_aa == 0)
    {
        failures.push(ValidationFailure::form(
            "With 0 credits: Hours=2 distributed as CD=2, CP=0, AA=0.",
        ));
    }

    draft.total_hours = sum;
    Assessment {
        subject: draft,
        failures,
    }
}

/// Full server-side check of a bound draft: field constraints, then the
/// hour rules of [`validate_and_derive`].
#[must_use]
pub fn review(draft: SubjectDraft) -> Assessment {
    let derived = validate_and_derive(draft);
    let mut failures = check_field_constraints(&derived.subject);
    failures.extend(derived.failures);
    Assessment {
        subject: derived.subject,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn draft(credits: i64, cd: i64, cp: i64, aa: i64) -> SubjectDraft {
        SubjectDraft {
            name: "Programación".into(),
            code: "INF101".into(),
            credits,
            component_cd: cd,
            component_cp: cp,
            component_aa: aa,
            area: "Computación".into(),
            ..Default::default()
        }
    }

    #[test]
    fn balanced_components_pass_and_blank_area_defaults() {
        let input = SubjectDraft {
            area: String::new(),
            ..draft(3, 5, 2, 2)
        };

        let assessment = validate_and_derive(input);

        assert!(assessment.is_valid(), "{:?}", assessment.failures);
        assert_eq!(assessment.subject.total_hours, 9);
        assert_eq!(assessment.subject.area, DEFAULT_AREA);
    }

    #[test]
    fn zero_credits_with_wrong_distribution_reports_sum_and_special_case() {
        let assessment = validate_and_derive(draft(0, 2, 0, 1));

        assert_eq!(assessment.failures.len(), 2);
        assert!(assessment.failures.iter().all(ValidationFailure::is_form_level));
        assert!(assessment.failures[0].message.contains("must add up to 2"));
        assert!(assessment.failures[1].message.contains("CD=2, CP=0, AA=0"));
        assert_eq!(assessment.subject.total_hours, 3);
    }

    #[test]
    fn zero_cd_reports_field_failure_and_sum_mismatch() {
        let assessment = validate_and_derive(draft(2, 0, 1, 1));

        assert_eq!(
            assessment.failures,
            vec![
                ValidationFailure::field(
                    fields::COMPONENT_CD,
                    "CD must be at least 1 (it cannot be 0)."
                ),
                ValidationFailure::form(
                    "CD(0) + CP(1) + AA(1) must add up to 6 for 2 credit(s)."
                ),
            ]
        );
        assert_eq!(assessment.subject.total_hours, 2);
    }

    #[test]
    fn negative_cp_is_reported_on_its_field() {
        let assessment = validate_and_derive(draft(1, 2, -1, 2));

        assert_eq!(assessment.failures.len(), 1);
        assert!(assessment.failures[0].concerns(fields::COMPONENT_CP));
        assert_eq!(assessment.subject.total_hours, 3);
    }

    #[test]
    fn zero_credit_distribution_fails_on_aa_lower_bound() {
        // CD=2, CP=0, AA=0 satisfies the zero-credit rule but AA must be >= 1.
        let assessment = validate_and_derive(draft(0, 2, 0, 0));

        assert_eq!(assessment.failures.len(), 1);
        assert!(assessment.failures[0].concerns(fields::COMPONENT_AA));
        assert_eq!(assessment.subject.total_hours, 2);
    }

    #[rstest]
    #[case("   ")]
    #[case("\t\n")]
    #[case("")]
    fn whitespace_area_is_normalized(#[case] area: &str) {
        let input = SubjectDraft {
            area: area.into(),
            ..draft(1, 1, 1, 1)
        };
        assert_eq!(validate_and_derive(input).subject.area, DEFAULT_AREA);
    }

    #[test]
    fn non_blank_area_is_left_untouched() {
        let input = SubjectDraft {
            area: "  Matemáticas ".into(),
            ..draft(1, 1, 1, 1)
        };
        assert_eq!(validate_and_derive(input).subject.area, "  Matemáticas ");
    }

    #[test]
    fn submitted_total_hours_is_overwritten() {
        let input = SubjectDraft {
            total_hours: 99,
            ..draft(1, 1, 1, 1)
        };
        assert_eq!(validate_and_derive(input).subject.total_hours, 3);
    }

    #[test]
    fn valid_iff_components_positive_and_sum_matches_credits() {
        for credits in 1..=15 {
            for cd in -1..=12 {
                for cp in -1..=12 {
                    for aa in -1..=12 {
                        let assessment = validate_and_derive(draft(credits, cd, cp, aa));
                        let expected_valid =
                            cd > 0 && aa > 0 && cp >= 0 && cd + cp + aa == credits * 3;
                        assert_eq!(
                            assessment.is_valid(),
                            expected_valid,
                            "credits={credits} cd={cd} cp={cp} aa={aa}"
                        );
                        assert_eq!(assessment.subject.total_hours, cd + cp + aa);
                    }
                }
            }
        }
    }

    #[test]
    fn zero_credits_never_valid() {
        // The only distribution the zero-credit rule accepts has AA=0, which
        // the AA lower bound rejects.
        for cd in -1..=4 {
            for cp in -1..=4 {
                for aa in -1..=4 {
                    let assessment = validate_and_derive(draft(0, cd, cp, aa));
                    assert!(!assessment.is_valid(), "cd={cd} cp={cp} aa={aa}");
                }
            }
        }
    }

    #[test]
    fn review_prepends_field_constraints() {
        let input = SubjectDraft {
            name: String::new(),
            ..draft(2, 0, 1, 1)
        };

        let (subject, failures) = review(input).into_parts();

        assert_eq!(subject.total_hours, 2);
        assert!(failures[0].concerns(fields::NAME));
        assert!(failures[1].concerns(fields::COMPONENT_CD));
        assert!(failures[2].is_form_level());
        assert_eq!(failures.len(), 3);
    }

    #[test]
    fn review_accepts_a_well_formed_subject() {
        let assessment = review(draft(4, 6, 3, 3));
        assert!(assessment.is_valid(), "{:?}", assessment.failures);
        assert_eq!(assessment.subject.total_hours, 12);
    }
}
