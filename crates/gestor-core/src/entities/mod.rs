//! Entity structs for the Gestor domain.
//!
//! `CourseSubject` maps to the `course_subjects` table. `SubjectDraft` is the
//! candidate shape a subject takes before the store assigns it an id. All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod subject;

pub use subject::{CourseSubject, SubjectDraft};

/// Area assigned to a subject submitted with a blank area.
pub const DEFAULT_AREA: &str = "sin área";

/// Column names, used as the `field` of field-level validation failures.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CODE: &str = "code";
    pub const CREDITS: &str = "credits";
    pub const COMPONENT_CD: &str = "component_cd";
    pub const COMPONENT_CP: &str = "component_cp";
    pub const COMPONENT_AA: &str = "component_aa";
    pub const AREA: &str = "area";
}
