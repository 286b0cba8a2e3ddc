//! Declarative registry of the registration form's input surface.
//!
//! Each entry names one control (or named control group), its semantic
//! kind, and whether it is required. The table's declaration order is the
//! form's document order: the validator reports the *first* offending
//! field by walking this table top to bottom, and the frontend resolves
//! every entry against the DOM once at initialization, failing fast when a
//! control is absent instead of silently defaulting.

use serde::{Deserialize, Serialize};

/// Identifier of a single form control or named control group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldId {
    Program,
    FullName,
    IdNumber,
    DobDay,
    DobMonth,
    DobYear,
    Gender,
    Phone,
    Email,
    ParentName,
    Relationship,
    ParentPhone,
    ParentEmail,
    PreviousSchool,
    GradeCompleted,
    Session,
    Subjects,
    Hostel,
    AdditionalInfo,
    SubmissionMethod,
}

impl FieldId {
    /// DOM binding key: the element `id` for single controls, the input
    /// `name` for radio/checkbox groups (see [`FieldKind::is_group`]).
    pub fn dom_key(self) -> &'static str {
        match self {
            FieldId::Program => "program",
            FieldId::FullName => "fullName",
            FieldId::IdNumber => "idNumber",
            FieldId::DobDay => "dobDay",
            FieldId::DobMonth => "dobMonth",
            FieldId::DobYear => "dobYear",
            FieldId::Gender => "gender",
            FieldId::Phone => "phone",
            FieldId::Email => "email",
            FieldId::ParentName => "parentName",
            FieldId::Relationship => "relationship",
            FieldId::ParentPhone => "parentPhone",
            FieldId::ParentEmail => "parentEmail",
            FieldId::PreviousSchool => "previousSchool",
            FieldId::GradeCompleted => "gradeCompleted",
            FieldId::Session => "session",
            FieldId::Subjects => "subjects",
            FieldId::Hostel => "hostel",
            FieldId::AdditionalInfo => "additionalInfo",
            FieldId::SubmissionMethod => "submissionMethod",
        }
    }
}

/// Semantic kind of a registry entry, driving both DOM resolution and the
/// validation rule applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Email,
    Select,
    TextArea,
    RadioGroup,
    CheckboxGroup,
    Checkbox,
}

impl FieldKind {
    /// Group kinds are looked up by input `name`, everything else by `id`.
    pub fn is_group(self) -> bool {
        matches!(self, FieldKind::RadioGroup | FieldKind::CheckboxGroup)
    }
}

/// One row of the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
}

const fn spec(id: FieldId, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec { id, kind, required }
}

/// The form surface in document order.
pub const REGISTRY: &[FieldSpec] = &[
    spec(FieldId::Program, FieldKind::Select, true),
    spec(FieldId::FullName, FieldKind::Text, true),
    spec(FieldId::IdNumber, FieldKind::Text, true),
    spec(FieldId::DobDay, FieldKind::Select, false),
    spec(FieldId::DobMonth, FieldKind::Select, false),
    spec(FieldId::DobYear, FieldKind::Select, false),
    spec(FieldId::Gender, FieldKind::Select, true),
    spec(FieldId::Phone, FieldKind::Text, true),
    spec(FieldId::Email, FieldKind::Email, true),
    spec(FieldId::ParentName, FieldKind::Text, true),
    spec(FieldId::Relationship, FieldKind::Select, true),
    spec(FieldId::ParentPhone, FieldKind::Text, true),
    spec(FieldId::ParentEmail, FieldKind::Email, false),
    spec(FieldId::PreviousSchool, FieldKind::Text, false),
    spec(FieldId::GradeCompleted, FieldKind::Select, false),
    spec(FieldId::Session, FieldKind::RadioGroup, false),
    spec(FieldId::Subjects, FieldKind::CheckboxGroup, false),
    spec(FieldId::Hostel, FieldKind::Checkbox, false),
    spec(FieldId::AdditionalInfo, FieldKind::TextArea, false),
    spec(FieldId::SubmissionMethod, FieldKind::RadioGroup, false),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keys_are_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.id.dom_key(), b.id.dom_key());
            }
        }
    }

    #[test]
    fn group_fields_are_marked_as_groups() {
        for spec in REGISTRY {
            let group = matches!(spec.id, FieldId::Session | FieldId::Subjects | FieldId::SubmissionMethod);
            assert_eq!(spec.kind.is_group(), group, "{:?}", spec.id);
        }
    }
}
