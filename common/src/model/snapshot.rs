//! Raw form state captured from the widget tree at submit time.
//!
//! The UI layer is the only place allowed to read the live DOM; it
//! translates the page into a [`FormSnapshot`] at the submit boundary and
//! everything downstream (validation, collection, formatting) works on
//! this immutable copy.

use serde::{Deserialize, Serialize};

use crate::model::field::FieldId;

/// One submit attempt's worth of widget values.
///
/// Text-like controls carry their raw (untrimmed) value. The session and
/// submission-method radio groups carry the checked option, the subjects
/// checkbox group carries every checked value in document order, and the
/// hostel checkbox carries its checked state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub program: String,
    pub full_name: String,
    pub id_number: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub parent_name: String,
    pub relationship: String,
    pub parent_phone: String,
    pub parent_email: String,
    pub previous_school: String,
    pub grade_completed: String,
    pub session: Option<String>,
    pub subjects: Vec<String>,
    pub hostel: bool,
    pub additional_info: String,
    pub submission_method: Option<String>,
}

/// Borrowed view of one field's value, shaped by its kind. Lets the
/// validator walk the registry without knowing the snapshot's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Choice(Option<&'a str>),
    Multi(&'a [String]),
    Checked(bool),
}

impl FormSnapshot {
    pub fn value(&self, id: FieldId) -> FieldValue<'_> {
        match id {
            FieldId::Program => FieldValue::Text(&self.program),
            FieldId::FullName => FieldValue::Text(&self.full_name),
            FieldId::IdNumber => FieldValue::Text(&self.id_number),
            FieldId::DobDay => FieldValue::Text(&self.dob_day),
            FieldId::DobMonth => FieldValue::Text(&self.dob_month),
            FieldId::DobYear => FieldValue::Text(&self.dob_year),
            FieldId::Gender => FieldValue::Text(&self.gender),
            FieldId::Phone => FieldValue::Text(&self.phone),
            FieldId::Email => FieldValue::Text(&self.email),
            FieldId::ParentName => FieldValue::Text(&self.parent_name),
            FieldId::Relationship => FieldValue::Text(&self.relationship),
            FieldId::ParentPhone => FieldValue::Text(&self.parent_phone),
            FieldId::ParentEmail => FieldValue::Text(&self.parent_email),
            FieldId::PreviousSchool => FieldValue::Text(&self.previous_school),
            FieldId::GradeCompleted => FieldValue::Text(&self.grade_completed),
            FieldId::Session => FieldValue::Choice(self.session.as_deref()),
            FieldId::Subjects => FieldValue::Multi(&self.subjects),
            FieldId::Hostel => FieldValue::Checked(self.hostel),
            FieldId::AdditionalInfo => FieldValue::Text(&self.additional_info),
            FieldId::SubmissionMethod => FieldValue::Choice(self.submission_method.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::REGISTRY;

    #[test]
    fn every_registry_entry_has_a_value() {
        // A new FieldId without a `value` arm fails to compile, but this
        // keeps the registry and the snapshot accessor exercised together.
        let snapshot = FormSnapshot::default();
        for spec in REGISTRY {
            let _ = snapshot.value(spec.id);
        }
    }
}
