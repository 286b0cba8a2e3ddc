//! Registry-driven form validation.
//!
//! Walks the field registry in document order and checks every entry
//! with no short-circuit, so the UI can highlight all offending controls
//! at once while scrolling to the first. Rules:
//!
//! - required text/select/textarea: the trimmed value must be non-empty
//! - required radio/checkbox group: at least one option must be checked
//! - required checkbox: must be checked
//! - email-kind fields, when non-empty: must look like `local@domain.tld`

use regex::Regex;

use crate::model::field::{FieldId, FieldKind, FieldSpec, REGISTRY};
use crate::model::snapshot::{FieldValue, FormSnapshot};

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every offending field, in document order.
    pub invalid: Vec<FieldId>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// The field the UI should scroll to and focus.
    pub fn first_invalid(&self) -> Option<FieldId> {
        self.invalid.first().copied()
    }
}

/// Validates a snapshot against the site's field registry.
pub fn validate(snapshot: &FormSnapshot) -> ValidationReport {
    validate_against(REGISTRY, snapshot)
}

/// Validates against an explicit registry slice. Split out so the rules
/// can be exercised with field specs the live form does not currently
/// carry (e.g. a required checkbox).
pub fn validate_against(specs: &[FieldSpec], snapshot: &FormSnapshot) -> ValidationReport {
    let email_re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    let mut invalid = Vec::new();

    for spec in specs {
        if field_is_invalid(spec, snapshot.value(spec.id), &email_re) {
            invalid.push(spec.id);
        }
    }

    ValidationReport { invalid }
}

fn field_is_invalid(spec: &FieldSpec, value: FieldValue<'_>, email_re: &Regex) -> bool {
    match value {
        FieldValue::Text(text) => {
            let text = text.trim();
            if spec.required && text.is_empty() {
                return true;
            }
            spec.kind == FieldKind::Email && !text.is_empty() && !email_re.is_match(text)
        }
        FieldValue::Choice(choice) => spec.required && choice.is_none(),
        FieldValue::Multi(values) => spec.required && values.is_empty(),
        FieldValue::Checked(checked) => spec.required && !checked,
    }
}
