//! The structured output of data collection.

use serde::{Deserialize, Serialize};

/// A single registration, assembled fresh on every submit attempt after
/// validation passes and discarded as soon as the hand-off message has
/// been generated. Never persisted.
///
/// `session` and `subjects` only carry data when `program` is the
/// tutorial program; the collector masks them otherwise so they cannot
/// influence formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub program: String,
    pub full_name: String,
    pub id_number: String,
    /// `"{day} {MonthName} {year}"`, or `"N/A"` when any of the three
    /// date-of-birth selectors was left empty.
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub parent_name: String,
    pub relationship: String,
    pub parent_phone: String,
    pub parent_email: String,
    pub previous_school: String,
    pub grade_completed: String,
    pub session: String,
    pub subjects: Vec<String>,
    pub hostel: bool,
    pub additional_info: String,
}
