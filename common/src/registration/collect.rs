//! Snapshot → [`RegistrationRecord`] assembly.

use crate::model::record::RegistrationRecord;
use crate::model::snapshot::FormSnapshot;
use crate::site;

/// Builds the registration record for a snapshot that already passed
/// validation. Reads only; the snapshot is left untouched.
///
/// Optional fields the applicant left empty default to `"N/A"`
/// (`"None"` for the free-text notes). When the selected program is not
/// the tutorial program, the session preference and subject list are
/// masked out regardless of what the hidden widgets still hold.
pub fn collect(snapshot: &FormSnapshot) -> RegistrationRecord {
    let tutorial = snapshot.program == site::TUTORIAL_PROGRAM;

    let session = if tutorial {
        snapshot
            .session
            .as_deref()
            .map(str::to_owned)
            .unwrap_or_else(|| site::NOT_PROVIDED.to_string())
    } else {
        site::NOT_PROVIDED.to_string()
    };

    let subjects = if tutorial {
        snapshot.subjects.clone()
    } else {
        Vec::new()
    };

    RegistrationRecord {
        program: snapshot.program.clone(),
        full_name: snapshot.full_name.clone(),
        id_number: snapshot.id_number.clone(),
        date_of_birth: assemble_date_of_birth(
            &snapshot.dob_day,
            &snapshot.dob_month,
            &snapshot.dob_year,
        ),
        gender: snapshot.gender.clone(),
        phone: snapshot.phone.clone(),
        email: snapshot.email.clone(),
        parent_name: snapshot.parent_name.clone(),
        relationship: snapshot.relationship.clone(),
        parent_phone: snapshot.parent_phone.clone(),
        parent_email: or_not_provided(&snapshot.parent_email),
        previous_school: or_not_provided(&snapshot.previous_school),
        grade_completed: or_not_provided(&snapshot.grade_completed),
        session,
        subjects,
        hostel: snapshot.hostel,
        additional_info: or_default(&snapshot.additional_info, "None"),
    }
}

/// Formats the three date-of-birth selector values as
/// `"{day} {MonthName} {year}"`. Any missing component (or a month value
/// outside 1..=12) collapses the whole field to `"N/A"`; the record
/// never carries a partially formatted date.
pub fn assemble_date_of_birth(day: &str, month: &str, year: &str) -> String {
    let (day, month, year) = (day.trim(), month.trim(), year.trim());
    if day.is_empty() || month.is_empty() || year.is_empty() {
        return site::NOT_PROVIDED.to_string();
    }

    // Selector values are zero-padded ("05"); the formatted date is not.
    let parsed = day
        .parse::<u32>()
        .ok()
        .zip(month.parse::<u32>().ok().and_then(site::month_name));

    match parsed {
        Some((day, month_name)) => format!("{} {} {}", day, month_name, year),
        None => site::NOT_PROVIDED.to_string(),
    }
}

fn or_not_provided(value: &str) -> String {
    or_default(value, site::NOT_PROVIDED)
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutorial_snapshot() -> FormSnapshot {
        FormSnapshot {
            program: site::TUTORIAL_PROGRAM.into(),
            full_name: "Johannes Amadhila".into(),
            id_number: "99081000123".into(),
            dob_day: "05".into(),
            dob_month: "04".into(),
            dob_year: "2010".into(),
            gender: "Male".into(),
            phone: "+264 81 234 5678".into(),
            email: "johannes@example.com".into(),
            parent_name: "Selma Amadhila".into(),
            relationship: "Mother".into(),
            parent_phone: "+264 81 876 5432".into(),
            session: Some("Afternoon Session (Mon-Fri)".into()),
            subjects: vec!["Mathematics".into(), "Physics".into()],
            hostel: true,
            ..FormSnapshot::default()
        }
    }

    #[test]
    fn date_of_birth_assembly() {
        assert_eq!(assemble_date_of_birth("05", "04", "2010"), "5 April 2010");
        assert_eq!(assemble_date_of_birth("31", "12", "1999"), "31 December 1999");
    }

    #[test]
    fn date_of_birth_missing_any_component_is_not_provided() {
        assert_eq!(assemble_date_of_birth("", "04", "2010"), "N/A");
        assert_eq!(assemble_date_of_birth("05", "", "2010"), "N/A");
        assert_eq!(assemble_date_of_birth("05", "04", ""), "N/A");
    }

    #[test]
    fn date_of_birth_out_of_range_month_is_not_provided() {
        assert_eq!(assemble_date_of_birth("05", "13", "2010"), "N/A");
        assert_eq!(assemble_date_of_birth("05", "00", "2010"), "N/A");
    }

    #[test]
    fn tutorial_program_keeps_session_and_subjects() {
        let record = collect(&tutorial_snapshot());
        assert_eq!(record.session, "Afternoon Session (Mon-Fri)");
        assert_eq!(record.subjects, vec!["Mathematics", "Physics"]);
    }

    #[test]
    fn other_programs_mask_session_and_subjects() {
        let mut snapshot = tutorial_snapshot();
        snapshot.program = "Secondary School (Grade 8-12)".into();
        let record = collect(&snapshot);
        assert_eq!(record.session, "N/A");
        assert!(record.subjects.is_empty());
    }

    #[test]
    fn tutorial_program_without_session_choice_defaults() {
        let mut snapshot = tutorial_snapshot();
        snapshot.session = None;
        let record = collect(&snapshot);
        assert_eq!(record.session, "N/A");
    }

    #[test]
    fn optional_fields_default() {
        let record = collect(&tutorial_snapshot());
        assert_eq!(record.parent_email, "N/A");
        assert_eq!(record.previous_school, "N/A");
        assert_eq!(record.grade_completed, "N/A");
        assert_eq!(record.additional_info, "None");
    }

    #[test]
    fn provided_optionals_are_kept() {
        let mut snapshot = tutorial_snapshot();
        snapshot.parent_email = "selma@example.com".into();
        snapshot.previous_school = "Windhoek High School".into();
        snapshot.grade_completed = "Grade 11".into();
        snapshot.additional_info = "Allergic to peanuts.".into();
        let record = collect(&snapshot);
        assert_eq!(record.parent_email, "selma@example.com");
        assert_eq!(record.previous_school, "Windhoek High School");
        assert_eq!(record.grade_completed, "Grade 11");
        assert_eq!(record.additional_info, "Allergic to peanuts.");
    }
}
