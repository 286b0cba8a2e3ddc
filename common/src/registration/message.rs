//! Channel-specific message templates.
//!
//! Both renderers share one body layout; the WhatsApp variant wraps its
//! section headers in `*` emphasis markers, the email variant strips them.
//! Section ordering and conditional inclusion are fixed: the session
//! section appears only for the tutorial program, and the subjects section
//! is omitted entirely while the subject list is empty.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::model::record::RegistrationRecord;
use crate::site;

/// Wall-clock instant a submission was made, as read from the browser.
/// Kept as plain calendar fields so the formatters stay deterministic and
/// testable without a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedAt {
    pub day: u32,
    /// 1-based month number.
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
}

impl SubmittedAt {
    /// `"5 August 2026"`, the same day-month-year shape as the date of birth.
    pub fn date_line(&self) -> String {
        format!(
            "{} {} {}",
            self.day,
            site::month_name(self.month).unwrap_or(""),
            self.year
        )
    }

    /// 24-hour `"HH:MM"`.
    pub fn time_line(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Subject and body of a pre-filled email composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// Plain-text block for the WhatsApp hand-off.
pub fn whatsapp_message(record: &RegistrationRecord, at: &SubmittedAt) -> String {
    render(record, at, "*")
}

/// Subject + body for the `mailto:` hand-off. The body mirrors the
/// WhatsApp content without emphasis markers.
pub fn email_message(record: &RegistrationRecord, at: &SubmittedAt) -> EmailMessage {
    EmailMessage {
        subject: format!(
            "Online Registration - {} ({})",
            record.full_name, record.program
        ),
        body: render(record, at, ""),
    }
}

const RULE: &str = "==============================";

fn render(record: &RegistrationRecord, at: &SubmittedAt, emphasis: &str) -> String {
    let header = |name: &str| format!("{emphasis}{name}{emphasis}");
    let mut out = String::new();

    let _ = write!(
        out,
        "{}\n{}\n{}\n\n\
         {}\n{}\n\n\
         {}\nFull Name: {}\nID Number: {}\nDate of Birth: {}\nGender: {}\nPhone: {}\nEmail: {}\n\n\
         {}\nName: {}\nRelationship: {}\nPhone: {}\nEmail: {}\n\n\
         {}\nSchool: {}\nLast Grade: {}",
        header("ONLINE REGISTRATION"),
        site::SCHOOL_NAME,
        RULE,
        header("PROGRAM"),
        record.program,
        header("PERSONAL DETAILS"),
        record.full_name,
        record.id_number,
        record.date_of_birth,
        record.gender,
        record.phone,
        record.email,
        header("PARENT/GUARDIAN DETAILS"),
        record.parent_name,
        record.relationship,
        record.parent_phone,
        record.parent_email,
        header("PREVIOUS SCHOOL"),
        record.previous_school,
        record.grade_completed,
    );

    if record.program == site::TUTORIAL_PROGRAM {
        let _ = write!(out, "\n\n{}\n{}", header("SESSION PREFERENCE"), record.session);

        if !record.subjects.is_empty() {
            let _ = write!(out, "\n\n{}", header("SUBJECTS REGISTERED FOR"));
            for (index, subject) in record.subjects.iter().enumerate() {
                let _ = write!(out, "\n{}. {}", index + 1, subject);
            }
            let _ = write!(out, "\nTotal: {} subject(s)", record.subjects.len());
        }
    }

    let hostel = if record.hostel { "Yes" } else { "No" };
    let _ = write!(
        out,
        "\n\n{}\nHostel Required: {}\n\n{}\n{}\n\n{}\nSubmitted via Online Registration Form\nDate: {}\nTime: {}",
        header("ACCOMMODATION"),
        hostel,
        header("ADDITIONAL INFORMATION"),
        record.additional_info,
        RULE,
        at.date_line(),
        at.time_line(),
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> SubmittedAt {
        SubmittedAt {
            day: 5,
            month: 8,
            year: 2026,
            hour: 14,
            minute: 7,
        }
    }

    fn standard_record() -> RegistrationRecord {
        RegistrationRecord {
            program: "Secondary School (Grade 8-12)".into(),
            full_name: "Anna Shilongo".into(),
            id_number: "01020304050".into(),
            date_of_birth: "5 April 2010".into(),
            gender: "Female".into(),
            phone: "+264 81 000 0000".into(),
            email: "anna@example.com".into(),
            parent_name: "Maria Shilongo".into(),
            relationship: "Mother".into(),
            parent_phone: "+264 81 111 1111".into(),
            parent_email: "N/A".into(),
            previous_school: "N/A".into(),
            grade_completed: "N/A".into(),
            session: "N/A".into(),
            subjects: Vec::new(),
            hostel: false,
            additional_info: "None".into(),
        }
    }

    fn tutorial_record() -> RegistrationRecord {
        RegistrationRecord {
            program: site::TUTORIAL_PROGRAM.into(),
            session: "Afternoon Session (Mon-Fri)".into(),
            subjects: vec!["Mathematics".into(), "Physics".into()],
            hostel: true,
            ..standard_record()
        }
    }

    #[test]
    fn timestamp_lines() {
        assert_eq!(at().date_line(), "5 August 2026");
        assert_eq!(at().time_line(), "14:07");
    }

    #[test]
    fn email_subject_is_exact() {
        let email = email_message(&standard_record(), &at());
        assert_eq!(
            email.subject,
            "Online Registration - Anna Shilongo (Secondary School (Grade 8-12))"
        );
    }

    #[test]
    fn whatsapp_message_full_layout() {
        let message = whatsapp_message(&tutorial_record(), &at());
        assert_eq!(
            message,
            "*ONLINE REGISTRATION*\n\
             Kleine Kuppe Private School\n\
             ==============================\n\
             \n\
             *PROGRAM*\n\
             Grade 12 Part-Time Tutorials\n\
             \n\
             *PERSONAL DETAILS*\n\
             Full Name: Anna Shilongo\n\
             ID Number: 01020304050\n\
             Date of Birth: 5 April 2010\n\
             Gender: Female\n\
             Phone: +264 81 000 0000\n\
             Email: anna@example.com\n\
             \n\
             *PARENT/GUARDIAN DETAILS*\n\
             Name: Maria Shilongo\n\
             Relationship: Mother\n\
             Phone: +264 81 111 1111\n\
             Email: N/A\n\
             \n\
             *PREVIOUS SCHOOL*\n\
             School: N/A\n\
             Last Grade: N/A\n\
             \n\
             *SESSION PREFERENCE*\n\
             Afternoon Session (Mon-Fri)\n\
             \n\
             *SUBJECTS REGISTERED FOR*\n\
             1. Mathematics\n\
             2. Physics\n\
             Total: 2 subject(s)\n\
             \n\
             *ACCOMMODATION*\n\
             Hostel Required: Yes\n\
             \n\
             *ADDITIONAL INFORMATION*\n\
             None\n\
             \n\
             ==============================\n\
             Submitted via Online Registration Form\n\
             Date: 5 August 2026\n\
             Time: 14:07"
        );
    }

    #[test]
    fn email_body_mirrors_whatsapp_without_emphasis() {
        let body = email_message(&tutorial_record(), &at()).body;
        let expected = whatsapp_message(&tutorial_record(), &at()).replace('*', "");
        assert_eq!(body, expected);
        assert!(body.starts_with("ONLINE REGISTRATION\n"));
        assert!(!body.contains('*'));
    }

    #[test]
    fn session_and_subjects_omitted_for_standard_programs() {
        let message = whatsapp_message(&standard_record(), &at());
        assert!(!message.contains("SESSION PREFERENCE"));
        assert!(!message.contains("SUBJECTS REGISTERED FOR"));
    }

    #[test]
    fn subjects_block_omitted_when_empty_even_for_tutorials() {
        let mut record = tutorial_record();
        record.subjects.clear();
        let message = whatsapp_message(&record, &at());
        assert!(message.contains("*SESSION PREFERENCE*"));
        assert!(!message.contains("SUBJECTS REGISTERED FOR"));
        assert!(!message.contains("Total:"));
    }

    #[test]
    fn subjects_are_numbered_with_a_count() {
        let message = whatsapp_message(&tutorial_record(), &at());
        assert!(message.contains("1. Mathematics"));
        assert!(message.contains("2. Physics"));
        assert!(message.contains("Total: 2 subject(s)"));
    }

    #[test]
    fn hostel_renders_yes_no() {
        assert!(whatsapp_message(&tutorial_record(), &at()).contains("Hostel Required: Yes"));
        assert!(whatsapp_message(&standard_record(), &at()).contains("Hostel Required: No"));
    }
}
