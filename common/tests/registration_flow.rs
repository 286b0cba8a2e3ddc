//! End-to-end run of the registration pipeline: snapshot → validation →
//! collection → formatting → dispatch, as the frontend drives it on a
//! submit event.

use common::model::field::FieldId;
use common::model::snapshot::FormSnapshot;
use common::registration::collect::collect;
use common::registration::dispatch::{dispatch, Channel, ExternalAction};
use common::registration::message::SubmittedAt;
use common::registration::validate::validate;
use common::site;
use percent_encoding::percent_decode_str;

fn tutorial_submission() -> FormSnapshot {
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
        session: Some("Saturday Session".into()),
        subjects: vec!["Mathematics".into(), "Physics".into()],
        hostel: false,
        submission_method: Some("whatsapp".into()),
        ..FormSnapshot::default()
    }
}

fn submitted_at() -> SubmittedAt {
    SubmittedAt {
        day: 5,
        month: 8,
        year: 2026,
        hour: 16,
        minute: 45,
    }
}

#[test]
fn tutorial_whatsapp_submission_round_trips_through_the_deep_link() {
    let snapshot = tutorial_submission();
    assert!(validate(&snapshot).is_valid());

    let record = collect(&snapshot);
    let channel = snapshot
        .submission_method
        .as_deref()
        .and_then(Channel::from_value)
        .unwrap_or(Channel::WhatsApp);

    let action = dispatch(&record, channel, &submitted_at());
    let ExternalAction::OpenInNewContext { url } = action else {
        panic!("whatsapp submissions open a new context");
    };

    let encoded = url.split_once("?text=").expect("text parameter").1;
    let message = percent_decode_str(encoded)
        .decode_utf8()
        .expect("valid utf-8")
        .into_owned();

    assert!(message.contains("*SUBJECTS REGISTERED FOR*"));
    assert!(message.contains("1. Mathematics"));
    assert!(message.contains("2. Physics"));
    assert!(message.contains("Total: 2 subject(s)"));
    assert!(message.contains("Date of Birth: 5 April 2010"));
    assert!(message.contains("Time: 16:45"));
}

#[test]
fn invalid_submission_is_blocked_before_collection() {
    let mut snapshot = tutorial_submission();
    snapshot.email = "not-an-address".into();
    snapshot.parent_name.clear();

    let report = validate(&snapshot);
    assert!(!report.is_valid());
    assert_eq!(report.first_invalid(), Some(FieldId::Email));
    assert_eq!(report.invalid, vec![FieldId::Email, FieldId::ParentName]);
}

#[test]
fn email_channel_produces_a_mailto_hand_off() {
    let mut snapshot = tutorial_submission();
    snapshot.submission_method = Some("email".into());

    let record = collect(&snapshot);
    let channel = snapshot
        .submission_method
        .as_deref()
        .and_then(Channel::from_value)
        .unwrap_or(Channel::WhatsApp);

    match dispatch(&record, channel, &submitted_at()) {
        ExternalAction::NavigateCurrentContext { url, .. } => {
            assert!(url.starts_with("mailto:"));
            assert!(url.contains("subject=Online%20Registration%20-%20Johannes%20Amadhila"));
        }
        other => panic!("unexpected action {other:?}"),
    }
}
