//! Channel selection and deep-link generation.
//!
//! The dispatcher turns a validated record into an [`ExternalAction`]: a
//! URI plus instructions for how the UI layer should hand control to the
//! external application. Nothing here can observe whether the hand-off
//! actually succeeded; for the email path the follow-up notice is
//! advisory text, not a success signal.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::model::record::RegistrationRecord;
use crate::registration::message::{email_message, whatsapp_message, SubmittedAt};
use crate::site;

/// How long the UI waits after triggering the `mailto:` navigation before
/// showing the advisory confirmation notice, in milliseconds.
pub const CONFIRMATION_DELAY_MS: u32 = 500;

/// Advisory notice shown after the email hand-off begins.
pub const EMAIL_CONFIRMATION_NOTICE: &str = "Your default email application should now open with \
     your registration details.\n\nIf it did not open, please ensure you have an email \
     application installed (like Outlook, Gmail app, etc.) or use the WhatsApp option instead.";

/// The user-chosen submission path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    WhatsApp,
    Email,
}

impl Channel {
    /// Parses the submission-method radio value.
    pub fn from_value(value: &str) -> Option<Channel> {
        match value {
            "whatsapp" => Some(Channel::WhatsApp),
            "email" => Some(Channel::Email),
            _ => None,
        }
    }
}

/// Hand-off instruction for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalAction {
    /// Open `url` in a new browsing context (the WhatsApp web/app link).
    OpenInNewContext { url: String },
    /// Navigate the current context to `url` (a `mailto:` link), then show
    /// `notice` after `notice_delay_ms`.
    NavigateCurrentContext {
        url: String,
        notice: &'static str,
        notice_delay_ms: u32,
    },
}

/// Renders the record for `channel` and wraps the deep link in the
/// matching hand-off instruction.
pub fn dispatch(record: &RegistrationRecord, channel: Channel, at: &SubmittedAt) -> ExternalAction {
    match channel {
        Channel::WhatsApp => {
            let message = whatsapp_message(record, at);
            ExternalAction::OpenInNewContext {
                url: format!(
                    "https://wa.me/{}?text={}",
                    site::WHATSAPP_NUMBER,
                    encode_component(&message)
                ),
            }
        }
        Channel::Email => {
            let email = email_message(record, at);
            ExternalAction::NavigateCurrentContext {
                url: format!(
                    "mailto:{}?subject={}&body={}",
                    site::REGISTRATION_EMAIL,
                    encode_component(&email.subject),
                    encode_component(&email.body)
                ),
                notice: EMAIL_CONFIRMATION_NOTICE,
                notice_delay_ms: CONFIRMATION_DELAY_MS,
            }
        }
    }
}

/// Characters escaped the way `encodeURIComponent` escapes them: everything
/// except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn at() -> SubmittedAt {
        SubmittedAt {
            day: 5,
            month: 8,
            year: 2026,
            hour: 9,
            minute: 30,
        }
    }

    fn record() -> RegistrationRecord {
        RegistrationRecord {
            program: site::TUTORIAL_PROGRAM.into(),
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
            session: "Saturday Session".into(),
            subjects: vec!["Mathematics".into(), "Physics".into()],
            hostel: false,
            additional_info: "None".into(),
        }
    }

    #[test]
    fn channel_parsing() {
        assert_eq!(Channel::from_value("whatsapp"), Some(Channel::WhatsApp));
        assert_eq!(Channel::from_value("email"), Some(Channel::Email));
        assert_eq!(Channel::from_value("fax"), None);
    }

    #[test]
    fn encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("*ONLINE*"), "*ONLINE*");
        assert_eq!(encode_component("(Grade 8-12)"), "(Grade%208-12)");
        assert_eq!(encode_component("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn whatsapp_dispatch_opens_new_context() {
        let action = dispatch(&record(), Channel::WhatsApp, &at());
        let ExternalAction::OpenInNewContext { url } = action else {
            panic!("expected new-context hand-off");
        };
        assert!(url.starts_with("https://wa.me/264816725850?text="));

        let encoded = url.split_once("?text=").unwrap().1;
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, whatsapp_message(&record(), &at()));
    }

    #[test]
    fn email_dispatch_navigates_with_notice() {
        let action = dispatch(&record(), Channel::Email, &at());
        let ExternalAction::NavigateCurrentContext {
            url,
            notice,
            notice_delay_ms,
        } = action
        else {
            panic!("expected current-context hand-off");
        };

        assert!(url.starts_with("mailto:kleinekuppeps@gmail.com?subject="));
        assert_eq!(notice_delay_ms, CONFIRMATION_DELAY_MS);
        assert!(notice.contains("email application"));

        let query = url.split_once('?').unwrap().1;
        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap();
            let value = percent_decode_str(value).decode_utf8().unwrap().into_owned();
            match key {
                "subject" => subject = Some(value),
                "body" => body = Some(value),
                other => panic!("unexpected query key {other}"),
            }
        }

        let email = email_message(&record(), &at());
        assert_eq!(subject.as_deref(), Some(email.subject.as_str()));
        assert_eq!(body.as_deref(), Some(email.body.as_str()));
    }
}
