//! DOM glue for the registration form.
//!
//! This is the only place allowed to touch the live widget tree on the
//! form's behalf: binding the field registry at initialization, reading a
//! `FormSnapshot` at submit time, applying and clearing error highlights,
//! and carrying out the `ExternalAction` the dispatcher returns.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use common::error::FormError;
use common::model::field::{FieldId, FieldKind, REGISTRY};
use common::model::snapshot::FormSnapshot;
use common::registration::dispatch::ExternalAction;
use common::registration::message::SubmittedAt;

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Resolves every registry entry against the page, failing on the first
/// control that is absent. Run once at form initialization.
pub fn bind_registry(document: &Document) -> Result<(), FormError> {
    for spec in REGISTRY {
        let key = spec.id.dom_key();
        let found = if spec.kind.is_group() {
            document
                .query_selector(&format!("input[name='{key}']"))
                .ok()
                .flatten()
                .is_some()
        } else {
            document.get_element_by_id(key).is_some()
        };
        if !found {
            return Err(FormError::MissingField(key));
        }
    }
    Ok(())
}

/// Reads the whole form surface into an immutable snapshot. Individual
/// lookups are infallible here: `bind_registry` already guaranteed the
/// controls exist.
pub fn read_snapshot(document: &Document) -> FormSnapshot {
    FormSnapshot {
        program: text_value(document, FieldId::Program),
        full_name: text_value(document, FieldId::FullName),
        id_number: text_value(document, FieldId::IdNumber),
        dob_day: text_value(document, FieldId::DobDay),
        dob_month: text_value(document, FieldId::DobMonth),
        dob_year: text_value(document, FieldId::DobYear),
        gender: text_value(document, FieldId::Gender),
        phone: text_value(document, FieldId::Phone),
        email: text_value(document, FieldId::Email),
        parent_name: text_value(document, FieldId::ParentName),
        relationship: text_value(document, FieldId::Relationship),
        parent_phone: text_value(document, FieldId::ParentPhone),
        parent_email: text_value(document, FieldId::ParentEmail),
        previous_school: text_value(document, FieldId::PreviousSchool),
        grade_completed: text_value(document, FieldId::GradeCompleted),
        session: checked_value(document, FieldId::Session),
        subjects: checked_values(document, FieldId::Subjects),
        hostel: checkbox_checked(document, FieldId::Hostel),
        additional_info: text_value(document, FieldId::AdditionalInfo),
        submission_method: checked_value(document, FieldId::SubmissionMethod),
    }
}

fn text_value(document: &Document, id: FieldId) -> String {
    let Some(element) = document.get_element_by_id(id.dom_key()) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

fn checked_value(document: &Document, group: FieldId) -> Option<String> {
    document
        .query_selector(&format!("input[name='{}']:checked", group.dom_key()))
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Checked values of a checkbox group, in document order.
fn checked_values(document: &Document, group: FieldId) -> Vec<String> {
    let mut values = Vec::new();
    if let Ok(list) =
        document.query_selector_all(&format!("input[name='{}']:checked", group.dom_key()))
    {
        for index in 0..list.length() {
            if let Some(input) = list
                .get(index)
                .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
            {
                values.push(input.value());
            }
        }
    }
    values
}

fn checkbox_checked(document: &Document, id: FieldId) -> bool {
    document
        .get_element_by_id(id.dom_key())
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

/// Removes stale `error` highlights from the previous validation pass.
pub fn clear_error_marks(document: &Document) {
    if let Ok(marked) = document.query_selector_all(".error") {
        for index in 0..marked.length() {
            if let Some(element) = marked
                .get(index)
                .and_then(|n| n.dyn_into::<Element>().ok())
            {
                let _ = element.class_list().remove_1("error");
            }
        }
    }
}

/// Highlights every offending control. Checkbox-like controls mark their
/// wrapping `.checkbox-label` so the highlight is visible around the
/// custom checkbox artwork.
pub fn mark_invalid(document: &Document, fields: &[FieldId]) {
    for &id in fields {
        let Some(spec) = REGISTRY.iter().find(|s| s.id == id) else {
            continue;
        };
        if spec.kind.is_group() {
            if let Ok(inputs) =
                document.query_selector_all(&format!("input[name='{}']", id.dom_key()))
            {
                for index in 0..inputs.length() {
                    if let Some(element) = inputs
                        .get(index)
                        .and_then(|n| n.dyn_into::<Element>().ok())
                    {
                        mark_element(element);
                    }
                }
            }
        } else if let Some(element) = document.get_element_by_id(id.dom_key()) {
            if spec.kind == FieldKind::Checkbox {
                mark_element(element);
            } else {
                let _ = element.class_list().add_1("error");
            }
        }
    }
}

fn mark_element(element: Element) {
    let target = element
        .closest(".checkbox-label")
        .ok()
        .flatten()
        .unwrap_or(element);
    let _ = target.class_list().add_1("error");
}

/// Scrolls the first offending control into view, centered, and focuses
/// it.
pub fn bring_into_view(document: &Document, id: FieldId) {
    let element = if REGISTRY
        .iter()
        .find(|s| s.id == id)
        .is_some_and(|s| s.kind.is_group())
    {
        document
            .query_selector(&format!("input[name='{}']", id.dom_key()))
            .ok()
            .flatten()
    } else {
        document.get_element_by_id(id.dom_key())
    };
    let Some(element) = element else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Blocking notice for validation failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Non-blocking notice at the bottom of the screen, removed after a few
/// seconds.
pub fn show_toast(message: &str) {
    let Some(document) = document() else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("white-space", "pre-line").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(6000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Submission timestamp from the browser clock.
pub fn submitted_now() -> SubmittedAt {
    let now = js_sys::Date::new_0();
    SubmittedAt {
        day: now.get_date(),
        month: now.get_month() + 1,
        year: now.get_full_year() as i32,
        hour: now.get_hours(),
        minute: now.get_minutes(),
    }
}

/// Carries out the hand-off the dispatcher chose. The email path shows
/// its advisory notice after the fixed delay; whether the external
/// application actually opened cannot be observed from here.
pub fn perform(action: ExternalAction) {
    match action {
        ExternalAction::OpenInNewContext { url } => {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        }
        ExternalAction::NavigateCurrentContext {
            url,
            notice,
            notice_delay_ms,
        } => {
            navigate_via_anchor(&url);
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(notice_delay_ms).await;
                show_toast(notice);
            });
        }
    }
}

// Clicking a transient anchor is more reliable for mailto: hand-offs
// than assigning the location.
fn navigate_via_anchor(url: &str) {
    let Some(document) = document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };
    anchor.set_href(url);
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}
