//! Update function for the registration form.
//!
//! Receives the current component state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//! The submit path runs the whole pipeline synchronously: snapshot →
//! validate → collect → format → dispatch; only the delayed email
//! confirmation notice outlives the handler.

use yew::prelude::*;

use common::registration::collect::collect;
use common::registration::dispatch::{dispatch, Channel};
use common::registration::validate::validate;
use common::site;

use super::helpers;
use super::messages::Msg;
use super::state::RegistrationFormComponent;

pub fn update(
    component: &mut RegistrationFormComponent,
    _ctx: &Context<RegistrationFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::ProgramChanged(program) => {
            let tutorial = program == site::TUTORIAL_PROGRAM;
            let changed = tutorial != component.tutorial_mode;
            component.tutorial_mode = tutorial;
            changed
        }
        Msg::ChannelChanged(value) => {
            component.channel = Channel::from_value(&value).unwrap_or(Channel::WhatsApp);
            true
        }
        Msg::SubmitRequested => {
            if !component.registry_bound {
                gloo_console::error!("submit ignored: field registry is not bound");
                return false;
            }
            let Some(document) = helpers::document() else {
                return false;
            };

            helpers::clear_error_marks(&document);
            let snapshot = helpers::read_snapshot(&document);

            let report = validate(&snapshot);
            if !report.is_valid() {
                helpers::mark_invalid(&document, &report.invalid);
                if let Some(first) = report.first_invalid() {
                    helpers::bring_into_view(&document, first);
                }
                helpers::alert("Please fill in all required fields correctly.");
                return false;
            }

            let channel = snapshot
                .submission_method
                .as_deref()
                .and_then(Channel::from_value)
                .unwrap_or(component.channel);

            let record = collect(&snapshot);
            let action = dispatch(&record, channel, &helpers::submitted_now());
            helpers::perform(action);
            false
        }
    }
}
