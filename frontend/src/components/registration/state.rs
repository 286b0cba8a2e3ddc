//! Component state for the registration form.
//!
//! The form's inputs are uncontrolled: the widget tree holds the values
//! and is read into a `FormSnapshot` at submit time. The component itself
//! only tracks what the view needs to re-render: which conditional mode
//! the program selector put it in, and which submission channel is
//! selected.

use common::registration::dispatch::Channel;

pub struct RegistrationFormComponent {
    /// `true` while the tutorial program is selected; shows the session
    /// and subjects sections. Switching away hides them without clearing
    /// their inputs.
    pub tutorial_mode: bool,

    /// Currently selected submission channel; styles the submit button.
    pub channel: Channel,

    /// Set once every registry entry resolved against the page. Submits
    /// are refused while this is `false`.
    pub registry_bound: bool,
}

impl RegistrationFormComponent {
    pub fn new() -> Self {
        Self {
            tutorial_mode: false,
            channel: Channel::WhatsApp,
            registry_bound: false,
        }
    }
}
