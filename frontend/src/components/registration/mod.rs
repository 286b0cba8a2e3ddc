//! Online registration form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and DOM helpers.
//!
//! On first render the field registry is bound against the page; a
//! missing control disables the submit pipeline rather than letting it
//! run against a partial form.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::RegistrationFormComponent;

impl Component for RegistrationFormComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        RegistrationFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(document) = helpers::document() else {
            return;
        };
        match helpers::bind_registry(&document) {
            Ok(()) => self.registry_bound = true,
            Err(err) => {
                gloo_console::error!(format!("registration form disabled: {err}"));
                helpers::show_toast(
                    "The registration form could not be initialized. Please reload the page.",
                );
            }
        }
    }
}
