use yew::{html, Component, Context, Html};

use crate::components::navbar::NavbarComponent;
use crate::components::registration::RegistrationFormComponent;
use crate::components::scroll_top::ScrollTopComponent;
use crate::components::sections;
use crate::components::stats::StatsComponent;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <NavbarComponent />
                { sections::hero() }
                { sections::features() }
                <StatsComponent />
                { sections::programs() }
                { sections::gallery() }
                <RegistrationFormComponent />
                { sections::footer() }
                <ScrollTopComponent />
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            sections::init_scroll_reveal();
        }
    }
}
