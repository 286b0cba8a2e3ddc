//! Site navigation bar: brand, hamburger-toggled link panel, smooth
//! in-page scrolling offset by the bar's own height, and a deeper shadow
//! once the page has scrolled past the hero.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use common::site;

const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("programs", "Programs"),
    ("gallery", "Gallery"),
    ("registration", "Registration"),
    ("contact", "Contact"),
];

pub enum Msg {
    ToggleMenu,
    CloseMenu,
    NavigateTo(&'static str),
    Scrolled(f64),
}

pub struct NavbarComponent {
    menu_open: bool,
    elevated: bool,
    nav_ref: NodeRef,
}

impl Component for NavbarComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu_open: false,
            elevated: false,
            nav_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
            Msg::CloseMenu => {
                let was_open = self.menu_open;
                self.menu_open = false;
                was_open
            }
            Msg::NavigateTo(section) => {
                if let Some(nav) = self.nav_ref.cast::<HtmlElement>() {
                    scroll_to_section(&nav, section);
                }
                self.menu_open = false;
                true
            }
            Msg::Scrolled(y) => {
                let elevated = y > 100.0;
                let changed = elevated != self.elevated;
                self.elevated = elevated;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <nav
                class={classes!("navbar", self.elevated.then_some("elevated"))}
                ref={self.nav_ref.clone()}
            >
                <div class="nav-container">
                    <a
                        class="nav-brand"
                        onclick={link.callback(|_| Msg::NavigateTo("home"))}
                    >
                        { site::SCHOOL_NAME }
                    </a>
                    <button
                        class={classes!("hamburger", self.menu_open.then_some("active"))}
                        aria-label="Toggle navigation"
                        onclick={link.callback(|_| Msg::ToggleMenu)}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <ul class={classes!("nav-links", self.menu_open.then_some("active"))}>
                        {
                            NAV_LINKS.iter().map(|&(section, label)| html! {
                                <li>
                                    <a
                                        href={format!("#{section}")}
                                        onclick={link.callback(move |e: MouseEvent| {
                                            e.prevent_default();
                                            Msg::NavigateTo(section)
                                        })}
                                    >
                                        { label }
                                    </a>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            </nav>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        // Shadow depth follows the scroll position.
        let scroll_link = ctx.link().clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            scroll_link.send_message(Msg::Scrolled(y));
        });
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();

        // A click anywhere outside the bar closes the mobile menu.
        let Some(document) = window.document() else {
            return;
        };
        let nav_ref = self.nav_ref.clone();
        let click_link = ctx.link().clone();
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event| {
            let inside = nav_ref
                .cast::<HtmlElement>()
                .zip(target_node(&event))
                .is_some_and(|(nav, node)| nav.contains(Some(&node)));
            if !inside {
                click_link.send_message(Msg::CloseMenu);
            }
        });
        let _ = document
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn target_node(event: &web_sys::MouseEvent) -> Option<web_sys::Node> {
    event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
}

/// Smooth-scrolls so `section` lands just below the fixed bar.
fn scroll_to_section(nav: &HtmlElement, section: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window
        .document()
        .and_then(|d| d.get_element_by_id(section))
    else {
        return;
    };

    let top = target.get_bounding_client_rect().top()
        + window.page_y_offset().unwrap_or_default()
        - f64::from(nav.offset_height());

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
