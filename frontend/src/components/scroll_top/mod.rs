//! Floating scroll-to-top control, shown once the page has scrolled past
//! 500 px.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

pub enum Msg {
    Scrolled(f64),
    ScrollToTop,
}

pub struct ScrollTopComponent {
    visible: bool,
}

impl Component for ScrollTopComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { visible: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Scrolled(y) => {
                let visible = y > 500.0;
                let changed = visible != self.visible;
                self.visible = visible;
                changed
            }
            Msg::ScrollToTop => {
                if let Some(window) = web_sys::window() {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    window.scroll_to_with_scroll_to_options(&options);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <a
                href="#"
                class={classes!("scroll-to-top", self.visible.then_some("visible"))}
                aria-label="Scroll to top"
                onclick={ctx.link().callback(|e: MouseEvent| {
                    e.prevent_default();
                    Msg::ScrollToTop
                })}
            >
                { "\u{2191}" }
            </a>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let link = ctx.link().clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default();
            link.send_message(Msg::Scrolled(y));
        });
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }
}
