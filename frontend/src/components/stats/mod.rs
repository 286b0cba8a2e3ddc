//! Animated statistics band.
//!
//! The counters stay at zero until the section first crosses the
//! viewport (intersection threshold 0.5), then run from 0 to their
//! targets over ~2 s, advancing one frame per cooperative timer yield.
//! The animation has no cancellation path: it ends by reaching the
//! targets.

use gloo_timers::future::TimeoutFuture;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const STATS: [(&str, u64); 4] = [
    ("Years of Excellence", 25),
    ("Learners Enrolled", 680),
    ("Qualified Teachers", 42),
    ("Grade 12 Pass Rate %", 98),
];

const DURATION_MS: u32 = 2000;
const FRAME_MS: u32 = 16;
const FRAMES: u32 = DURATION_MS / FRAME_MS;

pub enum Msg {
    SectionVisible,
    Frame(u32),
}

pub struct StatsComponent {
    started: bool,
    progress: f64,
    section_ref: NodeRef,
}

impl Component for StatsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            started: false,
            progress: 0.0,
            section_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SectionVisible => {
                if self.started {
                    return false;
                }
                self.started = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    for frame in 1..=FRAMES {
                        TimeoutFuture::new(FRAME_MS).await;
                        link.send_message(Msg::Frame(frame));
                    }
                });
                false
            }
            Msg::Frame(frame) => {
                self.progress = f64::from(frame) / f64::from(FRAMES);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="stats" ref={self.section_ref.clone()}>
                <div class="stats-grid">
                    {
                        STATS.iter().map(|&(label, target)| html! {
                            <div class="stat">
                                <span class="stat-number">{ self.displayed(target) }</span>
                                <span class="stat-label">{ label }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(section) = self.section_ref.cast::<Element>() else {
            return;
        };

        let link = ctx.link().clone();
        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        link.send_message(Msg::SectionVisible);
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(0.5));
        if let Ok(observer) =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&section);
            on_intersect.forget();
        }
    }
}

impl StatsComponent {
    fn displayed(&self, target: u64) -> String {
        let current = if self.progress >= 1.0 {
            target
        } else {
            (target as f64 * self.progress).floor() as u64
        };
        current.to_formatted_string(&Locale::en)
    }
}
