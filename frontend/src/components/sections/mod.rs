//! Static page sections and the scroll-reveal effect applied to their
//! cards. No logic lives here beyond the one-time reveal wiring.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use common::site;

pub fn hero() -> Html {
    html! {
        <header id="home" class="hero">
            <h1>{ site::SCHOOL_NAME }</h1>
            <p class="hero-tagline">{ "Excellence in education, from pre-primary to Grade 12." }</p>
            <a class="hero-cta" href="#registration">{ "Register Online" }</a>
        </header>
    }
}

pub fn features() -> Html {
    let features = [
        ("Small Classes", "Individual attention in classes capped well below the national average."),
        ("Dedicated Teachers", "A hand-picked team of qualified, passionate educators."),
        ("Modern Facilities", "Science labs, a library, sports grounds, and on-site hostel accommodation."),
        ("Proven Results", "A Grade 12 pass rate that speaks for itself, year after year."),
    ];

    html! {
        <section id="about" class="features">
            <h2>{ "Why Kleine Kuppe?" }</h2>
            <div class="feature-grid">
                {
                    features.iter().map(|&(title, text)| html! {
                        <div class="feature-card">
                            <h3>{ title }</h3>
                            <p>{ text }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

pub fn programs() -> Html {
    html! {
        <section id="programs" class="programs">
            <h2>{ "Our Programs" }</h2>
            <div class="program-grid">
                {
                    site::PROGRAMS.iter().map(|&program| html! {
                        <div class="program-card">
                            <h3>{ program }</h3>
                            <a href="#registration">{ "Enrol now" }</a>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

pub fn gallery() -> Html {
    let items = [
        "Campus grounds",
        "Science laboratory",
        "School library",
        "Sports day",
        "Hostel facilities",
        "Graduation ceremony",
    ];

    html! {
        <section id="gallery" class="gallery">
            <h2>{ "School Life" }</h2>
            <div class="gallery-grid">
                {
                    items.iter().map(|&caption| html! {
                        <figure class="gallery-item">
                            <figcaption>{ caption }</figcaption>
                        </figure>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

pub fn footer() -> Html {
    html! {
        <footer id="contact" class="footer">
            <p>{ site::SCHOOL_NAME }</p>
            <p>{ format!("WhatsApp: +{}", site::WHATSAPP_NUMBER) }</p>
            <p>{ format!("Email: {}", site::REGISTRATION_EMAIL) }</p>
            <p>{ "Windhoek, Namibia" }</p>
        </footer>
    }
}

/// Hides every card below the fold and reveals each once, staggered by
/// its index, the first time it crosses the viewport.
pub fn init_scroll_reveal() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(cards) = document.query_selector_all(".feature-card, .program-card, .gallery-item")
    else {
        return;
    };
    if cards.length() == 0 {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                if let Ok(element) = entry.target().dyn_into::<HtmlElement>() {
                    let style = element.style();
                    let _ = style.set_property("opacity", "1");
                    let _ = style.set_property("transform", "translateY(0)");
                }
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(0.1));
    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    on_intersect.forget();

    for index in 0..cards.length() {
        let Some(element) = cards.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = element.style();
        let delay = f64::from(index) * 0.1;
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(30px)");
        let _ = style.set_property(
            "transition",
            &format!("opacity 0.6s ease {delay:.1}s, transform 0.6s ease {delay:.1}s"),
        );
        observer.observe(&element);
    }
}
