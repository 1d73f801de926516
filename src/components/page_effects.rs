use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::config;
use crate::scroll::{self, use_window_scroll};

pub const REVEAL_SELECTOR: &str = ".feature-item, .service-card, .portfolio-item, .testimonial-card";

/// Adds `animate` to every reveal target that has scrolled into view. Never removes it.
fn reveal_visible_elements() {
    let Some(nodes) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(REVEAL_SELECTOR).ok())
    else {
        return;
    };

    let viewport_height = scroll::viewport_height();
    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
    {
        if scroll::should_reveal(element.get_bounding_client_rect().top(), viewport_height) {
            let _ = element.class_list().add_1("animate");
        }
    }
}

/// Fades page sections in as they scroll into view, including those visible on load.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            reveal_visible_elements();
            || ()
        },
        (),
    );
    use_window_scroll(reveal_visible_elements, config::SCROLL_DEBOUNCE_MS);
}

/// Tab pressed while nothing is focused jumps straight to the main content.
#[hook]
pub fn use_skip_to_main() {
    use_effect_with_deps(
        |_| {
            let document = web_sys::window().and_then(|w| w.document());

            let keydown = {
                let document = document.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() != "Tab" || e.shift_key() {
                        return;
                    }
                    let Some(document) = &document else { return };
                    let on_body = match (document.active_element(), document.body()) {
                        (Some(active), Some(body)) => {
                            let body: &web_sys::Element = body.as_ref();
                            active == *body
                        }
                        _ => false,
                    };
                    if !on_body {
                        return;
                    }
                    let main = document
                        .query_selector("main")
                        .ok()
                        .flatten()
                        .or_else(|| document.get_element_by_id("home"))
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                    if let Some(main) = main {
                        if main.focus().is_ok() {
                            debug!("focus moved to main content");
                            e.prevent_default();
                        }
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>)
            };

            if let Some(document) = &document {
                if document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("could not attach keydown listener");
                }
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}
