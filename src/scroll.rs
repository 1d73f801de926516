use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Vertical extent of a `<section id=..>` in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLLED_THRESHOLD
}

/// The section the reader is currently in. When ranges overlap the later section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - config::ACTIVE_SECTION_LOOKAHEAD;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id.as_str())
}

/// Whether an element whose bounding-rect top is `element_top` has entered the viewport far enough.
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - config::REVEAL_MARGIN
}

/// The floating call-to-action stays visible until the contact section is well on screen.
pub fn cta_visible(scroll_y: f64, viewport_height: f64, contact_top: f64) -> bool {
    scroll_y + viewport_height < contact_top + config::CTA_HIDE_MARGIN
}

pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn section_top(id: &str) -> Option<f64> {
    element_by_id(id).map(|el| el.offset_top() as f64)
}

pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(nodes) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all("section[id]").ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

/// Smooth-scrolls so the section sits just below the fixed navbar.
/// Returns false when no element has that id.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(top) = section_top(id) else {
        warn!("no section #{} to scroll to", id);
        return false;
    };
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top - config::NAV_SCROLL_OFFSET);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    true
}

/// Runs `handler` on window scroll for the lifetime of the calling component.
/// With a nonzero `debounce_ms` only the last event of a burst is handled.
#[hook]
pub fn use_window_scroll<F>(handler: F, debounce_ms: u32)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |_| {
            let handler = Rc::new(handler);
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();

            let scroll_callback = {
                let pending = pending.clone();
                Closure::wrap(Box::new(move || {
                    if debounce_ms == 0 {
                        handler();
                        return;
                    }
                    let handler = handler.clone();
                    // Dropping the previous timeout cancels it.
                    *pending.borrow_mut() = Some(Timeout::new(debounce_ms, move || handler()));
                }) as Box<dyn FnMut()>)
            };

            let window = web_sys::window();
            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("could not attach scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
                pending.borrow_mut().take();
            }
        },
        (),
    );
}
