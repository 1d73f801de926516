use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{self, use_window_scroll};

const CONTACT_SECTION: &str = "contact";

#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_window_scroll(
            move || {
                // Without a contact section there is nothing to hide behind.
                if let Some(contact_top) = scroll::section_top(CONTACT_SECTION) {
                    visible.set(scroll::cta_visible(scroll::scroll_y(), scroll::viewport_height(), contact_top));
                }
            },
            0,
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(CONTACT_SECTION);
    });

    let style = if *visible {
        "opacity: 1; pointer-events: auto;"
    } else {
        "opacity: 0; pointer-events: none;"
    };

    html! {
        <div class="floating-cta" {style}>
            <a href="#contact" class="floating-btn" {onclick}>
                <i class="fas fa-comments"></i>
                <span>{"Get a Quote"}</span>
            </a>
        </div>
    }
}
