use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::scroll::{self, use_window_scroll};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("features", "About"),
    ("services", "Services"),
    ("portfolio", "Work"),
    ("testimonials", "Clients"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        use_window_scroll(move || is_scrolled.set(scroll::is_scrolled(scroll::scroll_y())), 0);
    }

    {
        let active = active.clone();
        use_window_scroll(
            move || {
                let sections = scroll::section_bounds();
                active.set(scroll::active_section(scroll::scroll_y(), &sections).map(str::to_string));
            },
            config::SCROLL_DEBOUNCE_MS,
        );
    }

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">{ props.brand.clone() }</a>
                <ul class="nav-menu">
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let onclick = {
                            let active = active.clone();
                            let id = id.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                if scroll::scroll_to_section(&id) {
                                    debug!("navigating to #{}", id);
                                    active.set(Some(id.clone()));
                                }
                            })
                        };
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <li class="nav-item">
                                <a href={format!("#{}", id)} class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
                                    { *label }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
