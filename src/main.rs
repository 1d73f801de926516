use yew::prelude::*;
use log::{info, Level};

mod config;
mod scroll;
mod contact {
    pub mod validation;
    pub mod message;
    pub mod transport;
    pub mod session;
    pub mod form;
}
mod components {
    pub mod navbar;
    pub mod floating_cta;
    pub mod page_effects;
    pub mod site_image;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting site, contact form posts to {}", config::get_form_endpoint());
    yew::Renderer::<App>::new().render();
}
