use log::warn;
use web_sys::HtmlImageElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SiteImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Lazy-loaded image that hides itself instead of showing a broken icon.
#[function_component(SiteImage)]
pub fn site_image(props: &SiteImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        warn!("Failed to load image: {}", img.src());
        let _ = img.style().set_property("display", "none");
    });

    html! {
        <img src={props.src.clone()} alt={props.alt.clone()} class={props.class.clone()} loading="lazy" {onerror} />
    }
}
