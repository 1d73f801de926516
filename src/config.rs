/// How long a success/error banner stays on screen.
pub const MESSAGE_LIFETIME_MS: u32 = 5_000;

/// Label shown on the submit button while a request is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Scroll distance after which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD: f64 = 100.0;

/// Space left above a section when jumping to it, so the fixed navbar doesn't cover it.
pub const NAV_SCROLL_OFFSET: f64 = 80.0;

/// A section counts as current this many pixels before its top reaches the viewport top.
pub const ACTIVE_SECTION_LOOKAHEAD: f64 = 100.0;

/// Distance from the viewport bottom an element must clear before it animates in.
pub const REVEAL_MARGIN: f64 = 150.0;

/// The floating CTA hides once the viewport bottom is this far into the contact section.
pub const CTA_HIDE_MARGIN: f64 = 100.0;

pub const SCROLL_DEBOUNCE_MS: u32 = 10;

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or("http://localhost:3001/contact")  // Local mock receiver
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or("https://formspree.io/f/contact")  // Production form inbox
}
