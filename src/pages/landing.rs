use yew::prelude::*;

use crate::components::floating_cta::FloatingCta;
use crate::components::navbar::Navbar;
use crate::components::page_effects::{use_reveal_on_scroll, use_skip_to_main};
use crate::components::site_image::SiteImage;
use crate::config;
use crate::contact::form::ContactForm;

const BRAND: &str = "Brightline Studio";

const FEATURES: &[(&str, &str, &str)] = &[
    ("fas fa-bolt", "Fast Turnaround", "Most projects launch within four weeks of kickoff."),
    ("fas fa-mobile-alt", "Mobile First", "Every page is designed for the phone in your pocket first."),
    ("fas fa-handshake", "One Point of Contact", "You talk to the people doing the work, not a sales team."),
];

const SERVICES: &[(&str, &str, &str)] = &[
    ("fas fa-pencil-ruler", "Web Design", "Custom sites that load fast and turn visitors into customers."),
    ("fas fa-palette", "Branding", "Logos, colour systems and voice guides that hold together."),
    ("fas fa-bullhorn", "Marketing", "Campaigns and landing pages measured against real goals."),
    ("fas fa-comments", "Consulting", "A second pair of eyes on your product, funnel or roadmap."),
];

const PORTFOLIO: &[(&str, &str, &str)] = &[
    ("/assets/portfolio-bakery.jpg", "Harbor Bakery", "Branding & ordering site"),
    ("/assets/portfolio-clinic.jpg", "Northside Physio", "Booking flow redesign"),
    ("/assets/portfolio-brewery.jpg", "Kettle Hill Brewing", "Launch campaign"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Bookings doubled in the first month after the redesign.", "Maria K., Northside Physio"),
    ("They understood what we wanted before we did.", "Tom R., Harbor Bakery"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal_on_scroll();
    use_skip_to_main();

    html! {
        <>
            <style>
                {r#"
                    .form-message {
                        padding: 1rem;
                        border-radius: 10px;
                        margin-bottom: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        animation: slideInDown 0.5s ease-out;
                    }
                    .form-message.success {
                        background: rgba(39, 174, 96, 0.1);
                        border: 1px solid #27ae60;
                        color: #27ae60;
                    }
                    .form-message.error {
                        background: rgba(231, 76, 60, 0.1);
                        border: 1px solid #e74c3c;
                        color: #e74c3c;
                    }
                    .form-message i {
                        font-size: 1.5rem;
                    }
                    .form-message p {
                        margin: 0;
                        color: inherit;
                    }
                    @keyframes slideInDown {
                        from { opacity: 0; transform: translateY(-30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .animate {
                        animation: fadeInUp 0.6s ease-out forwards;
                    }
                    .form-group.error input,
                    .form-group.error select,
                    .form-group.error textarea {
                        border-color: #e74c3c;
                    }
                    .form-group.success input,
                    .form-group.success select,
                    .form-group.success textarea {
                        border-color: #27ae60;
                    }
                    .error-message {
                        color: #e74c3c;
                        font-size: 0.85rem;
                        margin-top: 0.25rem;
                    }
                    .contact-form.loading {
                        opacity: 0.7;
                        pointer-events: none;
                    }
                    .floating-cta {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        transition: opacity 0.3s ease;
                        z-index: 100;
                    }
                "#}
            </style>
            <Navbar brand={BRAND} />
            <main tabindex="-1">
                <section id="home" class="hero">
                    <div class="hero-content">
                        <h1>{"Websites that work as hard as you do"}</h1>
                        <p class="hero-subtitle">
                            {"A small studio building brands, sites and campaigns for local businesses."}
                        </p>
                        <a href="#contact" class="hero-cta">{"Start a Project"}</a>
                    </div>
                </section>

                <section id="features" class="features">
                    <h2>{"Why work with us"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <div class="feature-item">
                                <i class={*icon}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="services" class="services">
                    <h2>{"Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <div class="service-card">
                                <i class={*icon}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="portfolio" class="portfolio">
                    <h2>{"Recent Work"}</h2>
                    <div class="portfolio-grid">
                        { for PORTFOLIO.iter().map(|(src, title, caption)| html! {
                            <div class="portfolio-item">
                                <SiteImage src={*src} alt={*title} />
                                <div class="portfolio-overlay">
                                    <h3>{ *title }</h3>
                                    <p>{ *caption }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="testimonials" class="testimonials">
                    <h2>{"What clients say"}</h2>
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <div class="testimonial-card">
                            <p class="quote">{ *quote }</p>
                            <span class="author">{ *author }</span>
                        </div>
                    }) }
                </section>

                <section id="contact" class="contact">
                    <h2>{"Get in touch"}</h2>
                    <p>{"Tell us about your project and we'll reply within one business day."}</p>
                    <div class="contact-form-container">
                        <ContactForm endpoint={config::get_form_endpoint()} />
                    </div>
                </section>
            </main>
            <footer class="footer">
                <p>{ format!("© {}", BRAND) }</p>
            </footer>
            <FloatingCta />
        </>
    }
}
