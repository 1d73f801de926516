use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::message::{FormMessage, Severity};
use super::session::{Field, FormSession};
use super::transport::{submit, FormTransport, HttpTransport, SubmitError};
use super::validation::FieldKind;
use crate::config;

const SERVICE_OPTIONS: &[&str] = &["Web Design", "Branding", "Marketing", "Consulting"];

/// Events the form reacts to. Blur validates one field, input only clears its error,
/// and submit validates everything before anything is sent.
pub enum ContactMsg {
    Input(usize, String),
    Blur(usize),
    Submit,
    Submitted(Result<u16, SubmitError>),
    ExpireMessage(u64),
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: AttrValue,
    #[prop_or(AttrValue::Static("Send Message"))]
    pub submit_label: AttrValue,
}

pub struct ContactForm {
    session: FormSession,
    transport: Rc<dyn FormTransport>,
    message_timer: Option<Timeout>,
    message_ref: NodeRef,
    scroll_to_message: bool,
}

fn contact_fields() -> Vec<Field> {
    vec![
        Field::new("name", "Full Name", FieldKind::Text, true),
        Field::new("email", "Email Address", FieldKind::Email, true),
        Field::new("phone", "Phone Number", FieldKind::Tel, false),
        Field::new("service", "Service Interested In", FieldKind::Select, true),
        Field::new("message", "Message", FieldKind::Textarea, true),
    ]
}

impl Component for ContactForm {
    type Message = ContactMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        debug!("contact form attached, posting to {}", ctx.props().endpoint);
        Self {
            session: FormSession::new(contact_fields(), ctx.props().submit_label.to_string()),
            transport: Rc::new(HttpTransport),
            message_timer: None,
            message_ref: NodeRef::default(),
            scroll_to_message: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Input(index, value) => {
                self.session.edit(index, value);
                true
            }
            ContactMsg::Blur(index) => {
                self.session.validate_field(index);
                true
            }
            ContactMsg::Submit => {
                let Some(payload) = self.session.request_submission() else {
                    return true;
                };

                let transport = self.transport.clone();
                let endpoint = ctx.props().endpoint.to_string();
                ctx.link().send_future(async move {
                    ContactMsg::Submitted(submit(transport.as_ref(), &endpoint, &payload).await)
                });
                true
            }
            ContactMsg::Submitted(result) => {
                let id = self.session.complete_submission(result);
                self.scroll_to_message = self
                    .session
                    .message()
                    .map_or(false, |m| m.severity == Severity::Success);

                // Replacing the handle cancels the superseded banner's timer.
                let link = ctx.link().clone();
                self.message_timer = Some(Timeout::new(config::MESSAGE_LIFETIME_MS, move || {
                    link.send_message(ContactMsg::ExpireMessage(id));
                }));
                true
            }
            ContactMsg::ExpireMessage(id) => {
                if self.session.expire_message(id) {
                    self.message_timer = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.scroll_to_message) {
            return;
        }
        match self.message_ref.cast::<web_sys::Element>() {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            None => warn!("success banner not mounted, skipping scroll"),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.message_timer = None;
        debug!("contact form detached");
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let control = self.session.submit_control();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <>
                if let Some(message) = self.session.message() {
                    <FormMessage message={message.clone()} node_ref={self.message_ref.clone()} />
                }
                <form
                    id="contactForm"
                    class={classes!("contact-form", control.loading.then_some("loading"))}
                    action={ctx.props().endpoint.clone()}
                    method="POST"
                    novalidate={true}
                    {onsubmit}
                >
                    { for self.session.fields().iter().enumerate().map(|(index, field)| self.render_field(ctx, index, field)) }
                    <button type="submit" class="submit-btn" disabled={control.disabled}>
                        { control.label }
                    </button>
                </form>
            </>
        }
    }
}

impl ContactForm {
    fn render_field(&self, ctx: &Context<Self>, index: usize, field: &Field) -> Html {
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactMsg::Blur(index));
        let id = format!("contact-{}", field.name);

        let control = match field.kind {
            FieldKind::Select => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    ContactMsg::Input(index, select.value())
                });
                html! {
                    <select id={id.clone()} name={field.name} required={field.required} {onblur} {onchange}>
                        <option value="" selected={field.value.is_empty()}>{"Select a service"}</option>
                        { for SERVICE_OPTIONS.iter().map(|option| html! {
                            <option value={*option} selected={field.value == *option}>{ *option }</option>
                        }) }
                    </select>
                }
            }
            FieldKind::Textarea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    ContactMsg::Input(index, area.value())
                });
                html! {
                    <textarea id={id.clone()} name={field.name} rows="5" required={field.required}
                        value={field.value.clone()} {onblur} {oninput} />
                }
            }
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    ContactMsg::Input(index, input.value())
                });
                html! {
                    <input id={id.clone()} type={field.kind.input_type()} name={field.name} required={field.required}
                        value={field.value.clone()} {onblur} {oninput} />
                }
            }
        };

        html! {
            <div class={classes!("form-group", field.is_valid().then_some("success"), field.is_invalid().then_some("error"))}>
                <label for={id}>{ field.label }</label>
                { control }
                if let Some(error) = field.error_text() {
                    <div class="error-message">{ error }</div>
                }
            </div>
        }
    }
}
