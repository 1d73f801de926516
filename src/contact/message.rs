use yew::prelude::*;

pub const SUCCESS_TEXT: &str = "Thank you! Your message has been sent successfully. We'll get back to you soon.";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }
}

/// Auto-dismissing banner shown above the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
}

/// Holds at most one banner. Showing a new one replaces the old one immediately.
#[derive(Debug, Default)]
pub struct MessageSlot {
    current: Option<TransientMessage>,
    next_id: u64,
}

impl MessageSlot {
    /// Replaces whatever is showing and returns the new banner's id.
    pub fn show(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(TransientMessage {
            id: self.next_id,
            severity,
            text: text.into(),
        });
        self.next_id
    }

    /// Removes the banner if it is still the one with `id`. Returns whether anything was removed.
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(message) if message.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub message: TransientMessage,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    let severity = props.message.severity;
    html! {
        // Keyed by id so a superseding banner replays its entry animation.
        <div key={props.message.id.to_string()} ref={props.node_ref.clone()} class={classes!("form-message", severity.class())}>
            <i class={severity.icon()}></i>
            <p>{ &props.message.text }</p>
        </div>
    }
}
