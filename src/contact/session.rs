use log::{debug, info, warn};

use super::message::{MessageSlot, Severity, TransientMessage, FAILURE_TEXT, SUCCESS_TEXT};
use super::transport::SubmitError;
use super::validation::{validate_value, FieldError, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationState {
    #[default]
    Neutral,
    Valid,
    Invalid(FieldError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub state: ValidationState,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
            state: ValidationState::Neutral,
        }
    }

    /// The inline error text. Present exactly when the field is invalid.
    pub fn error_text(&self) -> Option<String> {
        match self.state {
            ValidationState::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self.state, ValidationState::Invalid(_))
    }

    pub fn is_valid(&self) -> bool {
        self.state == ValidationState::Valid
    }

    fn reset(&mut self) {
        self.value.clear();
        self.state = ValidationState::Neutral;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the submit button and form wrapper should look like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
}

/// Name/value pairs captured when a submission starts.
pub type FormPayload = Vec<(String, String)>;

/// All contact-form state that doesn't need a browser.
#[derive(Debug)]
pub struct FormSession {
    fields: Vec<Field>,
    submission: SubmissionState,
    message: MessageSlot,
    submit_label: String,
}

impl FormSession {
    pub fn new(fields: Vec<Field>, submit_label: impl Into<String>) -> Self {
        Self {
            fields,
            submission: SubmissionState::Idle,
            message: MessageSlot::default(),
            submit_label: submit_label.into(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[cfg(test)]
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    #[cfg(test)]
    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    pub fn message(&self) -> Option<&TransientMessage> {
        self.message.current()
    }

    pub fn submit_control(&self) -> SubmitControl {
        let submitting = self.submission == SubmissionState::Submitting;
        SubmitControl {
            label: if submitting { crate::config::SENDING_LABEL.to_string() } else { self.submit_label.clone() },
            disabled: submitting,
            loading: submitting,
        }
    }

    /// Records an edit. Clears any displayed error but does not re-validate.
    pub fn edit(&mut self, index: usize, value: String) {
        let Some(field) = self.fields.get_mut(index) else {
            warn!("edit for unknown field index {}", index);
            return;
        };
        field.value = value;
        self.clear_field_error(index);

        if matches!(self.submission, SubmissionState::Succeeded | SubmissionState::Failed) {
            self.submission = SubmissionState::Idle;
        }
    }

    /// Drops the error mark from a field. A valid or neutral field is left as is.
    pub fn clear_field_error(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            if field.is_invalid() {
                field.state = ValidationState::Neutral;
            }
        }
    }

    pub fn validate_field(&mut self, index: usize) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return false;
        };
        match validate_value(field.kind, field.required, &field.value) {
            Ok(()) => {
                field.state = ValidationState::Valid;
                true
            }
            Err(err) => {
                debug!("field {} rejected: {}", field.name, err);
                field.state = ValidationState::Invalid(err);
                false
            }
        }
    }

    /// Validates every field, even after the first failure, so all errors show at once.
    pub fn validate_all(&mut self) -> bool {
        (0..self.fields.len()).fold(true, |all_valid, index| self.validate_field(index) && all_valid)
    }

    /// The submit gate: ignored while a request is in flight, otherwise every field is
    /// validated and the payload is only handed out when all of them pass.
    pub fn request_submission(&mut self) -> Option<FormPayload> {
        if self.submission == SubmissionState::Submitting {
            debug!("submit ignored while a request is in flight");
            return None;
        }
        if !self.validate_all() {
            debug!("submit blocked by invalid fields");
            return None;
        }
        self.begin_submission()
    }

    /// Moves to `Submitting` and hands back the payload to send.
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submission(&mut self) -> Option<FormPayload> {
        if self.submission == SubmissionState::Submitting {
            warn!("submit ignored, a submission is already in flight");
            return None;
        }
        self.submission = SubmissionState::Submitting;
        info!("submitting contact form");
        Some(
            self.fields
                .iter()
                .map(|field| (field.name.to_string(), field.value.clone()))
                .collect(),
        )
    }

    /// Applies the result of a submission and returns the id of the banner it produced.
    pub fn complete_submission(&mut self, result: Result<u16, SubmitError>) -> u64 {
        if self.submission != SubmissionState::Submitting {
            warn!("submission result arrived while {:?}", self.submission);
        }

        match result {
            Ok(status) => {
                info!("contact form accepted with status {}", status);
                self.fields.iter_mut().for_each(Field::reset);
                self.submission = SubmissionState::Succeeded;
                self.message.show(Severity::Success, SUCCESS_TEXT)
            }
            Err(err) => {
                warn!("contact form submission failed: {}", err);
                self.submission = SubmissionState::Failed;
                self.message.show(Severity::Error, FAILURE_TEXT)
            }
        }
    }

    /// Called when a banner's lifetime runs out.
    pub fn expire_message(&mut self, id: u64) -> bool {
        if !self.message.expire(id) {
            return false;
        }
        if matches!(self.submission, SubmissionState::Succeeded | SubmissionState::Failed) {
            self.submission = SubmissionState::Idle;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_session() -> FormSession {
        FormSession::new(
            vec![
                Field::new("name", "Full Name", FieldKind::Text, true),
                Field::new("email", "Email Address", FieldKind::Email, true),
                Field::new("phone", "Phone Number", FieldKind::Tel, false),
                Field::new("message", "Message", FieldKind::Textarea, true),
            ],
            "Send Message",
        )
    }

    fn filled_session() -> FormSession {
        let mut session = contact_session();
        session.edit(0, "Jane Doe".into());
        session.edit(1, "jane@example.com".into());
        session.edit(2, "+1 (555) 123-4567".into());
        session.edit(3, "Hello there".into());
        session
    }

    mod field_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_invalid_field_carries_error_text() {
            let mut session = contact_session();
            session.edit(1, "nope".into());

            assert!(!session.validate_field(1));
            let field = session.field(1).unwrap();
            assert!(field.is_invalid());
            assert_eq!(field.error_text().as_deref(), Some("Please enter a valid email address"));
        }

        #[test]
        fn test_valid_field_is_marked_successful() {
            let mut session = contact_session();
            session.edit(0, "Jane".into());

            assert!(session.validate_field(0));
            assert!(session.field(0).unwrap().is_valid());
            assert_eq!(session.field(0).unwrap().error_text(), None);
        }

        #[test]
        fn test_revalidation_replaces_previous_error() {
            let mut session = contact_session();
            session.validate_field(1);
            assert_eq!(session.field(1).unwrap().state, ValidationState::Invalid(FieldError::Required));

            session.edit(1, "bad".into());
            session.validate_field(1);
            assert_eq!(session.field(1).unwrap().state, ValidationState::Invalid(FieldError::InvalidEmail));
        }

        #[test]
        fn test_unknown_index_is_rejected() {
            let mut session = contact_session();
            assert!(!session.validate_field(42));
        }
    }

    mod clearing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_clears_error_without_revalidating() {
            let mut session = contact_session();
            session.validate_field(0);
            assert!(session.field(0).unwrap().is_invalid());

            session.edit(0, "J".into());
            assert_eq!(session.field(0).unwrap().state, ValidationState::Neutral);
        }

        #[test]
        fn test_edit_leaves_success_mark() {
            let mut session = contact_session();
            session.edit(0, "Jane".into());
            session.validate_field(0);

            session.edit(0, "".into());
            assert_eq!(session.field(0).unwrap().state, ValidationState::Valid);
        }

        #[test]
        fn test_clear_is_idempotent() {
            let mut session = contact_session();
            session.validate_field(0);
            session.clear_field_error(0);
            let once = session.fields().to_vec();

            session.clear_field_error(0);
            session.clear_field_error(99);
            assert_eq!(session.fields(), once.as_slice());
        }
    }

    mod submit_gate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_all_checks_every_field() {
            let mut session = contact_session();
            session.edit(1, "bad".into());

            assert!(!session.validate_all());
            let states: Vec<_> = session.fields().iter().map(|f| f.state).collect();
            assert_eq!(
                states,
                vec![
                    ValidationState::Invalid(FieldError::Required),
                    ValidationState::Invalid(FieldError::InvalidEmail),
                    ValidationState::Valid,
                    ValidationState::Invalid(FieldError::Required),
                ]
            );
        }

        #[test]
        fn test_validate_all_passes_for_filled_form() {
            let mut session = filled_session();
            assert!(session.validate_all());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_captures_payload_and_locks_control() {
            let mut session = filled_session();
            let payload = session.begin_submission().unwrap();

            assert_eq!(payload[0], ("name".to_string(), "Jane Doe".to_string()));
            assert_eq!(payload.len(), 4);
            assert_eq!(session.submission_state(), SubmissionState::Submitting);
            assert_eq!(
                session.submit_control(),
                SubmitControl { label: "Sending...".into(), disabled: true, loading: true }
            );
        }

        #[test]
        fn test_second_begin_while_in_flight_is_refused() {
            let mut session = filled_session();
            assert!(session.begin_submission().is_some());
            assert!(session.begin_submission().is_none());
            assert_eq!(session.submission_state(), SubmissionState::Submitting);
        }

        #[test]
        fn test_success_resets_fields_and_restores_control() {
            let mut session = filled_session();
            session.validate_all();
            session.begin_submission();
            let id = session.complete_submission(Ok(200));

            assert_eq!(session.submission_state(), SubmissionState::Succeeded);
            assert!(session.fields().iter().all(|f| f.value.is_empty() && f.state == ValidationState::Neutral));
            let message = session.message().unwrap();
            assert_eq!((message.id, message.severity), (id, Severity::Success));
            assert_eq!(
                session.submit_control(),
                SubmitControl { label: "Send Message".into(), disabled: false, loading: false }
            );
        }

        #[test]
        fn test_failure_keeps_values_and_restores_control() {
            let mut session = filled_session();
            session.begin_submission();
            session.complete_submission(Err(SubmitError::Status(500)));

            assert_eq!(session.submission_state(), SubmissionState::Failed);
            assert_eq!(session.field(0).unwrap().value, "Jane Doe");
            assert_eq!(session.message().unwrap().text, FAILURE_TEXT);
            assert!(!session.submit_control().disabled);
        }

        #[test]
        fn test_expiry_returns_to_idle() {
            let mut session = filled_session();
            session.begin_submission();
            let id = session.complete_submission(Err(SubmitError::Transport("offline".into())));

            assert!(session.expire_message(id));
            assert!(session.message().is_none());
            assert_eq!(session.submission_state(), SubmissionState::Idle);
        }

        #[test]
        fn test_edit_after_outcome_returns_to_idle() {
            let mut session = filled_session();
            session.begin_submission();
            session.complete_submission(Err(SubmitError::Status(503)));

            session.edit(0, "Janet".into());
            assert_eq!(session.submission_state(), SubmissionState::Idle);
            assert!(session.message().is_some());
        }

        #[test]
        fn test_stale_expiry_does_not_touch_newer_submission() {
            let mut session = filled_session();
            session.begin_submission();
            let old = session.complete_submission(Err(SubmitError::Status(500)));
            session.begin_submission();

            assert!(session.expire_message(old));
            assert_eq!(session.submission_state(), SubmissionState::Submitting);
        }
    }

    mod submit_flow {
        use super::*;
        use crate::contact::message::FAILURE_TEXT;
        use crate::contact::transport::{submit, RecordingTransport};
        use futures::executor::block_on;
        use pretty_assertions::assert_eq;

        const ENDPOINT: &str = "https://forms.example/f/contact";

        /// Same sequence `ContactForm` runs for a submit event.
        fn submit_once(session: &mut FormSession, transport: &RecordingTransport) -> Option<u64> {
            let payload = session.request_submission()?;
            let result = block_on(submit(transport, ENDPOINT, &payload));
            Some(session.complete_submission(result))
        }

        #[test]
        fn test_blank_required_field_sends_nothing() {
            let mut session = filled_session();
            session.edit(0, "   ".into());
            let transport = RecordingTransport::replying(Ok(200));

            assert_eq!(submit_once(&mut session, &transport), None);
            assert_eq!(transport.call_count(), 0);
            assert_eq!(session.field(0).unwrap().error_text().as_deref(), Some("This field is required"));
            assert_eq!(session.submission_state(), SubmissionState::Idle);
        }

        #[test]
        fn test_second_submit_while_in_flight_sends_once() {
            let mut session = filled_session();
            let transport = RecordingTransport::replying(Ok(200));

            let first = session.request_submission().unwrap();
            assert_eq!(session.request_submission(), None);

            let result = block_on(submit(&transport, ENDPOINT, &first));
            session.complete_submission(result);
            assert_eq!(transport.call_count(), 1);
            assert_eq!(session.submission_state(), SubmissionState::Succeeded);
        }

        #[test]
        fn test_success_resets_form() {
            let mut session = filled_session();
            let transport = RecordingTransport::replying(Ok(200));

            assert!(submit_once(&mut session, &transport).is_some());
            assert_eq!(transport.call_count(), 1);
            assert!(session.fields().iter().all(|f| f.value.is_empty()));
            assert_eq!(session.message().unwrap().severity, Severity::Success);
            assert_eq!(session.submit_control().label, "Send Message");
        }

        #[test]
        fn test_server_error_keeps_entered_values() {
            let mut session = filled_session();
            let before: Vec<String> = session.fields().iter().map(|f| f.value.clone()).collect();
            let transport = RecordingTransport::replying(Ok(500));

            assert!(submit_once(&mut session, &transport).is_some());
            let after: Vec<String> = session.fields().iter().map(|f| f.value.clone()).collect();
            assert_eq!(after, before);
            assert_eq!(session.submission_state(), SubmissionState::Failed);
            assert_eq!(session.message().unwrap().text, FAILURE_TEXT);
            assert!(!session.submit_control().disabled);
        }

        #[test]
        fn test_resubmit_after_failure_sends_again() {
            let mut session = filled_session();
            let transport = RecordingTransport::replying(Err(SubmitError::Transport("offline".into())));

            submit_once(&mut session, &transport);
            submit_once(&mut session, &transport);
            assert_eq!(transport.call_count(), 2);
        }
    }
}
