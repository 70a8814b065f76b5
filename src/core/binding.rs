use crate::core::{
    AlertSink, FieldState, FieldValidator, InputElement, MessageElement, SubmitEvent,
    SubmitOutcome,
};

/// Shown when a required field is empty and its validator accepts the empty string.
pub const REQUIRED_FIELD_MESSAGE: &str = "This field is required.";

/// Message element for bindings that render feedback through the indicator only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMessage;

impl MessageElement for NoMessage {
    fn show(&mut self, _message: &str) {}

    fn hide(&mut self) {}
}

/// A field the form can gate on. Object safe so one form can hold bindings
/// over different element and validator types.
pub trait GuardedField {
    fn name(&self) -> &str;
    fn state(&self) -> FieldState;
    fn on_input(&mut self) -> FieldState;
    fn on_blur(&mut self) -> FieldState;

    /// Re-validates for submission and renders the verdict. Returns the
    /// message that should block the submission, if any.
    fn submit_check(&mut self) -> Result<(), String>;

    fn focus(&mut self);
}

/// One validator bound to one input and its optional message element.
///
/// Triggers never consult a previous verdict: each re-reads the input and
/// re-runs the validator. `state` only reports the last outcome.
pub struct FieldBinding<I, M, V> {
    name: String,
    input: I,
    message: Option<M>,
    validator: V,
    required: bool,
    state: FieldState,
}

impl<I, V> FieldBinding<I, NoMessage, V>
where
    I: InputElement,
    V: FieldValidator,
{
    pub fn without_message(name: impl Into<String>, input: I, validator: V) -> Self {
        FieldBinding::new(name, input, None, validator)
    }
}

impl<I, M, V> FieldBinding<I, M, V>
where
    I: InputElement,
    M: MessageElement,
    V: FieldValidator,
{
    pub fn new(name: impl Into<String>, input: I, message: Option<M>, validator: V) -> Self {
        Self {
            name: name.into(),
            input,
            message,
            validator,
            required: false,
            state: FieldState::Pending,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Gates a single-field form. On failure the event is cancelled, the
    /// message is raised through `alerts`, and focus returns to the input.
    pub fn on_submit(
        &mut self,
        event: &mut dyn SubmitEvent,
        alerts: &mut dyn AlertSink,
    ) -> SubmitOutcome {
        match self.submit_check() {
            Ok(()) => SubmitOutcome::Allowed,
            Err(message) => {
                tracing::warn!(field = %self.name, "submission blocked");
                event.prevent_default();
                alerts.alert(&message);
                self.input.focus();
                SubmitOutcome::Blocked { message }
            }
        }
    }

    fn refresh(&mut self, trigger: &'static str) -> (FieldState, Option<String>) {
        let value = self.input.value().unwrap_or_default();

        // Only a cleared field is Empty; whitespace is a value the validator judges.
        let (state, failure) = if value.is_empty() {
            self.clear_feedback();
            (FieldState::Empty, None)
        } else {
            let result = self.validator.validate(&value);
            match result.message() {
                None => {
                    self.clear_feedback();
                    (FieldState::Valid, None)
                }
                Some(message) => {
                    self.show_feedback(message);
                    (FieldState::Invalid, Some(message.to_string()))
                }
            }
        };

        self.state = state;
        tracing::debug!(field = %self.name, ?state, trigger, "field validated");
        (state, failure)
    }

    fn clear_feedback(&mut self) {
        self.input.set_error_indicator(false);
        if let Some(message) = self.message.as_mut() {
            message.hide();
        }
    }

    fn show_feedback(&mut self, text: &str) {
        self.input.set_error_indicator(true);
        if let Some(message) = self.message.as_mut() {
            message.show(text);
        }
    }
}

impl<I, M, V> GuardedField for FieldBinding<I, M, V>
where
    I: InputElement,
    M: MessageElement,
    V: FieldValidator,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn state(&self) -> FieldState {
        self.state
    }

    fn on_input(&mut self) -> FieldState {
        self.refresh("input").0
    }

    fn on_blur(&mut self) -> FieldState {
        self.refresh("blur").0
    }

    fn submit_check(&mut self) -> Result<(), String> {
        match self.refresh("submit") {
            (FieldState::Empty, _) if self.required => {
                let message = self
                    .validator
                    .validate("")
                    .message()
                    .unwrap_or(REQUIRED_FIELD_MESSAGE)
                    .to_string();
                self.show_feedback(&message);
                self.state = FieldState::Invalid;
                Err(message)
            }
            (FieldState::Invalid, failure) => {
                Err(failure.unwrap_or_else(|| REQUIRED_FIELD_MESSAGE.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn focus(&mut self) {
        self.input.focus();
    }
}
