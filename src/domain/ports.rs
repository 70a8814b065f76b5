use crate::domain::model::ValidationResult;

/// A validation strategy that can be bound to a field.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, raw: &str) -> ValidationResult;

    /// Absent values are validated as the empty string.
    fn validate_value(&self, raw: Option<&str>) -> ValidationResult {
        self.validate(raw.unwrap_or(""))
    }
}

impl<F> FieldValidator for F
where
    F: Fn(&str) -> ValidationResult + Send + Sync,
{
    fn validate(&self, raw: &str) -> ValidationResult {
        self(raw)
    }
}

/// The input control a binding reads from and decorates.
pub trait InputElement {
    fn value(&self) -> Option<String>;
    fn set_error_indicator(&mut self, on: bool);
    fn focus(&mut self);
}

/// Element next to the input where the failure message is rendered.
pub trait MessageElement {
    fn show(&mut self, message: &str);
    fn hide(&mut self);
}

/// The native submission event of the host form.
pub trait SubmitEvent {
    fn prevent_default(&mut self);
}

/// Blocking, alert-style notification to the user.
pub trait AlertSink {
    fn alert(&mut self, message: &str);
}
