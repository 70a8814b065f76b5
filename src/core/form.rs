use crate::core::binding::GuardedField;
use crate::core::{AlertSink, FieldState, SubmitEvent, SubmitOutcome};
use serde::Serialize;

/// State of one field after a form-level submit. `message` is set for every
/// field that failed its submit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub name: String,
    pub state: FieldState,
    pub message: Option<String>,
}

/// Result of [`FormGuard::on_submit`]. Serializes with the outcome flattened
/// next to the form name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub form: String,
    #[serde(flatten)]
    pub outcome: SubmitOutcome,
    pub fields: Vec<FieldReport>,
}

/// Gates the submission of one form across all of its bound fields.
pub struct FormGuard {
    name: String,
    fields: Vec<Box<dyn GuardedField>>,
}

impl FormGuard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Builder form of [`FormGuard::add_field`].
    pub fn with_field<F: GuardedField + 'static>(mut self, field: F) -> Self {
        self.add_field(field);
        self
    }

    /// Appends a field. Fields are validated, and focused on failure, in
    /// the order they were added.
    pub fn add_field<F: GuardedField + 'static>(&mut self, field: F) -> &mut Self {
        self.fields.push(Box::new(field));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The first field registered under `name`, for per-field triggers.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut (dyn GuardedField + 'static)> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .map(|f| f.as_mut())
    }

    /// Re-validates every field so each one renders feedback. If any fail the
    /// event is cancelled once, the first failure is alerted, and focus goes to
    /// the first failing field.
    pub fn on_submit(
        &mut self,
        event: &mut dyn SubmitEvent,
        alerts: &mut dyn AlertSink,
    ) -> FormReport {
        let mut reports = Vec::with_capacity(self.fields.len());
        let mut first_failure: Option<(usize, String)> = None;

        for (index, field) in self.fields.iter_mut().enumerate() {
            let message = field.submit_check().err();
            if first_failure.is_none() {
                if let Some(msg) = &message {
                    first_failure = Some((index, msg.clone()));
                }
            }
            reports.push(FieldReport {
                name: field.name().to_string(),
                state: field.state(),
                message,
            });
        }

        let outcome = match first_failure {
            Some((index, message)) => {
                tracing::warn!(
                    form = %self.name,
                    field = %reports[index].name,
                    "submission blocked"
                );
                event.prevent_default();
                alerts.alert(&message);
                self.fields[index].focus();
                SubmitOutcome::Blocked { message }
            }
            None => {
                tracing::info!(form = %self.name, fields = self.fields.len(), "submission allowed");
                SubmitOutcome::Allowed
            }
        };

        FormReport {
            form: self.name.clone(),
            outcome,
            fields: reports,
        }
    }
}
