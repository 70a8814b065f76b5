pub mod binding;
pub mod form;
pub mod identifier;
pub mod password;

pub use crate::domain::model::{CheckSymbol, FieldState, SubmitOutcome, ValidationResult};
pub use crate::domain::ports::{
    AlertSink, FieldValidator, InputElement, MessageElement, SubmitEvent,
};
pub use binding::{FieldBinding, GuardedField, NoMessage};
pub use form::{FieldReport, FormGuard, FormReport};
pub use identifier::{Identifier, IdentifierError, IdentifierValidator};
pub use password::{PasswordPolicyValidator, PasswordViolation};
