pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::form_config::{FormConfig, ValidatorKind};
pub use crate::core::{
    FieldBinding, FieldState, FieldValidator, FormGuard, GuardedField, IdentifierValidator,
    PasswordPolicyValidator, SubmitOutcome, ValidationResult,
};
pub use utils::error::{FormGuardError, Result};
