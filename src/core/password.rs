use crate::core::{FieldValidator, ValidationResult};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// First policy rule a password breaks. Rules are checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordViolation {
    #[error("Password must not be empty.")]
    Empty,

    #[error("Password must be at least 8 characters.")]
    TooShort,

    #[error("Password must contain at least one letter.")]
    MissingLetter,

    #[error("Password must contain at least one number.")]
    MissingNumber,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordPolicyValidator;

impl PasswordPolicyValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, raw: &str) -> Result<(), PasswordViolation> {
        if raw.is_empty() {
            return Err(PasswordViolation::Empty);
        }

        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordViolation::TooShort);
        }

        if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PasswordViolation::MissingLetter);
        }

        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordViolation::MissingNumber);
        }

        Ok(())
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        match self.check(raw) {
            Ok(()) => ValidationResult::valid(),
            Err(violation) => {
                tracing::debug!(?violation, "password rejected");
                ValidationResult::invalid(violation.to_string())
            }
        }
    }
}

impl FieldValidator for PasswordPolicyValidator {
    fn validate(&self, raw: &str) -> ValidationResult {
        PasswordPolicyValidator::validate(self, raw)
    }
}
