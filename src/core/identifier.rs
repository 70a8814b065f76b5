use crate::core::{CheckSymbol, FieldValidator, ValidationResult};
use std::fmt;
use thiserror::Error;

pub const INVALID_IDENTIFIER_MESSAGE: &str = "Invalid identifier";

/// Bounds on the normalized form: 6 to 8 body digits plus the check symbol.
pub const MIN_NORMALIZED_LEN: usize = 7;
pub const MAX_NORMALIZED_LEN: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("normalized length {0} is outside 7..=9")]
    Length(usize),

    #[error("body contains non-digit characters")]
    NonNumericBody,

    #[error("'{0}' is not a valid check symbol")]
    InvalidCheckSymbol(char),

    #[error("check symbol {found} does not match computed {expected}")]
    ChecksumMismatch {
        expected: CheckSymbol,
        found: CheckSymbol,
    },
}

/// A structurally valid identifier whose check symbol matches its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    body: String,
    check: CheckSymbol,
}

impl Identifier {
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        if raw.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let normalized = normalize(raw);
        let len = normalized.chars().count();
        if !(MIN_NORMALIZED_LEN..=MAX_NORMALIZED_LEN).contains(&len) {
            return Err(IdentifierError::Length(len));
        }

        let (body, check) = split_check(&normalized).ok_or(IdentifierError::Length(len))?;

        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdentifierError::NonNumericBody);
        }

        let found = CheckSymbol::from_char(check).ok_or(IdentifierError::InvalidCheckSymbol(check))?;
        let expected = compute_check_symbol(body).ok_or(IdentifierError::NonNumericBody)?;

        if expected != found {
            return Err(IdentifierError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            body: body.to_string(),
            check: found,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn check(&self) -> CheckSymbol {
        self.check
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", group_thousands(&self.body), self.check)
    }
}

/// Trims surrounding whitespace, drops `.` and `-`, and upper-cases.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .collect::<String>()
        .to_uppercase()
}

/// Modulus-11 check symbol of `body`, weights 2..=7 cycling from the right.
///
/// Returns `None` for an empty body or one containing anything but ASCII digits.
pub fn compute_check_symbol(body: &str) -> Option<CheckSymbol> {
    if body.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    let mut weight: u32 = 2;
    for c in body.chars().rev() {
        if !c.is_ascii_digit() {
            return None;
        }
        let digit = c.to_digit(10)?;
        // Reducing as we go keeps arbitrarily long bodies from overflowing.
        sum = (sum + digit * weight) % 11;
        weight += 1;
        if weight > 7 {
            weight = 2;
        }
    }

    CheckSymbol::from_computed(11 - sum % 11)
}

/// Renders `raw` as `12.345.678-5`. Never validates; input too short to hold
/// a body and a check symbol comes back unchanged.
pub fn format(raw: &str) -> String {
    let normalized = normalize(raw);
    match split_check(&normalized) {
        Some((body, check)) if !body.is_empty() => {
            format!("{}-{}", group_thousands(body), check)
        }
        _ => raw.to_string(),
    }
}

fn split_check(normalized: &str) -> Option<(&str, char)> {
    let mut chars = normalized.chars();
    let check = chars.next_back()?;
    Some((chars.as_str(), check))
}

fn group_thousands(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierValidator;

impl IdentifierValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, raw: &str) -> ValidationResult {
        match Identifier::parse(raw) {
            Ok(_) => ValidationResult::valid(),
            Err(e) => {
                tracing::debug!(reason = %e, "identifier rejected");
                ValidationResult::invalid(INVALID_IDENTIFIER_MESSAGE)
            }
        }
    }

    pub fn format(&self, raw: &str) -> String {
        format(raw)
    }
}

impl FieldValidator for IdentifierValidator {
    fn validate(&self, raw: &str) -> ValidationResult {
        IdentifierValidator::validate(self, raw)
    }
}
