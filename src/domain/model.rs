use serde::Serialize;
use std::fmt;

/// Outcome of running one validator over one value.
///
/// `message` is present if and only if the value is invalid; the fields are
/// private so the only way in is through [`ValidationResult::valid`] and
/// [`ValidationResult::invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Trailing symbol of an identifier, derived from a modulus-11 sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckSymbol {
    /// 1 through 9.
    Digit(u8),
    Zero,
    K,
}

impl CheckSymbol {
    /// Maps `11 - (sum % 11)` onto the symbol set. Values outside 1..=11 have
    /// no symbol.
    pub fn from_computed(computed: u32) -> Option<Self> {
        match computed {
            11 => Some(CheckSymbol::Zero),
            10 => Some(CheckSymbol::K),
            1..=9 => Some(CheckSymbol::Digit(computed as u8)),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(CheckSymbol::Zero),
            'K' | 'k' => Some(CheckSymbol::K),
            '1'..='9' => c.to_digit(10).map(|d| CheckSymbol::Digit(d as u8)),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CheckSymbol::Zero => '0',
            CheckSymbol::K => 'K',
            CheckSymbol::Digit(d) => char::from(b'0' + d),
        }
    }
}

impl fmt::Display for CheckSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    Empty,
    /// Bound but not yet triggered.
    Pending,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmitOutcome {
    Allowed,
    Blocked { message: String },
}

impl SubmitOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, SubmitOutcome::Allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_message_only_when_invalid() {
        let ok = ValidationResult::valid();
        assert!(ok.is_valid());
        assert_eq!(ok.message(), None);

        let bad = ValidationResult::invalid("Invalid identifier");
        assert!(!bad.is_valid());
        assert_eq!(bad.message(), Some("Invalid identifier"));
    }

    #[test]
    fn test_validation_result_json_shape() {
        let json = serde_json::to_value(ValidationResult::valid()).unwrap();
        assert_eq!(json, serde_json::json!({"valid": true, "message": null}));

        let json = serde_json::to_value(ValidationResult::invalid("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"valid": false, "message": "nope"}));
    }

    #[test]
    fn test_check_symbol_from_computed() {
        assert_eq!(CheckSymbol::from_computed(11), Some(CheckSymbol::Zero));
        assert_eq!(CheckSymbol::from_computed(10), Some(CheckSymbol::K));
        assert_eq!(CheckSymbol::from_computed(5), Some(CheckSymbol::Digit(5)));
        assert_eq!(CheckSymbol::from_computed(0), None);
        assert_eq!(CheckSymbol::from_computed(12), None);
    }

    #[test]
    fn test_check_symbol_chars() {
        assert_eq!(CheckSymbol::from_char('k'), Some(CheckSymbol::K));
        assert_eq!(CheckSymbol::from_char('0'), Some(CheckSymbol::Zero));
        assert_eq!(CheckSymbol::from_char('7'), Some(CheckSymbol::Digit(7)));
        assert_eq!(CheckSymbol::from_char('X'), None);
        assert_eq!(CheckSymbol::Digit(7).as_char(), '7');
        assert_eq!(CheckSymbol::K.to_string(), "K");
    }

    #[test]
    fn test_submit_outcome_json_shape() {
        let json = serde_json::to_value(SubmitOutcome::Blocked {
            message: "Invalid identifier".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outcome": "blocked", "message": "Invalid identifier"})
        );
    }
}
