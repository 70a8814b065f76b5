use crate::utils::error::{FormGuardError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormGuardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_not_empty_list<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(FormGuardError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(FormGuardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("forms.name", "login").is_ok());
        assert!(validate_non_empty_string("forms.name", "").is_err());
        assert!(validate_non_empty_string("forms.name", "   ").is_err());
    }

    #[test]
    fn test_validate_not_empty_list() {
        assert!(validate_not_empty_list("forms", &[1]).is_ok());
        assert!(matches!(
            validate_not_empty_list::<u8>("forms", &[]),
            Err(FormGuardError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_unique_names() {
        assert!(validate_unique_names("forms.fields", ["rut", "password"]).is_ok());

        let err = validate_unique_names("forms.fields", ["rut", "password", "rut"]).unwrap_err();
        match err {
            FormGuardError::InvalidConfigValueError { value, .. } => assert_eq!(value, "rut"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
