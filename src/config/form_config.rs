use crate::adapters::memory::MemoryInput;
use crate::core::{
    FieldBinding, FieldValidator, FormGuard, IdentifierValidator, PasswordPolicyValidator,
    ValidationResult,
};
use crate::utils::error::{FormGuardError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_not_empty_list, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Top-level TOML document: a list of `[[forms]]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub forms: Vec<FormDefinition>,
}

/// One form and the fields bound on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

/// A field and the validator it is bound to. Fields are optional unless
/// `required = true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub validator: ValidatorKind,
    #[serde(default)]
    pub required: bool,
}

/// Validator named by `validator = "..."` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    Identifier,
    Password,
}

impl FieldValidator for ValidatorKind {
    fn validate(&self, raw: &str) -> ValidationResult {
        match self {
            ValidatorKind::Identifier => IdentifierValidator::new().validate(raw),
            ValidatorKind::Password => PasswordPolicyValidator::new().validate(raw),
        }
    }
}

impl FormConfig {
    /// Loads a form configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a form configuration, substituting `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR_NAME}` with the environment value.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormGuardError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            // unset variables are left as written
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks that forms exist, names are non-empty, and names are unique
    /// (form names globally, field names within each form).
    pub fn validate_config(&self) -> Result<()> {
        validate_not_empty_list("forms", &self.forms)?;
        validate_unique_names("forms.name", self.forms.iter().map(|f| f.name.as_str()))?;

        for form in &self.forms {
            validate_non_empty_string("forms.name", &form.name)?;
            validate_not_empty_list(&format!("forms.{}.fields", form.name), &form.fields)?;
            validate_unique_names(
                &format!("forms.{}.fields.name", form.name),
                form.fields.iter().map(|f| f.name.as_str()),
            )?;
            for field in &form.fields {
                validate_non_empty_string(&format!("forms.{}.fields.name", form.name), &field.name)?;
            }
        }

        Ok(())
    }

    /// The named form, or the first one when `name` is `None`.
    pub fn form(&self, name: Option<&str>) -> Result<&FormDefinition> {
        match name {
            Some(name) => self
                .forms
                .iter()
                .find(|f| f.name == name)
                .ok_or_else(|| FormGuardError::UnknownForm {
                    name: name.to_string(),
                }),
            None => self.forms.first().ok_or_else(|| FormGuardError::MissingConfigError {
                field: "forms".to_string(),
            }),
        }
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl FormDefinition {
    /// Binds every field to an in-memory input holding the matching entry of
    /// `values`. Fields without an entry get an input with no value.
    pub fn to_guard(&self, values: &HashMap<String, String>) -> Result<FormGuard> {
        if let Some(unknown) = values
            .keys()
            .find(|key| !self.fields.iter().any(|f| &f.name == *key))
        {
            return Err(FormGuardError::UnknownField {
                form: self.name.clone(),
                field: unknown.clone(),
            });
        }

        let mut guard = FormGuard::new(self.name.clone());
        for field in &self.fields {
            let input = match values.get(&field.name) {
                Some(value) => MemoryInput::with_value(value.clone()),
                None => MemoryInput::new(),
            };
            guard.add_field(
                FieldBinding::without_message(field.name.clone(), input, field.validator)
                    .required(field.required),
            );
        }

        Ok(guard)
    }
}
