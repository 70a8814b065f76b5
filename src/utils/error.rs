use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormGuardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown form: {name}")]
    UnknownForm { name: String },

    #[error("Unknown field '{field}' in form '{form}'")]
    UnknownField { form: String, field: String },
}

impl FormGuardError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormGuardError::IoError(_) => "Check that the file exists and is readable",
            FormGuardError::TomlError(_) => "Check the configuration file for TOML syntax errors",
            FormGuardError::SerializationError(_) => "Report this as a bug",
            FormGuardError::ConfigError { .. }
            | FormGuardError::MissingConfigError { .. }
            | FormGuardError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and try again"
            }
            FormGuardError::UnknownForm { .. } => "Pass --form with one of the configured form names",
            FormGuardError::UnknownField { .. } => {
                "Only pass --value for fields declared in the selected form"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormGuardError>;
