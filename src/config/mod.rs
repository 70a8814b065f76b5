pub mod form_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

/// Command-line arguments for the `form-guard` binary.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "form-guard")]
#[command(about = "Field validation for identifier and password form fields")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Subcommands. Each exits 0 on success, 2 when the input is rejected and 1
/// on configuration errors.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a national identifier, or format it with --format
    Identifier {
        raw: String,

        #[arg(long)]
        format: bool,
    },

    /// Check a password against the password policy
    Password { raw: String },

    /// Simulate submitting a configured form
    Submit {
        /// Path to TOML form configuration
        #[arg(short, long, default_value = "forms.toml")]
        config: String,

        /// Form to submit; defaults to the first one in the file
        #[arg(long)]
        form: Option<String>,

        /// Field values as name=value
        #[arg(long = "value", value_parser = parse_key_value)]
        values: Vec<(String, String)>,
    },
}

#[cfg(feature = "cli")]
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", s))
}
