use clap::Parser;
use form_guard::adapters::memory::{MemorySubmitEvent, RecordingAlerts};
use form_guard::config::Command;
use form_guard::utils::{logger, validation::Validate};
use form_guard::{CliConfig, FormConfig, IdentifierValidator, PasswordPolicyValidator};
use std::collections::HashMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    match run(config.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::from(1)
        }
    }
}

fn run(command: Command) -> form_guard::Result<ExitCode> {
    match command {
        Command::Identifier { raw, format } => {
            let validator = IdentifierValidator::new();
            if format {
                println!("{}", validator.format(&raw));
                return Ok(ExitCode::SUCCESS);
            }
            let result = validator.validate(&raw);
            println!("{}", serde_json::to_string(&result)?);
            Ok(exit_code(result.is_valid()))
        }
        Command::Password { raw } => {
            let result = PasswordPolicyValidator::new().validate(&raw);
            println!("{}", serde_json::to_string(&result)?);
            Ok(exit_code(result.is_valid()))
        }
        Command::Submit {
            config,
            form,
            values,
        } => {
            tracing::info!("📁 Loading form configuration from: {}", config);
            let forms = FormConfig::from_file(&config)?;
            forms.validate()?;

            let definition = forms.form(form.as_deref())?;
            let values: HashMap<String, String> = values.into_iter().collect();
            let mut guard = definition.to_guard(&values)?;

            let mut event = MemorySubmitEvent::new();
            let mut alerts = RecordingAlerts::new();
            let report = guard.on_submit(&mut event, &mut alerts);

            for message in alerts.messages() {
                eprintln!("⚠️  {}", message);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(exit_code(report.outcome.is_allowed()))
        }
    }
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
