use anyhow::Result;
use form_guard::adapters::memory::{MemoryInput, MemoryMessage, MemorySubmitEvent, RecordingAlerts};
use form_guard::{
    FieldBinding, FieldState, FormConfig, FormGuard, GuardedField, IdentifierValidator,
    PasswordPolicyValidator, SubmitOutcome,
};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_required_blank_blocks_and_optional_blank_allows() {
    let input = MemoryInput::with_value("");

    let mut required =
        FieldBinding::without_message("rut", input.clone(), IdentifierValidator::new())
            .required(true);
    let mut event = MemorySubmitEvent::new();
    let mut alerts = RecordingAlerts::new();
    assert!(!required.on_submit(&mut event, &mut alerts).is_allowed());
    assert!(event.is_default_prevented());

    let mut optional =
        FieldBinding::without_message("rut", input.clone(), IdentifierValidator::new())
            .required(false);
    let mut event = MemorySubmitEvent::new();
    assert!(optional.on_submit(&mut event, &mut alerts).is_allowed());
    assert!(!event.is_default_prevented());
}

#[test]
fn test_typing_sequence_follows_current_value_only() {
    let input = MemoryInput::new();
    let message = MemoryMessage::new();
    let mut binding = FieldBinding::new(
        "rut",
        input.clone(),
        Some(message.clone()),
        IdentifierValidator::new(),
    )
    .required(true);

    let typed = [
        ("1", FieldState::Invalid),
        ("12.345.678", FieldState::Invalid),
        ("12.345.678-5", FieldState::Valid),
        ("12.345.678-", FieldState::Invalid),
        ("", FieldState::Empty),
    ];
    for (value, expected) in typed {
        input.set_value(value);
        assert_eq!(binding.on_input(), expected, "after typing {value:?}");
        assert_eq!(input.has_error_indicator(), expected == FieldState::Invalid);
        assert_eq!(message.is_visible(), expected == FieldState::Invalid);
    }
}

#[test]
fn test_blur_revalidates() {
    let input = MemoryInput::with_value("abc");
    let mut binding =
        FieldBinding::without_message("password", input.clone(), PasswordPolicyValidator::new());

    assert_eq!(binding.on_blur(), FieldState::Invalid);
    input.set_value("abc12345");
    assert_eq!(binding.on_blur(), FieldState::Valid);
}

#[test]
fn test_blocked_submit_focuses_and_alerts_once() {
    let input = MemoryInput::with_value("1234567");
    let mut binding =
        FieldBinding::without_message("password", input.clone(), PasswordPolicyValidator::new())
            .required(true);
    let mut event = MemorySubmitEvent::new();
    let mut alerts = RecordingAlerts::new();

    let outcome = binding.on_submit(&mut event, &mut alerts);

    assert_eq!(
        outcome,
        SubmitOutcome::Blocked {
            message: "Password must be at least 8 characters.".to_string()
        }
    );
    assert_eq!(alerts.messages(), ["Password must be at least 8 characters."]);
    assert!(input.is_focused());
}

#[test]
fn test_form_with_mixed_fields() {
    let rut = MemoryInput::with_value("12.345.678-9");
    let password = MemoryInput::with_value("abc12345");
    let mut form = FormGuard::new("user-edit")
        .with_field(
            FieldBinding::without_message("rut", rut.clone(), IdentifierValidator::new())
                .required(true),
        )
        .with_field(FieldBinding::without_message(
            "password",
            password.clone(),
            PasswordPolicyValidator::new(),
        ));
    assert_eq!(form.len(), 2);

    let mut event = MemorySubmitEvent::new();
    let mut alerts = RecordingAlerts::new();
    let report = form.on_submit(&mut event, &mut alerts);
    assert!(!report.outcome.is_allowed());
    assert!(rut.is_focused());

    rut.set_value("12.345.678-5");
    password.set_value("");
    let mut event = MemorySubmitEvent::new();
    let report = form.on_submit(&mut event, &mut alerts);
    assert!(report.outcome.is_allowed());
    assert_eq!(report.fields[1].state, FieldState::Empty);
}

#[test]
fn test_submit_from_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(
        br#"
[[forms]]
name = "student-request"
description = "Public request form"

[[forms.fields]]
name = "rut"
validator = "identifier"
required = true
"#,
    )?;

    let config = FormConfig::from_file(file.path())?;
    let form = config.form(Some("student-request"))?;

    let values = HashMap::from([("rut".to_string(), "7.654.321-6".to_string())]);
    let mut guard = form.to_guard(&values)?;
    let mut event = MemorySubmitEvent::new();
    let mut alerts = RecordingAlerts::new();
    let report = guard.on_submit(&mut event, &mut alerts);

    assert!(report.outcome.is_allowed());
    assert_eq!(report.fields[0].state, FieldState::Valid);
    Ok(())
}
