// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the selfhost configuration system.

use selfhost_config::diagnostic::ConfigError;
use selfhost_config::model::{SelfhostConfig, Theme, DEFAULT_SYSTEM_MESSAGE};
use selfhost_config::{
    load_and_validate_path, load_and_validate_str, load_config_from_path, load_config_from_str,
    save_config_to_path,
};
use selfhost_core::ModelId;
use serial_test::serial;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_selfhost_config() {
    let toml = r#"
[app]
title = "Team GPT"
log_level = "debug"

[settings]
model = "gpt-4.1-mini"
api_key = "sk-123"
system_message = "Be brief."
theme = "dark"

[cost]
show_cost = false
warn_on_context_overflow = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.title, "Team GPT");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.settings.model, ModelId::Gpt41Mini);
    assert_eq!(config.settings.api_key.as_deref(), Some("sk-123"));
    assert_eq!(config.settings.system_message, "Be brief.");
    assert_eq!(config.settings.theme, Theme::Dark);
    assert!(!config.cost.show_cost);
    assert!(!config.cost.warn_on_context_overflow);
}

/// Unknown field in [settings] produces an error naming the key.
#[test]
fn unknown_field_in_settings_produces_error() {
    let toml = r#"
[settings]
modle = "gpt-4"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("modle"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing sections fall back to defaults.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = r#"
[settings]
theme = "dark"
"#;

    let config = load_config_from_str(toml).expect("partial config should load");
    assert_eq!(config.settings.theme, Theme::Dark);
    assert_eq!(config.settings.model, ModelId::Gpt35Turbo);
    assert_eq!(config.app.log_level, "info");
    assert!(config.cost.show_cost);
}

/// SELFHOST_SETTINGS_SYSTEM_MESSAGE maps to settings.system_message
/// (not settings.system.message).
#[test]
fn dotted_override_reaches_underscored_key() {
    use figment::{providers::Serialized, Figment};

    let config: SelfhostConfig = Figment::new()
        .merge(Serialized::defaults(SelfhostConfig::default()))
        .merge(("settings.system_message", "from env"))
        .extract()
        .expect("should set system_message via dot notation");

    assert_eq!(config.settings.system_message, "from env");
}

/// Real environment variables override values from the file.
#[test]
#[serial]
fn env_var_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selfhost.toml");
    std::fs::write(&path, "[settings]\nmodel = \"gpt-4\"\n").unwrap();

    // SAFETY: serialized with the other env-mutating tests.
    unsafe {
        std::env::set_var("SELFHOST_SETTINGS_MODEL", "o3-mini");
        std::env::set_var("SELFHOST_COST_SHOW_COST", "false");
    }
    let result = load_config_from_path(&path);
    unsafe {
        std::env::remove_var("SELFHOST_SETTINGS_MODEL");
        std::env::remove_var("SELFHOST_COST_SHOW_COST");
    }

    let config = result.expect("env override should load");
    assert_eq!(config.settings.model, ModelId::O3Mini);
    assert!(!config.cost.show_cost);
}

/// Serialized defaults provide sensible values for all fields.
#[test]
fn serialized_defaults_are_sensible() {
    let config = SelfhostConfig::default();

    assert_eq!(config.app.title, "Self-Host GPT");
    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.settings.model, ModelId::Gpt35Turbo);
    assert!(config.settings.api_key.is_none());
    assert_eq!(config.settings.system_message, DEFAULT_SYSTEM_MESSAGE);
    assert_eq!(config.settings.theme, Theme::Light);
    assert!(config.cost.show_cost);
    assert!(config.cost.warn_on_context_overflow);
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
#[serial]
fn missing_config_file_silently_skipped() {
    let config = load_config_from_path(std::path::Path::new("/nonexistent/selfhost.toml"))
        .expect("missing file should be silently skipped");
    assert_eq!(config.settings.model, ModelId::Gpt35Turbo);
}

/// deny_unknown_fields applies to the top level too.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[sttings]
theme = "dark"
"#;

    let errors = load_and_validate_str(toml).expect_err("unknown section should fail");
    let has_unknown = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, .. }
            if key == "sttings" && suggestion.as_deref() == Some("settings"))
    });
    assert!(has_unknown, "got: {errors:?}");
}

/// Unknown key diagnostics carry a suggestion and the section's valid keys.
#[test]
fn diagnostic_error_includes_unknown_key_and_valid_keys() {
    let toml = r#"
[settings]
modle = "gpt-4"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "modle"
                && suggestion.as_deref() == Some("model")
                && valid_keys.contains("system_message")
                && valid_keys.contains("theme")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'modle' with suggestion 'model', got: {errors:?}"
    );
}

/// An unsupported model id is rejected at load time.
#[test]
fn unsupported_model_is_rejected() {
    let toml = r#"
[settings]
model = "gpt-5-ultra"
"#;

    let errors = load_and_validate_str(toml).expect_err("unknown model should fail");
    assert!(!errors.is_empty());
    let rendered = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
    assert!(rendered.contains("gpt-5-ultra"), "got: {rendered}");
}

/// Invalid type (string where bool expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[cost]
show_cost = "yes"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("show_cost"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "modle".to_string(),
        suggestion: Some("model".to_string()),
        valid_keys: "model, api_key, system_message, theme".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");
    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `model`"), "got: {help}");

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("modle"), "rendered report should mention the key");
}

/// Validation runs after a successful load.
#[test]
fn validation_catches_bad_log_level() {
    let toml = r#"
[app]
log_level = "chatty"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad log level should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
    ));
}

/// Saved settings load back unchanged.
#[test]
#[serial]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("selfhost.toml");

    let mut config = SelfhostConfig::default();
    config.settings.set_model(ModelId::O4Mini);
    config.settings.set_api_key("sk-saved");
    config.settings.toggle_theme();
    config.settings.set_system_message("Answer in French.");

    save_config_to_path(&config, &path).expect("save should succeed");
    let loaded = load_and_validate_path(&path).expect("saved file should validate");
    assert_eq!(loaded, config);
}

/// Saving over a path whose parent is a file reports a persistence error.
#[test]
fn save_into_file_parent_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = save_config_to_path(&SelfhostConfig::default(), &blocker.join("selfhost.toml"))
        .expect_err("should fail");
    assert!(matches!(err, ConfigError::Persist { .. }), "got: {err:?}");
}
