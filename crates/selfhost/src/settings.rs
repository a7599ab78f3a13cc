// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `selfhost settings` command implementation.
//!
//! Shows the effective settings or applies one change and stores that
//! setting in the settings file.

use std::path::Path;

use clap::Subcommand;
use selfhost_config::{SelfhostConfig, NO_API_KEY_MESSAGE};
use selfhost_core::SelfhostError;
use selfhost_cost::option_label;

use crate::parse_model;

/// Settings actions. Without an action, `show` is assumed.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print the effective settings.
    Show,
    /// Choose the model for new chats.
    SetModel { model: String },
    /// Store an OpenAI API key.
    SetApiKey { api_key: String },
    /// Forget the stored API key.
    ClearApiKey,
    /// Reset the API key to the value of `OPENAI_API_KEY`.
    ResetApiKey,
    /// Replace the system message sent at the start of every chat.
    SetSystemMessage { message: String },
    /// Restore the default system message.
    ResetSystemMessage,
    /// Switch between light and dark theme.
    ToggleTheme,
}

/// Run the `selfhost settings` command.
///
/// `config` is the effective configuration. A change is validated against
/// it, then only the changed setting is stored in the file at `path`.
pub fn run_settings(
    mut config: SelfhostConfig,
    action: Option<SettingsAction>,
    path: &Path,
) -> Result<(), SelfhostError> {
    let action = action.unwrap_or(SettingsAction::Show);
    let Some(key) = apply(&mut config, action)? else {
        print_settings(&config);
        return Ok(());
    };

    selfhost_config::validation::validate_config(&config).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        SelfhostError::Config(messages.join("; "))
    })?;

    selfhost_config::save_setting_to_path(&config.settings, key, path)
        .map_err(|e| SelfhostError::Config(e.to_string()))?;
    println!("saved {}", path.display());
    Ok(())
}

/// Apply one change to the in-memory settings.
///
/// Returns the `settings` key that changed, or `None` for `show`.
fn apply(
    config: &mut SelfhostConfig,
    action: SettingsAction,
) -> Result<Option<&'static str>, SelfhostError> {
    let settings = &mut config.settings;
    let key = match action {
        SettingsAction::Show => return Ok(None),
        SettingsAction::SetModel { model } => {
            settings.set_model(parse_model(&model)?);
            "model"
        }
        SettingsAction::SetApiKey { api_key } => {
            settings.set_api_key(api_key);
            "api_key"
        }
        SettingsAction::ClearApiKey => {
            settings.clear_api_key();
            "api_key"
        }
        SettingsAction::ResetApiKey => {
            settings.reset_api_key();
            "api_key"
        }
        SettingsAction::SetSystemMessage { message } => {
            settings.set_system_message(message);
            "system_message"
        }
        SettingsAction::ResetSystemMessage => {
            settings.reset_system_message();
            "system_message"
        }
        SettingsAction::ToggleTheme => {
            settings.toggle_theme();
            "theme"
        }
    };
    Ok(Some(key))
}

fn print_settings(config: &SelfhostConfig) {
    let s = &config.settings;
    println!();
    println!("  {}", config.app.title);
    println!("  {}", "-".repeat(35));
    println!("    Model:          {}", option_label(s.model));
    println!("    Theme:          {}", s.theme);
    println!(
        "    API key:        {}",
        s.api_key.as_deref().map(mask_key).unwrap_or_else(|| "(not set)".into())
    );
    println!("    System message: {}", s.system_message);
    println!("    Show cost:      {}", config.cost.show_cost);
    println!();

    if !s.has_api_key() {
        for line in NO_API_KEY_MESSAGE {
            println!("  {line}");
        }
        println!();
    }
}

/// Mask all but the last four characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{tail}", "*".repeat(chars.len() - 4))
}
