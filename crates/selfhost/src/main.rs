// SPDX-FileCopyrightText: 2026 Selfhost Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! selfhost - model catalog, spend estimates and model suggestions for a
//! self-hosted OpenAI chat client.
//!
//! This is the binary entry point.

mod estimate;
mod models;
mod settings;
mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use selfhost_config::SelfhostConfig;
use selfhost_core::{ModelId, SelfhostError};
use strum::IntoEnumIterator;

/// selfhost - model catalog, spend estimates and model suggestions.
#[derive(Parser, Debug)]
#[command(name = "selfhost", version, about, long_about = None)]
struct Cli {
    /// Read and save settings at this path instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every supported model with pricing, ratings and context window.
    Models {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Suggest a model for a message.
    Suggest {
        /// The message to analyze.
        message: String,
        /// Prefer cheaper models.
        #[arg(long)]
        cost_sensitive: bool,
        /// The task includes images.
        #[arg(long)]
        vision: bool,
        /// Force the reasoning flag instead of detecting it.
        #[arg(long)]
        reasoning: bool,
        /// Force the simple-task flag instead of detecting it.
        #[arg(long)]
        simple: bool,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Estimate the USD cost of a request.
    Cost {
        model: String,
        #[arg(allow_negative_numbers = true)]
        input_tokens: i64,
        #[arg(allow_negative_numbers = true)]
        output_tokens: i64,
    },
    /// Check a token count against a model's context window.
    Limit {
        model: String,
        #[arg(allow_negative_numbers = true)]
        tokens: i64,
    },
    /// Count the tokens of a text as a model would.
    Tokens { model: String, text: String },
    /// Show or change user settings.
    Settings {
        #[command(subcommand)]
        action: Option<settings::SettingsAction>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            selfhost_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(e) = run(cli, config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<SelfhostConfig, Vec<selfhost_config::ConfigError>> {
    match &cli.config {
        Some(path) => selfhost_config::load_and_validate_path(path),
        None => selfhost_config::load_and_validate(),
    }
}

fn run(cli: Cli, config: SelfhostConfig) -> Result<(), SelfhostError> {
    let use_color = !cli.plain && std::io::IsTerminal::is_terminal(&std::io::stdout());

    match cli.command {
        Some(Commands::Models { json }) => models::run_models(json, use_color),
        Some(Commands::Suggest {
            message,
            cost_sensitive,
            vision,
            reasoning,
            simple,
            json,
        }) => {
            let flags = suggest::SuggestFlags {
                cost_sensitive,
                vision,
                reasoning,
                simple,
            };
            suggest::run_suggest(&message, flags, json, use_color)
        }
        Some(Commands::Cost {
            model,
            input_tokens,
            output_tokens,
        }) => {
            estimate::run_cost(&model, input_tokens, output_tokens);
            Ok(())
        }
        Some(Commands::Limit { model, tokens }) => {
            estimate::run_limit(&model, tokens, use_color);
            Ok(())
        }
        Some(Commands::Tokens { model, text }) => {
            estimate::run_tokens(&model, &text);
            Ok(())
        }
        Some(Commands::Settings { action }) => {
            let path = cli
                .config
                .clone()
                .unwrap_or_else(selfhost_config::user_config_path);
            settings::run_settings(config, action, &path)
        }
        None => {
            println!("{}: use --help for available commands", config.app.title);
            Ok(())
        }
    }
}

/// Parse a model id, suggesting the closest supported id on a typo.
pub(crate) fn parse_model(model: &str) -> Result<ModelId, SelfhostError> {
    model.parse::<ModelId>().map_err(|_| {
        let ids: Vec<&str> = ModelId::iter().map(ModelId::as_str).collect();
        SelfhostError::UnknownModel {
            model: model.to_string(),
            suggestion: selfhost_config::diagnostic::suggest_key(model, &ids),
        }
    })
}

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("selfhost={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
