mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact form validation and session replay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one value against a field's rules
    Validate {
        /// Field name: name, email, phone or message
        field: String,

        /// Raw value, validated exactly as typed
        value: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format digits as (XXX) XXX-XXXX
    #[command(name = "format-phone")]
    FormatPhone {
        value: String,
    },

    /// Replay a JSON-lines event script through the form controller
    Replay {
        /// Script file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Configuration file (default: ./contact-form.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Level used when `RUST_LOG` is unset or unparsable
const DEFAULT_LOG: &str = "info";

fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Validate { field, value, json } => {
            let valid = commands::validate::execute(&field, &value, json)?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::FormatPhone { value } => {
            println!("{}", contact_form::format_phone(&value));
        }
        Commands::Replay { file, config } => {
            commands::replay::execute(file.as_deref(), config.as_deref())?;
        }
    }

    Ok(())
}
