//! CLI command implementations

use clap::{Subcommand, ValueEnum};

use crate::output::OutputFormat;

pub mod generate_config;
pub mod translate;
pub mod word;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate phrases, files or stdin to Pig Latin
    Translate(translate::TranslateArgs),

    /// Translate a single word
    Word(word::WordArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

/// Render the output format listing, one format per line
pub fn list_formats() -> String {
    OutputFormat::value_variants()
        .iter()
        .map(|format| format!("{:<6} {}\n", format.as_str(), format.description()))
        .collect()
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if let Err(err) =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
    {
        log::debug!("Keeping existing logger: {err}");
    }
}
