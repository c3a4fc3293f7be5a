//! Command-line entry point for the Pig Latin translator

use anyhow::Result;
use clap::Parser;
use piglatin_cli::commands::{list_formats, Commands, ListCommands};

/// Translate English phrases to Pig Latin
#[derive(Debug, Parser)]
#[command(name = "piglatin", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate(args) => args.execute(),
        Commands::Word(args) => args.execute(),
        Commands::List {
            subcommand: ListCommands::Formats,
        } => {
            print!("{}", list_formats());
            Ok(())
        }
        Commands::GenerateConfig(args) => args.execute(),
    }
}
