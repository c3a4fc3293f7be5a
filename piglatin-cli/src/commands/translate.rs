//! Translate command implementation

use crate::commands::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use piglatin_core::translate_to_pig_latin;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the translate command
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Phrase to translate; several arguments are joined with single spaces
    #[arg(value_name = "PHRASE", conflicts_with = "input")]
    pub phrase: Vec<String>,

    /// Input files or patterns (supports glob); stdin when neither a phrase nor input is given
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Drop blank input lines instead of copying them through
    #[arg(long)]
    pub skip_blank: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TranslateArgs {
    /// Execute the translate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting translation");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let format = self.format.unwrap_or(config.output.default_format);
        let skip_blank = self.skip_blank || config.input.skip_blank_lines;
        log::debug!("Output format: {}", format.as_str());

        // Opening `-o` truncates it, so the phrase and patterns are checked first.
        if !self.phrase.is_empty() {
            let phrase = self.phrase.join(" ");
            let translation = translate_to_pig_latin(&phrase).map_err(CliError::from)?;
            let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
            formatter.format_line(&phrase, &translation, 1)?;
            return formatter.finish();
        }

        let files = if self.input.is_empty() {
            Vec::new()
        } else {
            resolve_patterns(&self.input)?
        };

        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        if !files.is_empty() {
            self.translate_files(&files, formatter.as_mut(), skip_blank)?;
        } else {
            log::info!("Reading phrases from stdin");
            let stdin = io::stdin();
            translate_lines(stdin.lock(), formatter.as_mut(), skip_blank)
                .context("Failed to translate stdin")?;
        }

        formatter.finish()
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        })
    }

    fn translate_files(
        &self,
        files: &[PathBuf],
        formatter: &mut dyn OutputFormatter,
        skip_blank: bool,
    ) -> Result<()> {
        log::info!("Found {} file(s) to translate", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in files {
            log::debug!("Translating {}", path.display());
            let reader = FileReader::open_lines(path)?;
            let lines = translate_lines(reader, formatter, skip_blank)
                .with_context(|| format!("Failed to translate {}", path.display()))?;
            log::debug!("Translated {} line(s) from {}", lines, path.display());
            progress.file_completed(&path.display().to_string());
        }

        progress.finish();
        Ok(())
    }
}

/// Translate every line of `reader`, returning the number of lines translated
///
/// Blank lines are copied through unchanged, or dropped when `skip_blank`
/// is set; they are never handed to the translator.
pub fn translate_lines<R: BufRead>(
    reader: R,
    formatter: &mut dyn OutputFormatter,
    skip_blank: bool,
) -> Result<usize> {
    let mut translated = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input line")?;
        let number = idx + 1;

        if line.trim().is_empty() {
            if !skip_blank {
                formatter.format_line(&line, &line, number)?;
            }
            continue;
        }

        let translation = translate_to_pig_latin(&line).map_err(CliError::from)?;
        formatter.format_line(&line, &translation, number)?;
        translated += 1;
    }

    Ok(translated)
}
