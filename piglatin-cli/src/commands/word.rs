//! Word command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use piglatin_core::word_to_pig_latin;

/// Arguments for the word command
#[derive(Debug, Args)]
pub struct WordArgs {
    /// Word to translate
    #[arg(value_name = "WORD")]
    pub word: String,
}

impl WordArgs {
    /// Execute the word command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.translate()?);
        Ok(())
    }

    /// Translate the word argument
    pub fn translate(&self) -> Result<String> {
        word_to_pig_latin(&self.word).map_err(|e| CliError::from(e).into())
    }
}
