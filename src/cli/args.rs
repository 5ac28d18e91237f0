//! Command line argument parsing for the dictrie CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::SuggestionConfig;

/// dictrie - look up words and suggest close matches
#[derive(Parser, Debug, Clone)]
#[command(name = "dictrie")]
#[command(about = "Look up words in a word list and suggest close matches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DictrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DictrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n + 1,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up one or more words
    Lookup(LookupArgs),

    /// Read words from stdin and look each one up
    Interactive(InteractiveArgs),

    /// Show word list statistics
    Stats(StatsArgs),
}

/// Options shared by commands that produce suggestions
#[derive(Args, Debug, Clone, Default)]
pub struct SuggestionArgs {
    /// JSON file with suggestion settings
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(long)]
    pub max_typos: Option<usize>,

    /// Skip words whose length differs from the query by more than this
    #[arg(long)]
    pub max_length_diff: Option<usize>,

    /// Suggestions must score strictly above this (0.0 to 1.0)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Maximum number of suggestions
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Score candidates in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SuggestionArgs {
    /// Build the suggestion configuration: config file (or defaults) first,
    /// then command line overrides.
    pub fn to_config(&self) -> Result<SuggestionConfig> {
        let mut config = match &self.config {
            Some(path) => SuggestionConfig::from_json_file(path)?,
            None => SuggestionConfig::default(),
        };

        if let Some(max_typos) = self.max_typos {
            config.max_typos = max_typos;
        }
        if let Some(max_length_diff) = self.max_length_diff {
            config.max_length_diff = max_length_diff;
        }
        if let Some(min_score) = self.min_score {
            config.min_similarity_score = min_score;
        }
        if let Some(max_results) = self.max_results {
            config.max_results = max_results;
        }
        if self.parallel {
            config.parallel = true;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for looking up words
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Words to look up
    #[arg(value_name = "QUERY", required = true)]
    pub queries: Vec<String>,

    #[command(flatten)]
    pub suggestion: SuggestionArgs,
}

/// Arguments for the interactive prompt
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    #[command(flatten)]
    pub suggestion: SuggestionArgs,
}

/// Arguments for word list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
