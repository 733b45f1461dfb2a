//! CLI commands and argument parsing

use crate::types::Dialect;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synthesize JSON Schemas from declared fields and recorded samples
#[derive(Parser, Debug)]
#[command(name = "schema-miner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Options file (YAML)
    #[arg(short, long, global = true)]
    pub options: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize the output schema of one endpoint
    Infer {
        /// Declared output fields (YAML or JSON)
        #[arg(long)]
        fields: PathBuf,

        /// Recorded response bodies: JSON files or directories of them
        #[arg(long, required = true, num_args = 1..)]
        samples: Vec<PathBuf>,

        /// Nullability dialect (openapi-3.0 or openapi-3.1)
        #[arg(long)]
        dialect: Option<Dialect>,

        /// Dotted path of the declared fields inside each body
        #[arg(long)]
        data_path: Option<String>,
    },

    /// Mine constraints from a parameter's help text
    Params {
        /// Declared type tag (e.g. "numeric", "list of strings")
        #[arg(long = "type")]
        doc_type: String,

        /// Help text to mine
        #[arg(long)]
        help_text: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
