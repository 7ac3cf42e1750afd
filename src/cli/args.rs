use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::compose::PreviewMode;

/// Configure and preview storefront mobile-app wrappers.
#[derive(Parser, Debug)]
#[command(name = "appwrap", version)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the preview and print its layers
    Preview {
        /// Configuration to preview.
        #[command(flatten)]
        source: SourceArgs,

        /// Launch phase to show (splash or app).
        #[arg(long, default_value = "app")]
        mode: PreviewMode,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective value of every field
    Resolve {
        /// Configuration to resolve.
        #[command(flatten)]
        source: SourceArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show a stored field and its effective value
    Get {
        /// Field name, e.g. fab_text.
        field: String,

        /// Store whose configuration to read.
        #[arg(long)]
        store: String,
    },

    /// Set a field and save the configuration
    Set {
        /// Field name, e.g. fab_text.
        field: String,

        /// New value as JSON (`true`, `3`, `null`); bare words are strings.
        value: String,

        /// Store whose configuration to edit.
        #[arg(long)]
        store: String,
    },

    /// Print the JSON Schema of the stored configuration
    Schema,
}

/// Where a configuration comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Stored configuration of a store.
    #[arg(long, conflicts_with = "input")]
    pub store: Option<String>,

    /// JSON file holding a configuration payload.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// Output format for commands that print structured data.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}
