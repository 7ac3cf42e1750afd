//! Command-line interface for the wrapper configurator.
//!
//! Every command runs through an [`EditorSession`](crate::editor::EditorSession)
//! so the terminal sees exactly what the editor preview shows: the composed
//! screen, the effective field values, and the stored payload.

mod args;
pub mod formatting;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use args::{Cli, Commands, OutputFormat, SourceArgs};
pub use service::{CliService, parse_value};
pub use types::{CliError, CommandResult};
