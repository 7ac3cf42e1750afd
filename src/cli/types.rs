use thiserror::Error;

use crate::{AppwrapError, editor::EditorError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when a command is missing the configuration source it needs
    /// or a value cannot be understood.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The editor session rejected the operation.
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// The tool's settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] AppwrapError),

    /// Output could not be serialized.
    #[error("failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;
