use serde_json::Value;

use crate::model::FieldKey;

/// Errors raised by an editor session.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// The name is not a persisted configuration field.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// The field is supplied by the store and cannot be edited.
    #[error("field '{0}' is read-only")]
    ReadOnlyField(String),

    /// The value does not have the field's type.
    #[error("type mismatch for '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Field being set.
        field: FieldKey,
        /// What the field accepts.
        expected: &'static str,
        /// The rejected value.
        actual: Value,
    },

    /// The stored configuration could not be fetched.
    #[error("failed to load configuration for store '{store_id}': {details}")]
    LoadFailed {
        /// Store being loaded.
        store_id: String,
        /// Failure details.
        details: String,
    },

    /// The configuration could not be persisted. Local edits are kept.
    #[error("failed to save configuration for store '{store_id}': {details}")]
    SaveFailed {
        /// Store being saved.
        store_id: String,
        /// Failure details.
        details: String,
    },

    /// The payload could not be converted to or from the configuration model.
    #[error("failed to convert configuration payload: {details}")]
    Serialization {
        /// Conversion error details.
        details: String,
    },
}
