use std::time::Instant;

use serde_json::Value;

use crate::model::FieldKey;

use super::EditorError;

/// A field edit, published to subscribers after it has been applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    /// The edited field.
    pub field: FieldKey,
    /// Explicit value before the edit, `None` when it was unset.
    pub old_value: Option<Value>,
    /// Explicit value after the edit; `Null` when the field was unset.
    pub new_value: Value,
    /// When the edit was applied.
    pub timestamp: Instant,
}

impl ConfigChange {
    /// Creates a change stamped with the current time.
    pub fn new(field: FieldKey, old_value: Option<Value>, new_value: Value) -> Self {
        Self {
            field,
            old_value,
            new_value,
            timestamp: Instant::now(),
        }
    }

    /// Extracts the new value as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::TypeMismatch` if the value cannot be deserialized
    /// into the requested type.
    pub fn extract<T>(&self) -> Result<T, EditorError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.new_value.clone()).map_err(|_| EditorError::TypeMismatch {
            field: self.field,
            expected: std::any::type_name::<T>(),
            actual: self.new_value.clone(),
        })
    }

    /// The new value if it is a string.
    pub fn as_string(&self) -> Option<String> {
        match &self.new_value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Whether the edit cleared the field.
    pub fn is_unset(&self) -> bool {
        self.new_value.is_null()
    }
}

/// Checks whether a field name matches a subscription pattern.
///
/// * `"*"` matches every field
/// * `"fab_*"` matches every field starting with `fab_`
/// * anything else must match exactly
pub(super) fn field_matches(field: &str, pattern: &str) -> bool {
    const WILDCARD: &str = "*";

    if pattern == WILDCARD {
        return true;
    }

    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => field.starts_with(prefix),
        None => field == pattern,
    }
}
