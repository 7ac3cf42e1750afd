//! Forgiving deserializers for stored payloads.
//!
//! Stored configs are written by several generations of the editor, so an
//! unrecognized token, a number stored as a string or a value of the wrong
//! JSON type must not make the whole record unreadable. Unusable values
//! deserialize as absent and the fallback chain takes over.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

pub(super) fn token<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(Value::String(s)) => match s.parse() {
            Ok(token) => Some(token),
            Err(_) => {
                debug!(value = %s, "ignoring unrecognized token");
                None
            }
        },
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(value = %other, "ignoring non-string token");
            None
        }
    })
}

pub(super) fn seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(super) fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(value = %other, "ignoring non-boolean flag");
            None
        }
    })
}

pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;

    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(value = %other, "ignoring non-string text");
            None
        }
    })
}
