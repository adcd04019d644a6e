// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Forgiving field decoders for saved song documents.
//!
//! Documents may come from older versions or be edited by hand. Every
//! decoder here accepts any JSON value and falls back to the empty state
//! when the value has the wrong shape, so a partial document still loads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::trace;

/// Text shown for a scalar value; zero, false, null and containers are empty
fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => String::new(),
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 && !n.is_i64() && !n.is_u64() => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => {
            trace!(?other, "expected text, using empty string");
            String::new()
        }
    }
}

/// A string, or the text of a number or `true`, or empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// A string, or no selection
pub fn choice<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        other => {
            trace!(?other, "expected a single choice, using none");
            None
        }
    })
}

/// Positional lines; entries are read like [`text`] so positions are kept
pub fn lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(scalar_text)
            .collect(),
        other => {
            trace!(?other, "expected lyric lines, using none");
            Vec::new()
        }
    })
}

/// A set of selected values; entries that are not strings are dropped
pub fn choices<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        other => {
            trace!(?other, "expected a list of choices, using none");
            Vec::new()
        }
    })
}

/// A nested object, or its default when missing or malformed
pub fn section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        other => {
            trace!(?other, "expected an object, using defaults");
            Ok(T::default())
        }
    }
}
