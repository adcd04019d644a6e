// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Saved song documents.
//!
//! A document is the pretty-printed JSON form of a [`SongRecord`]. Loading
//! is forgiving about content (missing or mistyped fields default) but
//! strict about structure: text that is not a JSON object is rejected
//! before any form state is touched.

pub mod lenient;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::record::SongRecord;

/// Errors produced while reading or writing song documents
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Text is not well-formed JSON
    #[error("could not parse song document: {0}")]
    Parse(#[source] serde_json::Error),
    /// Well-formed JSON, but not an object at the top level
    #[error("song document must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    /// Record could not be encoded
    #[error("could not encode song document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Serialize a record as a pretty-printed document
pub fn to_document(record: &SongRecord) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(record).map_err(DocumentError::Encode)
}

/// Parse a document into a record; a leading byte-order mark is skipped
pub fn from_document(text: &str) -> Result<SongRecord, DocumentError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value = serde_json::from_str(text).map_err(DocumentError::Parse)?;
    let kind = match &value {
        Value::Object(_) => None,
        Value::Null => Some("null"),
        Value::Bool(_) => Some("a boolean"),
        Value::Number(_) => Some("a number"),
        Value::String(_) => Some("a string"),
        Value::Array(_) => Some("an array"),
    };
    if let Some(kind) = kind {
        return Err(DocumentError::NotAnObject(kind));
    }

    let record = serde_json::from_value(value).map_err(DocumentError::Parse)?;
    debug!("parsed song document");
    Ok(record)
}

/// Read and parse a document from disk
pub fn load<P: AsRef<Path>>(path: P) -> Result<SongRecord> {
    let contents = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read song document: {:?}", path.as_ref()))?;
    from_document(&contents)
        .with_context(|| format!("Failed to load song document: {:?}", path.as_ref()))
}

/// Serialize and write a document to disk
pub fn save<P: AsRef<Path>>(record: &SongRecord, path: P) -> Result<()> {
    let text = to_document(record)?;
    fs::write(path.as_ref(), text)
        .with_context(|| format!("Failed to write song document: {:?}", path.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Lyrics, Sound};
    use tempfile::tempdir;

    fn sample() -> SongRecord {
        let mut record = SongRecord::default();
        record.title = "Glass Harbor".to_string();
        record.ideas.turning_point = "The lighthouse goes dark".to_string();
        record.lyrics.intro = "(waves)".to_string();
        record.lyrics.chorus = vec!["Hold the line".to_string(), String::new()];
        record.lyrics.verse1 = vec![String::new(), "Salt in the air".to_string()];
        record.sound.tempo = Some("Slow".to_string());
        record.sound.instruments = vec!["Piano".to_string(), "Strings".to_string()];
        record.sound.other_considerations = "Leave room for a cello solo".to_string();
        record
    }

    #[test]
    fn test_round_trip() {
        let original = sample();
        let text = to_document(&original).unwrap();
        assert_eq!(from_document(&text).unwrap(), original);
    }

    #[test]
    fn test_round_trip_empty_record() {
        let original = SongRecord::default();
        let text = to_document(&original).unwrap();
        assert_eq!(from_document(&text).unwrap(), original);
    }

    #[test]
    fn test_document_format() {
        let text = to_document(&SongRecord::default()).unwrap();
        assert!(text.starts_with("{\n  \"songTitle\": \"\",\n  \"ideas\": {\n    \"mainIdea\""));

        let positions: Vec<usize> = [
            "\"songTitle\"",
            "\"lyrics\"",
            "\"sound\"",
            "\"tempo\"",
            "\"key\"",
            "\"instruments\"",
            "\"vocalist\"",
            "\"vocalStyle\"",
            "\"otherConsiderations\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(text.contains("\"tempo\": null"));
    }

    #[test]
    fn test_sound_keys_follow_group_map() {
        let value = serde_json::to_value(SongRecord::default()).unwrap();
        for group in crate::form::ChoiceGroup::ALL {
            assert!(
                value["sound"].get(group.record_field()).is_some(),
                "missing sound field for {:?}",
                group
            );
        }
    }

    #[test]
    fn test_truncated_document_fails() {
        let text = to_document(&sample()).unwrap();
        let truncated = &text[..text.len() / 2];
        assert!(matches!(from_document(truncated), Err(DocumentError::Parse(_))));
    }

    #[test]
    fn test_non_object_documents_fail() {
        assert!(matches!(from_document("null"), Err(DocumentError::NotAnObject("null"))));
        assert!(matches!(from_document("[1, 2]"), Err(DocumentError::NotAnObject("an array"))));
        assert!(matches!(from_document("5"), Err(DocumentError::NotAnObject("a number"))));
    }

    #[test]
    fn test_partial_document_defaults() {
        let record = from_document(r#"{"songTitle": "Only a title"}"#).unwrap();
        assert_eq!(record.title, "Only a title");
        assert_eq!(record.lyrics, Lyrics::default());
        assert_eq!(record.sound, Sound::default());

        let record = from_document(r#"{"lyrics": {"chorus": ["la"]}, "sound": "loud"}"#).unwrap();
        assert_eq!(record.lyrics.chorus, vec!["la"]);
        assert!(record.lyrics.verse1.is_empty());
        assert_eq!(record.sound, Sound::default());
    }

    #[test]
    fn test_scalar_values_read_as_text() {
        let record = from_document(r#"{"songTitle": 42, "lyrics": {"chorus": [7, "b"]}}"#).unwrap();
        assert_eq!(record.title, "42");
        assert_eq!(record.lyrics.chorus, vec!["7", "b"]);
    }

    #[test]
    fn test_byte_order_mark_skipped() {
        let text = format!("\u{feff}{}", to_document(&sample()).unwrap());
        assert_eq!(from_document(&text).unwrap(), sample());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record = from_document(r#"{"songTitle": "X", "version": 3, "sound": {"mood": "dark"}}"#).unwrap();
        assert_eq!(record.title, "X");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Glass_Harbor.json");
        save(&sample(), &path).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_file_with_byte_order_mark() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Glass_Harbor.json");
        let text = format!("\u{feff}{}", to_document(&sample()).unwrap());
        fs::write(&path, text).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"songTitle\": ").unwrap();
        assert!(load(&path).is_err());
    }
}
