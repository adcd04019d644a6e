// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text song brief and export file names.

use super::{display_title, AssembledSong};

const UNTITLED_STEM: &str = "Untitled_Song";

/// Full text brief: title, lyric sheet, then musician notes
pub fn render_brief(title: &str, lyric_sheet: &str, notes: &str) -> String {
    format!(
        "SONG TITLE: {}\n\n--- SONG LYRICS ---\n{}\n\n--- MUSICIAN & PRODUCER NOTES ---\n{}",
        display_title(title),
        lyric_sheet,
        notes
    )
}

impl AssembledSong {
    /// Text brief for this song
    pub fn brief(&self) -> String {
        render_brief(&self.title, &self.lyric_sheet, &self.notes)
    }
}

/// File name stem: trimmed title with whitespace runs replaced by `_`
pub fn file_stem(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.is_empty() {
        UNTITLED_STEM.to_string()
    } else {
        words.join("_")
    }
}

/// Name of the saved JSON document
pub fn document_file_name(title: &str) -> String {
    format!("{}.json", file_stem(title))
}

/// Name of the downloaded text brief
pub fn brief_file_name(title: &str) -> String {
    format!("{}_brief.txt", file_stem(title))
}
