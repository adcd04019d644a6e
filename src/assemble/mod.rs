// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lyric sheet and musician notes assembly.
//!
//! The lyric sheet follows a fixed song template:
//! Intro, Verse 1, Chorus, Verse 2, Chorus, Bridge, Chorus, Outro.
//! The chorus is repeated three times by the template itself.

pub mod brief;

pub use brief::{brief_file_name, document_file_name, file_stem, render_brief};

use std::fmt;

use crate::form::LineSection;
use crate::record::SongRecord;

/// Title used when the song has none
pub const UNTITLED: &str = "Untitled Song";

/// Fallback for absent sound choices
pub const NOT_SPECIFIED: &str = "Not specified";

/// One slot of the song template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart {
    Intro,
    Lines(LineSection),
    Outro,
}

impl TemplatePart {
    pub fn label(&self) -> &'static str {
        match self {
            TemplatePart::Intro => "Intro",
            TemplatePart::Lines(section) => section.display_name(),
            TemplatePart::Outro => "Outro",
        }
    }
}

/// Song structure used for every lyric sheet
pub const SONG_TEMPLATE: [TemplatePart; 8] = [
    TemplatePart::Intro,
    TemplatePart::Lines(LineSection::Verse1),
    TemplatePart::Lines(LineSection::Chorus),
    TemplatePart::Lines(LineSection::Verse2),
    TemplatePart::Lines(LineSection::Chorus),
    TemplatePart::Lines(LineSection::Bridge),
    TemplatePart::Lines(LineSection::Chorus),
    TemplatePart::Outro,
];

/// Sections that must have lyrics before a normal assembly, in report order
pub const REQUIRED_SECTIONS: [LineSection; 2] = [LineSection::Chorus, LineSection::Verse1];

/// Rendered output for a song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledSong {
    /// Display title ("Untitled Song" when blank)
    pub title: String,
    /// Labelled lyric sections separated by blank lines
    pub lyric_sheet: String,
    /// Musician and producer notes
    pub notes: String,
}

/// Required sections left empty at assembly time.
///
/// The caller decides whether to assemble anyway (with placeholders) or
/// keep editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationGap {
    missing: Vec<LineSection>,
}

impl ValidationGap {
    pub fn missing(&self) -> &[LineSection] {
        &self.missing
    }

    /// Missing section names joined for display ("Chorus, Verse 1")
    pub fn missing_names(&self) -> String {
        self.missing
            .iter()
            .map(|section| section.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "It looks like you missed the following required sections: {}.",
            self.missing_names()
        )
    }
}

/// Non-blank lines of a section joined by newlines
pub fn section_text(record: &SongRecord, section: LineSection) -> String {
    record
        .lyrics
        .section(section)
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Placeholder for an empty repeatable section
pub fn placeholder(section: LineSection) -> String {
    format!("[{} lyrics not provided]", section.display_name())
}

/// Check that the required sections have lyrics
pub fn check_required(record: &SongRecord) -> Result<(), ValidationGap> {
    let missing: Vec<LineSection> = REQUIRED_SECTIONS
        .into_iter()
        .filter(|section| section_text(record, *section).trim().is_empty())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationGap { missing })
    }
}

/// Run the required-section check, then assemble without placeholders
pub fn generate(record: &SongRecord) -> Result<AssembledSong, ValidationGap> {
    check_required(record)?;
    Ok(assemble(record, false))
}

/// Title shown on the sheet and in the brief
pub fn display_title(title: &str) -> String {
    match title.trim() {
        "" => UNTITLED.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Render the lyric sheet and notes for a record
pub fn assemble(record: &SongRecord, use_placeholders: bool) -> AssembledSong {
    AssembledSong {
        title: display_title(&record.title),
        lyric_sheet: lyric_sheet(record, use_placeholders),
        notes: musician_notes(record),
    }
}

fn part_content(record: &SongRecord, part: TemplatePart, use_placeholders: bool) -> String {
    match part {
        TemplatePart::Intro => record.lyrics.intro.clone(),
        TemplatePart::Outro => record.lyrics.outro.clone(),
        TemplatePart::Lines(section) => {
            let text = section_text(record, section);
            if use_placeholders && text.is_empty() {
                placeholder(section)
            } else {
                text
            }
        }
    }
}

/// Labelled lyric sections; blank sections are left out
pub fn lyric_sheet(record: &SongRecord, use_placeholders: bool) -> String {
    SONG_TEMPLATE
        .iter()
        .map(|part| (part.label(), part_content(record, *part, use_placeholders)))
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(label, content)| format!("[{}]\n{}", label, content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line mood summary, guessed from whether the key is major
pub fn overall_vibe(key: Option<&str>) -> &'static str {
    let major = key
        .map(|key| key.to_lowercase().contains("major"))
        .unwrap_or(false);
    if major {
        "hopeful and open"
    } else {
        "thoughtful and dramatic"
    }
}

fn or_not_specified(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => NOT_SPECIFIED,
    }
}

fn joined_or_not_specified(values: &[String]) -> String {
    let joined = values.join(", ");
    if joined.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        joined
    }
}

/// Musician and producer notes for a record
pub fn musician_notes(record: &SongRecord) -> String {
    let sound = &record.sound;
    let lines = [
        format!(
            "Overall Vibe: A song that feels {}.",
            overall_vibe(sound.key.as_deref())
        ),
        format!("Tempo: {}", or_not_specified(sound.tempo.as_deref())),
        format!("Key: {}", or_not_specified(sound.key.as_deref())),
        format!("Instrumentation: {}", joined_or_not_specified(&sound.instruments)),
        format!("Vocalist: {}", or_not_specified(sound.vocalist.as_deref())),
        format!("Vocal Style: {}", joined_or_not_specified(&sound.vocal_style)),
    ];

    let mut notes = lines.join("\n").trim().to_string();
    if !sound.other_considerations.is_empty() {
        notes.push_str("\n\nOther Considerations:\n");
        notes.push_str(&sound.other_considerations);
    }
    notes
}
