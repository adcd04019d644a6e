// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Canonical song record.
//!
//! A [`SongRecord`] is a snapshot of the form: built on demand by
//! [`collect`], replayed into a form by [`apply`]. Field names follow the
//! saved-document format, so the serde attributes here define that format.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::lenient;
use crate::form::{ChoiceGroup, FormState, IdeaPrompt, LineSection, TextField};

/// Everything the user has entered for one song
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongRecord {
    /// Song title, stored as `songTitle`
    #[serde(rename = "songTitle", default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::section")]
    pub ideas: Ideas,
    #[serde(default, deserialize_with = "lenient::section")]
    pub lyrics: Lyrics,
    #[serde(default, deserialize_with = "lenient::section")]
    pub sound: Sound,
}

/// Free-text creative prompts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ideas {
    #[serde(default, deserialize_with = "lenient::text")]
    pub main_idea: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub opening_scene: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub story_development: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub turning_point: String,
}

impl Ideas {
    pub fn get(&self, prompt: IdeaPrompt) -> &str {
        match prompt {
            IdeaPrompt::MainIdea => &self.main_idea,
            IdeaPrompt::OpeningScene => &self.opening_scene,
            IdeaPrompt::StoryDevelopment => &self.story_development,
            IdeaPrompt::TurningPoint => &self.turning_point,
        }
    }
}

/// Lyric blocks; the repeatable sections keep one entry per line slot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lyrics {
    #[serde(default, deserialize_with = "lenient::text")]
    pub intro: String,
    #[serde(default, deserialize_with = "lenient::lines")]
    pub chorus: Vec<String>,
    #[serde(default, deserialize_with = "lenient::lines")]
    pub verse1: Vec<String>,
    #[serde(default, deserialize_with = "lenient::lines")]
    pub verse2: Vec<String>,
    #[serde(default, deserialize_with = "lenient::lines")]
    pub bridge: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub outro: String,
}

impl Lyrics {
    /// Lines of a repeatable section, by slot position
    pub fn section(&self, section: LineSection) -> &[String] {
        match section {
            LineSection::Chorus => &self.chorus,
            LineSection::Verse1 => &self.verse1,
            LineSection::Verse2 => &self.verse2,
            LineSection::Bridge => &self.bridge,
        }
    }
}

/// Production choices
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sound {
    #[serde(default, deserialize_with = "lenient::choice")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "lenient::choice")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient::choices")]
    pub instruments: Vec<String>,
    #[serde(default, deserialize_with = "lenient::choice")]
    pub vocalist: Option<String>,
    #[serde(default, deserialize_with = "lenient::choices")]
    pub vocal_style: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub other_considerations: String,
}

/// Stored value(s) of one sound-choice group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredChoice<'a> {
    One(Option<&'a str>),
    Many(&'a [String]),
}

impl<'a> StoredChoice<'a> {
    /// Whether a button with `value` should be selected
    pub fn matches(&self, value: &str) -> bool {
        match self {
            StoredChoice::One(stored) => *stored == Some(value),
            StoredChoice::Many(stored) => stored.iter().any(|v| v == value),
        }
    }

    /// All stored values
    pub fn values(&self) -> Vec<&'a str> {
        match *self {
            StoredChoice::One(stored) => stored.into_iter().collect(),
            StoredChoice::Many(stored) => stored.iter().map(String::as_str).collect(),
        }
    }
}

impl Sound {
    /// Field holding the given group, per [`ChoiceGroup::record_field`]
    pub fn stored(&self, group: ChoiceGroup) -> StoredChoice<'_> {
        match group {
            ChoiceGroup::Tempo => StoredChoice::One(self.tempo.as_deref()),
            ChoiceGroup::Key => StoredChoice::One(self.key.as_deref()),
            ChoiceGroup::Instrument => StoredChoice::Many(&self.instruments),
            ChoiceGroup::Vocalist => StoredChoice::One(self.vocalist.as_deref()),
            ChoiceGroup::VocalStyle => StoredChoice::Many(&self.vocal_style),
        }
    }
}

/// What happened while replaying a record into a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Non-empty stored lines that had no slot to go into
    pub dropped_lines: usize,
    /// Button groups outside the fixed group map
    pub ignored_groups: Vec<String>,
    /// Stored choice values that matched no button
    pub unmatched_choices: Vec<(ChoiceGroup, String)>,
}

/// Build a record from the current form values
pub fn collect(form: &FormState) -> SongRecord {
    let text = |field| form.text(field).to_string();
    let single = |group: ChoiceGroup| {
        form.selected_values(group.ui_id())
            .first()
            .map(|value| value.to_string())
    };
    let multi = |group: ChoiceGroup| {
        form.selected_values(group.ui_id())
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    };

    SongRecord {
        title: text(TextField::Title),
        ideas: Ideas {
            main_idea: text(TextField::Idea(IdeaPrompt::MainIdea)),
            opening_scene: text(TextField::Idea(IdeaPrompt::OpeningScene)),
            story_development: text(TextField::Idea(IdeaPrompt::StoryDevelopment)),
            turning_point: text(TextField::Idea(IdeaPrompt::TurningPoint)),
        },
        lyrics: Lyrics {
            intro: text(TextField::Intro),
            chorus: form.lines(LineSection::Chorus).to_vec(),
            verse1: form.lines(LineSection::Verse1).to_vec(),
            verse2: form.lines(LineSection::Verse2).to_vec(),
            bridge: form.lines(LineSection::Bridge).to_vec(),
            outro: text(TextField::Outro),
        },
        sound: Sound {
            tempo: single(ChoiceGroup::Tempo),
            key: single(ChoiceGroup::Key),
            instruments: multi(ChoiceGroup::Instrument),
            vocalist: single(ChoiceGroup::Vocalist),
            vocal_style: multi(ChoiceGroup::VocalStyle),
            other_considerations: text(TextField::OtherConsiderations),
        },
    }
}

/// Reset the form, then replay `record` into it
pub fn apply(form: &mut FormState, record: &SongRecord) -> ApplyReport {
    let mut report = ApplyReport::default();

    form.start_over();

    form.set_text(TextField::Title, record.title.as_str());
    for prompt in IdeaPrompt::ALL {
        form.set_text(TextField::Idea(prompt), record.ideas.get(prompt));
    }
    form.set_text(TextField::Intro, record.lyrics.intro.as_str());
    form.set_text(TextField::Outro, record.lyrics.outro.as_str());
    form.set_text(
        TextField::OtherConsiderations,
        record.sound.other_considerations.as_str(),
    );

    for section in LineSection::ALL {
        let stored = record.lyrics.section(section);
        let slots = form.slot_count(section);
        for (slot, line) in form.lines_mut(section).iter_mut().zip(stored) {
            slot.clone_from(line);
        }
        let dropped = stored
            .iter()
            .skip(slots)
            .filter(|line| !line.is_empty())
            .count();
        if dropped > 0 {
            warn!(%section, dropped, slots, "stored lines exceed available slots");
            report.dropped_lines += dropped;
        }
    }

    for button in form.buttons_mut() {
        match button.kind() {
            Some(group) => {
                let selected = record.sound.stored(group).matches(button.value());
                button.set_selected(selected);
            }
            None => {
                if !report.ignored_groups.iter().any(|g| g == button.group()) {
                    debug!(group = button.group(), "ignoring unmapped choice group");
                    report.ignored_groups.push(button.group().to_string());
                }
            }
        }
    }

    for group in ChoiceGroup::ALL {
        for value in record.sound.stored(group).values() {
            let known = form
                .buttons()
                .iter()
                .any(|b| b.group() == group.ui_id() && b.value() == value);
            if !known {
                warn!(
                    field = group.record_field(),
                    value,
                    "stored choice has no matching button"
                );
                report.unmatched_choices.push((group, value.to_string()));
            }
        }
    }

    form.refresh_context();
    report
}
