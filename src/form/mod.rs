// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory form state.
//!
//! This module holds the raw values a user edits:
//! - Text inputs (title, idea prompts, intro, outro, other considerations)
//! - Per-line inputs for the repeatable lyric sections
//! - Sound-choice buttons with their selection state
//! - Context echoes of the idea prompts

pub mod choice;
pub mod fields;

pub use choice::{ChoiceButton, ChoiceGroup, SelectionMode};
pub use fields::{IdeaPrompt, LineSection, TextField};

use std::collections::HashSet;

use thiserror::Error;
use tracing::{trace, warn};

use crate::config::FormLayout;

/// Echo text shown when an idea prompt is empty
pub const EMPTY_ECHO: &str = "...";

/// Errors raised when editing the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no sound-choice group named {0:?}")]
    UnknownGroup(String),
    #[error("no choice {value:?} in group {group:?}")]
    UnknownChoice { group: String, value: String },
    #[error("{section} has {slots} line slots, index {index} is out of range")]
    SlotOutOfRange {
        section: LineSection,
        index: usize,
        slots: usize,
    },
}

/// Current values of every field in the song form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    title: String,
    ideas: [String; 4],
    intro: String,
    outro: String,
    other_considerations: String,
    lines: [Vec<String>; 4],
    buttons: Vec<ChoiceButton>,
    echoes: [String; 4],
}

impl FormState {
    /// Create an empty form for the given layout
    ///
    /// A repeated (group, value) pair gets a single button; later copies are skipped.
    pub fn new(layout: &FormLayout) -> Self {
        let slots = &layout.slots;
        let mut seen = HashSet::new();
        let mut buttons = Vec::with_capacity(layout.choices.len());
        for option in &layout.choices {
            if !seen.insert((option.group.as_str(), option.value.as_str())) {
                warn!(group = %option.group, value = %option.value, "skipping duplicate choice");
                continue;
            }
            buttons.push(ChoiceButton::new(option.group.clone(), option.value.clone()));
        }

        Self {
            title: String::new(),
            ideas: Default::default(),
            intro: String::new(),
            outro: String::new(),
            other_considerations: String::new(),
            lines: [
                vec![String::new(); slots.chorus],
                vec![String::new(); slots.verse1],
                vec![String::new(); slots.verse2],
                vec![String::new(); slots.bridge],
            ],
            buttons,
            echoes: std::array::from_fn(|_| EMPTY_ECHO.to_string()),
        }
    }

    /// Read a text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Title => &self.title,
            TextField::Idea(prompt) => &self.ideas[prompt.index()],
            TextField::Intro => &self.intro,
            TextField::Outro => &self.outro,
            TextField::OtherConsiderations => &self.other_considerations,
        }
    }

    /// Write a text field; idea prompts also refresh their context echo
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Title => self.title = value,
            TextField::Idea(prompt) => {
                self.ideas[prompt.index()] = value;
                self.refresh_echo(prompt);
            }
            TextField::Intro => self.intro = value,
            TextField::Outro => self.outro = value,
            TextField::OtherConsiderations => self.other_considerations = value,
        }
    }

    /// All line slots of a section, blank ones included
    pub fn lines(&self, section: LineSection) -> &[String] {
        &self.lines[section.index()]
    }

    pub(crate) fn lines_mut(&mut self, section: LineSection) -> &mut [String] {
        &mut self.lines[section.index()]
    }

    /// Number of line slots in a section
    pub fn slot_count(&self, section: LineSection) -> usize {
        self.lines[section.index()].len()
    }

    /// Write one line slot
    pub fn set_line(
        &mut self,
        section: LineSection,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let slots = &mut self.lines[section.index()];
        let count = slots.len();
        match slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::SlotOutOfRange {
                section,
                index,
                slots: count,
            }),
        }
    }

    /// Sound-choice buttons in display order
    pub fn buttons(&self) -> &[ChoiceButton] {
        &self.buttons
    }

    pub(crate) fn buttons_mut(&mut self) -> &mut [ChoiceButton] {
        &mut self.buttons
    }

    /// Click a sound-choice button
    pub fn toggle_choice(&mut self, group: &str, value: &str) -> Result<(), FormError> {
        if !self.buttons.iter().any(|b| b.group() == group) {
            return Err(FormError::UnknownGroup(group.to_string()));
        }
        let target = self
            .buttons
            .iter()
            .position(|b| b.group() == group && b.value() == value)
            .ok_or_else(|| FormError::UnknownChoice {
                group: group.to_string(),
                value: value.to_string(),
            })?;

        choice::toggle(&mut self.buttons, target);
        trace!(group, value, selected = self.buttons[target].is_selected(), "toggled choice");
        Ok(())
    }

    /// Selected values of a group, in display order
    pub fn selected_values(&self, group: &str) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|b| b.group() == group && b.is_selected())
            .map(|b| b.value())
            .collect()
    }

    /// Context echo shown next to the section driven by `prompt`
    pub fn context_echo(&self, prompt: IdeaPrompt) -> &str {
        &self.echoes[prompt.index()]
    }

    /// Recompute every context echo from the idea prompts
    pub fn refresh_context(&mut self) {
        for prompt in IdeaPrompt::ALL {
            self.refresh_echo(prompt);
        }
    }

    fn refresh_echo(&mut self, prompt: IdeaPrompt) {
        let idea = &self.ideas[prompt.index()];
        self.echoes[prompt.index()] = if idea.is_empty() {
            EMPTY_ECHO.to_string()
        } else {
            idea.clone()
        };
        trace!(section = %prompt.echo_section(), "refreshed context echo");
    }

    /// Clear every input, deselect every button and reset the echoes
    pub fn start_over(&mut self) {
        self.title.clear();
        self.ideas.iter_mut().for_each(String::clear);
        self.intro.clear();
        self.outro.clear();
        self.other_considerations.clear();
        for slots in self.lines.iter_mut() {
            slots.iter_mut().for_each(String::clear);
        }
        for button in self.buttons.iter_mut() {
            button.set_selected(false);
        }
        for echo in self.echoes.iter_mut() {
            *echo = EMPTY_ECHO.to_string();
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FormLayout::default())
    }
}
