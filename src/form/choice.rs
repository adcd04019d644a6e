// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sound-choice buttons and their selection rules.
//!
//! Buttons belong to a group identified by a UI string. Single-choice
//! groups (tempo, key, vocalist) hold at most one selection; multi-choice
//! groups (instrument, vocal-style) toggle each button independently.

/// How many buttons of a group may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Zero or one selection
    Single,
    /// Any number of selections
    Multi,
}

/// Known sound-choice groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceGroup {
    Tempo,
    Key,
    Instrument,
    Vocalist,
    VocalStyle,
}

impl ChoiceGroup {
    pub const ALL: [ChoiceGroup; 5] = [
        ChoiceGroup::Tempo,
        ChoiceGroup::Key,
        ChoiceGroup::Instrument,
        ChoiceGroup::Vocalist,
        ChoiceGroup::VocalStyle,
    ];

    /// Look up a group by its UI identifier
    pub fn from_ui_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.ui_id() == id)
    }

    /// Identifier used by the buttons in the UI
    pub fn ui_id(&self) -> &'static str {
        match self {
            ChoiceGroup::Tempo => "tempo",
            ChoiceGroup::Key => "key",
            ChoiceGroup::Instrument => "instrument",
            ChoiceGroup::Vocalist => "vocalist",
            ChoiceGroup::VocalStyle => "vocal-style",
        }
    }

    /// Name of the sound field this group is stored under in a song document.
    ///
    /// This mapping is part of the document format and must be used for
    /// both export and import.
    pub fn record_field(&self) -> &'static str {
        match self {
            ChoiceGroup::Tempo => "tempo",
            ChoiceGroup::Key => "key",
            ChoiceGroup::Instrument => "instruments",
            ChoiceGroup::Vocalist => "vocalist",
            ChoiceGroup::VocalStyle => "vocalStyle",
        }
    }

    pub fn selection_mode(&self) -> SelectionMode {
        match self {
            ChoiceGroup::Instrument | ChoiceGroup::VocalStyle => SelectionMode::Multi,
            ChoiceGroup::Tempo | ChoiceGroup::Key | ChoiceGroup::Vocalist => SelectionMode::Single,
        }
    }
}

/// A single sound-choice button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceButton {
    group: String,
    value: String,
    selected: bool,
}

impl ChoiceButton {
    /// Create an unselected button
    pub fn new(group: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            value: value.into(),
            selected: false,
        }
    }

    /// Raw UI group identifier
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Known group, if the identifier is recognised
    pub fn kind(&self) -> Option<ChoiceGroup> {
        ChoiceGroup::from_ui_id(&self.group)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Selection mode; unrecognised groups behave as single-choice
    pub fn selection_mode(&self) -> SelectionMode {
        self.kind()
            .map(|group| group.selection_mode())
            .unwrap_or(SelectionMode::Single)
    }
}

/// Toggle the button at `target` within `buttons`, honouring its group's mode.
///
/// For single-choice groups every other button in the group is cleared;
/// clicking the already selected button leaves the group empty.
pub(crate) fn toggle(buttons: &mut [ChoiceButton], target: usize) {
    let mode = buttons[target].selection_mode();
    match mode {
        SelectionMode::Multi => {
            let button = &mut buttons[target];
            button.selected = !button.selected;
        }
        SelectionMode::Single => {
            let was_selected = buttons[target].selected;
            let group = buttons[target].group.clone();
            for button in buttons.iter_mut().filter(|b| b.group == group) {
                button.selected = false;
            }
            if !was_selected {
                buttons[target].selected = true;
            }
        }
    }
}
