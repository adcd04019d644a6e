// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Form layout configuration.
//!
//! A layout describes how many lyric line slots each repeatable section
//! offers and which sound-choice buttons exist, in the order they are shown.
//! Layouts can be loaded from YAML or TOML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Root layout description for the song form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormLayout {
    /// Line slots per repeatable lyric section
    #[serde(default)]
    pub slots: SlotCounts,
    /// Sound-choice buttons in display order
    #[serde(default = "default_choices")]
    pub choices: Vec<ChoiceOption>,
}

impl FormLayout {
    /// Load a layout from a YAML or TOML file, chosen by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
        .with_context(|| format!("Invalid layout in {:?}", path))
    }

    /// Parse and validate a layout from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let layout: Self = serde_yaml::from_str(yaml).context("Failed to parse YAML layout")?;
        layout.validate()?;
        Ok(layout)
    }

    /// Parse and validate a layout from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        let layout: Self = toml::from_str(text).context("Failed to parse TOML layout")?;
        layout.validate()?;
        Ok(layout)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize layout to YAML")
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize layout to TOML")
    }

    /// Check slot counts and catalog entries
    pub fn validate(&self) -> Result<()> {
        for (name, count) in [
            ("chorus", self.slots.chorus),
            ("verse1", self.slots.verse1),
            ("verse2", self.slots.verse2),
            ("bridge", self.slots.bridge),
        ] {
            if count == 0 {
                bail!("Section {} must have at least one line slot", name);
            }
        }

        let mut seen = HashSet::new();
        for option in &self.choices {
            if !seen.insert((option.group.as_str(), option.value.as_str())) {
                bail!(
                    "Duplicate choice {:?} in group {:?}",
                    option.value,
                    option.group
                );
            }
        }
        Ok(())
    }
}

impl Default for FormLayout {
    fn default() -> Self {
        Self {
            slots: SlotCounts::default(),
            choices: default_choices(),
        }
    }
}

/// Number of line inputs for each repeatable section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotCounts {
    #[serde(default = "default_slots")]
    pub chorus: usize,
    #[serde(default = "default_slots")]
    pub verse1: usize,
    #[serde(default = "default_slots")]
    pub verse2: usize,
    #[serde(default = "default_slots")]
    pub bridge: usize,
}

fn default_slots() -> usize {
    4
}

impl Default for SlotCounts {
    fn default() -> Self {
        Self {
            chorus: default_slots(),
            verse1: default_slots(),
            verse2: default_slots(),
            bridge: default_slots(),
        }
    }
}

/// A single sound-choice button
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceOption {
    /// UI group identifier (e.g. "tempo", "vocal-style")
    pub group: String,
    /// Value recorded when the button is selected
    pub value: String,
}

impl ChoiceOption {
    /// Create a new choice option
    pub fn new(group: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            value: value.into(),
        }
    }
}

fn default_choices() -> Vec<ChoiceOption> {
    let catalog: [(&str, &[&str]); 5] = [
        ("tempo", &["Slow", "Mid-tempo", "Upbeat", "Fast"]),
        (
            "key",
            &["C Major", "G Major", "D Major", "A Minor", "E Minor", "D Minor"],
        ),
        (
            "instrument",
            &[
                "Acoustic Guitar",
                "Electric Guitar",
                "Piano",
                "Synth",
                "Bass",
                "Drums",
                "Strings",
            ],
        ),
        ("vocalist", &["Male", "Female", "Duet", "Choir"]),
        (
            "vocal-style",
            &["Soft", "Powerful", "Raspy", "Breathy", "Falsetto", "Spoken Word"],
        ),
    ];

    catalog
        .iter()
        .flat_map(|(group, values)| values.iter().map(move |value| ChoiceOption::new(*group, *value)))
        .collect()
}
