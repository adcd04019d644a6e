// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Field identifiers for the song form.

use std::fmt;

/// Creative prompt inputs shown above the lyric sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdeaPrompt {
    MainIdea,
    OpeningScene,
    StoryDevelopment,
    TurningPoint,
}

impl IdeaPrompt {
    pub const ALL: [IdeaPrompt; 4] = [
        IdeaPrompt::MainIdea,
        IdeaPrompt::OpeningScene,
        IdeaPrompt::StoryDevelopment,
        IdeaPrompt::TurningPoint,
    ];

    /// Lyric section whose context line echoes this prompt
    pub fn echo_section(&self) -> LineSection {
        match self {
            IdeaPrompt::MainIdea => LineSection::Chorus,
            IdeaPrompt::OpeningScene => LineSection::Verse1,
            IdeaPrompt::StoryDevelopment => LineSection::Verse2,
            IdeaPrompt::TurningPoint => LineSection::Bridge,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            IdeaPrompt::MainIdea => 0,
            IdeaPrompt::OpeningScene => 1,
            IdeaPrompt::StoryDevelopment => 2,
            IdeaPrompt::TurningPoint => 3,
        }
    }
}

/// Repeatable lyric sections made of individual line inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineSection {
    Chorus,
    Verse1,
    Verse2,
    Bridge,
}

impl LineSection {
    pub const ALL: [LineSection; 4] = [
        LineSection::Chorus,
        LineSection::Verse1,
        LineSection::Verse2,
        LineSection::Bridge,
    ];

    /// Human-readable section name ("Verse 1")
    pub fn display_name(&self) -> &'static str {
        match self {
            LineSection::Chorus => "Chorus",
            LineSection::Verse1 => "Verse 1",
            LineSection::Verse2 => "Verse 2",
            LineSection::Bridge => "Bridge",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            LineSection::Chorus => 0,
            LineSection::Verse1 => 1,
            LineSection::Verse2 => 2,
            LineSection::Bridge => 3,
        }
    }
}

impl fmt::Display for LineSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Single-value text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Idea(IdeaPrompt),
    Intro,
    Outro,
    OtherConsiderations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_echo_sections() {
        assert_eq!(IdeaPrompt::MainIdea.echo_section(), LineSection::Chorus);
        assert_eq!(IdeaPrompt::OpeningScene.echo_section(), LineSection::Verse1);
        assert_eq!(IdeaPrompt::StoryDevelopment.echo_section(), LineSection::Verse2);
        assert_eq!(IdeaPrompt::TurningPoint.echo_section(), LineSection::Bridge);
    }

    #[test]
    fn test_indices_are_distinct() {
        for (i, prompt) in IdeaPrompt::ALL.iter().enumerate() {
            assert_eq!(prompt.index(), i);
        }
        for (i, section) in LineSection::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_section_display() {
        assert_eq!(LineSection::Verse1.to_string(), "Verse 1");
        assert_eq!(format!("{}", LineSection::Bridge), "Bridge");
    }
}
