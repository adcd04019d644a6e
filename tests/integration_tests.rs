// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for songbrief
//!
//! These tests drive the public API the way an editor front end would:
//! fill a form, assemble, save, reload.

use songbrief::form::{IdeaPrompt, LineSection, TextField};
use songbrief::session::SessionError;
use songbrief::{
    apply, assemble, check_required, collect, from_document, to_document, DocumentError,
    FormLayout, FormState, Outcome, Session, SongRecord, UserAction,
};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_record() -> SongRecord {
    let mut record = SongRecord::default();
    record.title = "Harbor Lights".to_string();
    record.ideas.main_idea = "Coming home".to_string();
    record.ideas.opening_scene = "A ferry at dusk".to_string();
    record.lyrics.intro = "(horn)".to_string();
    record.lyrics.chorus = lines(&["Harbor lights", "guide me", "", ""]);
    record.lyrics.verse1 = lines(&["Cold rail", "", "warm hands", ""]);
    record.lyrics.verse2 = lines(&["", "", "", ""]);
    record.lyrics.bridge = lines(&["Almost there", "", "", ""]);
    record.sound.tempo = Some("Mid-tempo".to_string());
    record.sound.key = Some("D Major".to_string());
    record.sound.instruments = lines(&["Piano", "Drums"]);
    record.sound.vocalist = Some("Female".to_string());
    record.sound.vocal_style = lines(&["Soft", "Breathy"]);
    record.sound.other_considerations = "Foghorn sample in the outro".to_string();
    record
}

/// A record survives the document format unchanged
#[test]
fn test_document_round_trip() {
    let record = sample_record();
    let text = to_document(&record).unwrap();
    assert_eq!(from_document(&text).unwrap(), record);
}

/// Documents replayed into a form and collected again are unchanged
#[test]
fn test_document_through_form() {
    let record = sample_record();
    let mut form = FormState::new(&FormLayout::default());
    let report = apply(&mut form, &record);

    assert!(report.unmatched_choices.is_empty());
    assert_eq!(collect(&form), record);
    assert_eq!(form.context_echo(IdeaPrompt::OpeningScene), "A ferry at dusk");
}

/// apply(collect()) leaves every field unchanged
#[test]
fn test_apply_collect_idempotent() {
    let mut form = FormState::default();
    form.set_text(TextField::OtherConsiderations, "Keep it sparse");
    form.set_line(LineSection::Verse2, 3, "last line").unwrap();
    form.toggle_choice("tempo", "Slow").unwrap();
    form.toggle_choice("tempo", "Fast").unwrap();
    form.toggle_choice("vocal-style", "Raspy").unwrap();

    let snapshot = form.clone();
    let record = collect(&form);
    apply(&mut form, &record);
    assert_eq!(form, snapshot);
}

/// Full brief for a complete song
#[test]
fn test_full_brief() {
    let song = assemble(&sample_record(), false);
    let brief = song.brief();

    let expected = "SONG TITLE: Harbor Lights\n\
\n\
--- SONG LYRICS ---\n\
[Intro]\n(horn)\n\
\n\
[Verse 1]\nCold rail\nwarm hands\n\
\n\
[Chorus]\nHarbor lights\nguide me\n\
\n\
[Chorus]\nHarbor lights\nguide me\n\
\n\
[Bridge]\nAlmost there\n\
\n\
[Chorus]\nHarbor lights\nguide me\n\
\n\
--- MUSICIAN & PRODUCER NOTES ---\n\
Overall Vibe: A song that feels hopeful and open.\n\
Tempo: Mid-tempo\n\
Key: D Major\n\
Instrumentation: Piano, Drums\n\
Vocalist: Female\n\
Vocal Style: Soft, Breathy\n\
\n\
Other Considerations:\n\
Foghorn sample in the outro";

    assert_eq!(brief, expected);
}

/// Placeholders never drop a templated lyric section; no placeholders never show an empty one
#[test]
fn test_placeholder_law() {
    let record = sample_record();

    let with = assemble(&record, true).lyric_sheet;
    assert_eq!(with.matches("[Chorus]").count(), 3);
    assert!(with.contains("[Verse 2]\n[Verse 2 lyrics not provided]"));

    let without = assemble(&record, false).lyric_sheet;
    assert!(!without.contains("[Verse 2]"));
    assert!(!without.contains("not provided"));
}

/// Empty record reports both required sections
#[test]
fn test_empty_record_gate() {
    let gap = check_required(&SongRecord::default()).unwrap_err();
    assert_eq!(gap.missing_names(), "Chorus, Verse 1");
}

/// Instrument order follows the button order
#[test]
fn test_instrumentation_order() {
    let mut form = FormState::default();
    form.toggle_choice("instrument", "Drums").unwrap();
    form.toggle_choice("instrument", "Piano").unwrap();
    let notes = assemble(&collect(&form), false).notes;
    assert!(notes.contains("\nInstrumentation: Piano, Drums\n"));
}

/// A truncated document is rejected before the form is touched
#[test]
fn test_truncated_document_session() {
    let mut session = Session::new(&FormLayout::default());
    session
        .handle(UserAction::SetText(TextField::Title, "Unsaved work".to_string()))
        .unwrap();
    let before = session.form().clone();

    let text = to_document(&sample_record()).unwrap();
    let truncated = text[..text.len() - 10].to_string();
    let result = session.handle(UserAction::Load(truncated));

    assert!(matches!(
        result,
        Err(SessionError::Document(DocumentError::Parse(_)))
    ));
    assert_eq!(session.form(), &before);
}

/// Documents saved with fewer line slots still load into the right positions
#[test]
fn test_legacy_document_loads() {
    let text = r#"{
  "songTitle": "Old Save",
  "lyrics": {
    "chorus": ["only one"],
    "verse1": ["", "second slot"]
  },
  "sound": {
    "instruments": ["Synth", "Theremin"],
    "key": "E Minor"
  }
}"#;

    let mut session = Session::new(&FormLayout::default());
    let report = match session.handle(UserAction::Load(text.to_string())).unwrap() {
        Outcome::Loaded(report) => report,
        other => panic!("expected a load, got {:?}", other),
    };

    let form = session.form();
    assert_eq!(form.text(TextField::Title), "Old Save");
    assert_eq!(form.lines(LineSection::Chorus), &["only one", "", "", ""]);
    assert_eq!(form.lines(LineSection::Verse1), &["", "second slot", "", ""]);
    assert_eq!(form.selected_values("instrument"), vec!["Synth"]);
    assert_eq!(form.selected_values("key"), vec!["E Minor"]);
    assert_eq!(report.unmatched_choices.len(), 1);
}

/// Custom layouts change slot counts without affecting the document format
#[test]
fn test_custom_layout() {
    let layout = FormLayout::from_yaml("slots:\n  chorus: 2\n").unwrap();
    let mut form = FormState::new(&layout);
    apply(&mut form, &sample_record());

    let record = collect(&form);
    assert_eq!(record.lyrics.chorus, lines(&["Harbor lights", "guide me"]));
    assert_eq!(record.lyrics.verse1.len(), 4);
}
