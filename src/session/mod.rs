// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! User action dispatch.
//!
//! A [`Session`] owns the form and turns discrete user actions into calls
//! on the record, assembler and document layers. Feedback meant for a
//! toast-style surface goes through the [`Notifier`] trait.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assemble::{self, AssembledSong, ValidationGap};
use crate::config::FormLayout;
use crate::document::{self, DocumentError};
use crate::form::{FormError, FormState, LineSection, TextField};
use crate::record::{self, ApplyReport};

/// Short user-facing messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A document was loaded into the form
    Loaded,
    /// A document could not be parsed
    ParseFailed,
    /// The brief was handed to the clipboard
    Copied,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Loaded => f.write_str("Song data loaded successfully!"),
            Notice::ParseFailed => f.write_str("Error: Could not parse JSON file."),
            Notice::Copied => f.write_str("Copied!"),
        }
    }
}

/// Surface that shows notices to the user
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Notifier that writes notices to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::ParseFailed => warn!("{}", notice),
            _ => info!("{}", notice),
        }
    }
}

/// Discrete user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Edit a text input
    SetText(TextField, String),
    /// Edit one lyric line slot
    SetLine(LineSection, usize, String),
    /// Click a sound-choice button
    ToggleChoice { group: String, value: String },
    /// Assemble, checking required sections first
    Generate,
    /// Assemble with placeholders after a validation gap
    AssembleAnyway,
    /// Dismiss a validation gap
    KeepEditing,
    /// Clear the whole form
    StartOver,
    /// Export the song document
    Save,
    /// Load a song document from text
    Load(String),
    /// Copy the brief
    CopyBrief,
    /// Export the brief as a text file
    DownloadBrief,
}

/// Result of handling an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Form state changed
    Updated,
    /// Song was assembled
    Assembled(AssembledSong),
    /// Required sections are missing; ask whether to assemble anyway
    NeedsConfirmation(ValidationGap),
    /// Pending validation gap was dismissed
    Dismissed,
    /// A file should be written with these contents
    Export { file_name: String, contents: String },
    /// Text for the clipboard
    Clipboard(String),
    /// Document was applied to the form
    Loaded(ApplyReport),
}

/// Errors from handling an action; the form is left as it was
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Editing session for a single song form
pub struct Session<N: Notifier = LogNotifier> {
    form: FormState,
    notifier: N,
    pending_gap: Option<ValidationGap>,
    last_output: Option<AssembledSong>,
}

impl Session<LogNotifier> {
    /// Create a session that logs its notices
    pub fn new(layout: &FormLayout) -> Self {
        Self::with_notifier(layout, LogNotifier)
    }
}

impl<N: Notifier> Session<N> {
    /// Create a session with a custom notifier
    pub fn with_notifier(layout: &FormLayout, notifier: N) -> Self {
        Self {
            form: FormState::new(layout),
            notifier,
            pending_gap: None,
            last_output: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validation gap awaiting a decision, if any
    pub fn pending_gap(&self) -> Option<&ValidationGap> {
        self.pending_gap.as_ref()
    }

    /// Most recently assembled song
    pub fn last_output(&self) -> Option<&AssembledSong> {
        self.last_output.as_ref()
    }

    /// Handle a single user action
    pub fn handle(&mut self, action: UserAction) -> Result<Outcome, SessionError> {
        debug!(?action, "handling action");
        match action {
            UserAction::SetText(field, value) => {
                self.form.set_text(field, value);
                Ok(Outcome::Updated)
            }
            UserAction::SetLine(section, index, value) => {
                self.form.set_line(section, index, value)?;
                Ok(Outcome::Updated)
            }
            UserAction::ToggleChoice { group, value } => {
                self.form.toggle_choice(&group, &value)?;
                Ok(Outcome::Updated)
            }
            UserAction::Generate => Ok(self.generate()),
            UserAction::AssembleAnyway => Ok(self.assemble(true)),
            UserAction::KeepEditing => {
                self.pending_gap = None;
                Ok(Outcome::Dismissed)
            }
            UserAction::StartOver => {
                self.start_over();
                Ok(Outcome::Updated)
            }
            UserAction::Save => self.save(),
            UserAction::Load(text) => self.load(&text),
            UserAction::CopyBrief => {
                let brief = self.brief();
                self.notifier.notify(Notice::Copied);
                Ok(Outcome::Clipboard(brief))
            }
            UserAction::DownloadBrief => Ok(Outcome::Export {
                file_name: assemble::brief_file_name(self.form.text(TextField::Title)),
                contents: self.brief(),
            }),
        }
    }

    fn generate(&mut self) -> Outcome {
        self.pending_gap = None;
        let song = record::collect(&self.form);
        match assemble::check_required(&song) {
            Ok(()) => self.assemble(false),
            Err(gap) => {
                debug!(missing = %gap.missing_names(), "required sections missing");
                self.pending_gap = Some(gap.clone());
                Outcome::NeedsConfirmation(gap)
            }
        }
    }

    fn assemble(&mut self, use_placeholders: bool) -> Outcome {
        self.pending_gap = None;
        let song = assemble::assemble(&record::collect(&self.form), use_placeholders);
        info!(title = %song.title, use_placeholders, "assembled song");
        self.last_output = Some(song.clone());
        Outcome::Assembled(song)
    }

    fn start_over(&mut self) {
        self.form.start_over();
        self.pending_gap = None;
        self.last_output = None;
    }

    fn save(&self) -> Result<Outcome, SessionError> {
        let song = record::collect(&self.form);
        let contents = document::to_document(&song)?;
        let file_name = assemble::document_file_name(&song.title);
        info!(%file_name, "exported song document");
        Ok(Outcome::Export {
            file_name,
            contents,
        })
    }

    fn load(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let song = match document::from_document(text) {
            Ok(song) => song,
            Err(err) => {
                warn!(error = %err, "rejected song document");
                self.notifier.notify(Notice::ParseFailed);
                return Err(err.into());
            }
        };

        self.pending_gap = None;
        self.last_output = None;
        let report = record::apply(&mut self.form, &song);
        self.notifier.notify(Notice::Loaded);
        Ok(Outcome::Loaded(report))
    }

    /// Brief built from the current title and the last assembled song
    pub fn brief(&self) -> String {
        let (lyric_sheet, notes) = match &self.last_output {
            Some(song) => (song.lyric_sheet.as_str(), song.notes.as_str()),
            None => ("", ""),
        };
        assemble::render_brief(self.form.text(TextField::Title), lyric_sheet, notes)
    }
}
