// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song brief builder.
//!
//! Collects lyric lines, idea prompts and sound choices from a song form
//! into a [`SongRecord`], renders it as a lyric sheet with musician notes,
//! and saves or reloads it as a JSON document.

pub mod assemble;
pub mod config;
pub mod document;
pub mod form;
pub mod record;
pub mod session;

pub use assemble::{assemble, check_required, generate, AssembledSong, ValidationGap};
pub use config::FormLayout;
pub use document::{from_document, to_document, DocumentError};
pub use form::{FormError, FormState};
pub use record::{apply, collect, ApplyReport, SongRecord};
pub use session::{Notice, Notifier, Outcome, Session, UserAction};
