// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};

use songbrief::assemble;
use songbrief::{
    check_required, collect, to_document, AssembledSong, FormLayout, FormState, Outcome, Session,
    SongRecord, UserAction,
};

/// Assemble song lyrics and production notes from saved song documents
#[derive(Debug, Parser)]
#[command(name = "songbrief", version)]
struct Cli {
    /// Form layout file (YAML or TOML); the built-in layout is used otherwise
    #[arg(short, long, global = true)]
    layout: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the assembled brief for a song document
    Assemble {
        document: PathBuf,
        /// Assemble even when required sections are missing
        #[arg(long)]
        anyway: bool,
    },
    /// Check that the required sections have lyrics
    Check { document: PathBuf },
    /// Write the brief next to the document as <title>_brief.txt
    Brief {
        document: PathBuf,
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        #[arg(long)]
        anyway: bool,
    },
    /// Load a document into the form and save it again
    Normalize {
        document: PathBuf,
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Write an empty song document
    Template {
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the form layout
    Layout {
        #[arg(short, long, value_enum, default_value_t = LayoutFormat::Yaml)]
        format: LayoutFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutFormat {
    Yaml,
    Toml,
}

fn load_layout(path: Option<&Path>) -> Result<FormLayout> {
    match path {
        Some(path) => {
            debug!(?path, "loading layout");
            FormLayout::load(path)
        }
        None => Ok(FormLayout::default()),
    }
}

/// Read a document and replay it through an editing session
async fn load_into_form(path: &Path, layout: &FormLayout) -> Result<FormState> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read song document: {:?}", path))?;

    let mut session = Session::new(layout);
    let outcome = session
        .handle(UserAction::Load(text))
        .with_context(|| format!("Failed to load song document: {:?}", path))?;
    if let Outcome::Loaded(report) = outcome {
        if report.dropped_lines > 0 || !report.unmatched_choices.is_empty() {
            warn!(
                dropped_lines = report.dropped_lines,
                unmatched = report.unmatched_choices.len(),
                "document does not fit the form layout"
            );
        }
    }
    Ok(session.form().clone())
}

/// Assemble, asking for `--anyway` when required sections are missing
fn assemble_record(record: &SongRecord, anyway: bool) -> Result<AssembledSong> {
    match check_required(record) {
        Ok(()) => Ok(assemble::assemble(record, false)),
        Err(gap) if anyway => {
            warn!(missing = %gap.missing_names(), "assembling with placeholders");
            Ok(assemble::assemble(record, true))
        }
        Err(gap) => bail!("{} Re-run with --anyway to assemble what you have.", gap),
    }
}

async fn write_output(out_dir: Option<PathBuf>, file_name: &str, contents: String) -> Result<()> {
    let dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(file_name);
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    {
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .init()
    }

    let cli = Cli::parse();
    let layout = load_layout(cli.layout.as_deref())?;

    match cli.command {
        Command::Assemble { document, anyway } => {
            let record = collect(&load_into_form(&document, &layout).await?);
            let song = assemble_record(&record, anyway)?;
            println!("{}", song.brief());
        }
        Command::Check { document } => {
            let record = collect(&load_into_form(&document, &layout).await?);
            match check_required(&record) {
                Ok(()) => println!("All required sections are present."),
                Err(gap) => bail!("{}", gap),
            }
        }
        Command::Brief {
            document,
            out_dir,
            anyway,
        } => {
            let record = collect(&load_into_form(&document, &layout).await?);
            let song = assemble_record(&record, anyway)?;
            let file_name = assemble::brief_file_name(&record.title);
            write_output(out_dir, &file_name, song.brief()).await?;
        }
        Command::Normalize { document, out_dir } => {
            let record = collect(&load_into_form(&document, &layout).await?);
            let file_name = assemble::document_file_name(&record.title);
            write_output(out_dir, &file_name, to_document(&record)?).await?;
        }
        Command::Template { out_dir } => {
            let record = collect(&FormState::new(&layout));
            let file_name = assemble::document_file_name(&record.title);
            write_output(out_dir, &file_name, to_document(&record)?).await?;
        }
        Command::Layout { format } => {
            let text = match format {
                LayoutFormat::Yaml => layout.to_yaml()?,
                LayoutFormat::Toml => layout.to_toml()?,
            };
            print!("{}", text);
        }
    }

    Ok(())
}
