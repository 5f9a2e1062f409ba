//! cli/mod.rs
//! Argument parsing + command dispatch.

mod convert;
mod edit;
mod inspect;
mod selection;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::warn;

use batchtag::config::{ConfigError, Settings};
use batchtag::core::batch::BatchReport;
use batchtag::core::error::{ArtError, FormatError, SearchError};

#[derive(Parser, Debug)]
#[command(version, about = "Batch audio tag editor")]
pub struct Args {
    /// Settings file (default: platform config dir)
    #[arg(long, global = true, env = "BATCHTAG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the shared tags of the selection
    Show(SelectionArgs),

    /// Edit tags; fields that are not given are kept
    Set(edit::SetArgs),

    /// Filename -> tag
    Ftt(convert::ConvertArgs),

    /// Tag -> filename
    Ttf(convert::ConvertArgs),

    /// Remove tags from the selection
    Remove(SelectionArgs),

    /// List the configured format string presets
    Formats,
}

#[derive(clap::Args, Debug)]
pub struct SelectionArgs {
    /// Audio files and/or folders. Defaults to the last opened folder.
    pub paths: Vec<PathBuf>,

    /// Only keep files matching this search: filename text, or `!field="value";...`
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("album art: {0}")]
    Art(#[from] ArtError),

    #[error("scan failed: {0}")]
    Scan(#[from] std::io::Error),

    #[error("nothing selected (pass files or folders)")]
    EmptySelection,

    #[error("bad --filter: {0}")]
    Search(#[from] SearchError),

    #[error("no file matches --filter {0:?}")]
    NothingMatched(String),

    #[error("--filename needs exactly one file, got {0}")]
    FilenameNeedsOneFile(usize),

    #[error("no preset #{0} (see `batchtag formats`)")]
    UnknownPreset(usize),
}

pub fn run(args: Args) -> Result<ExitCode, CliError> {
    let config_path = match args.config {
        Some(p) => p,
        None => Settings::default_path()?,
    };
    let mut settings = Settings::load(&config_path)?;
    let loaded = settings.clone();

    let report = match args.command {
        Command::Show(sel) => {
            let selection = selection::load(&sel, &mut settings)?;
            inspect::show(&selection);
            None
        }
        Command::Set(set) => {
            let mut selection = selection::load(&set.selection, &mut settings)?;
            Some(edit::set(&set, &mut selection)?)
        }
        Command::Ftt(conv) => {
            let mut selection = selection::load(&conv.selection, &mut settings)?;
            let pattern = convert::pattern(&conv, &settings, convert::Direction::FilenameToTag)?;
            Some(convert::filename_to_tag(&pattern, &mut selection)?)
        }
        Command::Ttf(conv) => {
            let mut selection = selection::load(&conv.selection, &mut settings)?;
            let pattern = convert::pattern(&conv, &settings, convert::Direction::TagToFilename)?;
            Some(convert::tag_to_filename(&pattern, &mut selection)?)
        }
        Command::Remove(sel) => {
            let mut selection = selection::load(&sel, &mut settings)?;
            Some(edit::remove(&mut selection))
        }
        Command::Formats => {
            for (i, preset) in settings.format_presets.iter().enumerate() {
                println!("{i}: {preset}");
            }
            None
        }
    };

    if settings != loaded {
        if let Err(e) = settings.save(&config_path) {
            warn!(%e, "could not save settings");
        }
    }

    Ok(match report {
        Some(report) => exit_code(&report),
        None => ExitCode::SUCCESS,
    })
}

fn exit_code(report: &BatchReport) -> ExitCode {
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.path.display(), failure.error);
    }
    if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}
