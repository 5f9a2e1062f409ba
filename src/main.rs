//! batchtag CLI
//!
//! # What this program is
//! A command-line front end for the batchtag engine: select audio files (or folders),
//! look at their shared tags, and edit / convert them in one go.
//!
//! # Mental model
//! - Every command starts by building a *selection* (files + scanned folders).
//! - `show` prints the aggregated view: common values, or `<keep>` where files differ.
//! - `set` edits; any field you don't pass is kept as-is on every file.
//! - `ftt` / `ttf` convert filenames to tags and back with a `%field%` format string.
//!
//! # Logging
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` or pass `-v`.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let default_filter = if args.verbose {
        "batchtag=debug"
    } else {
        "batchtag=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
