//! batchtag
//!
//! Batch audio tag editing:
//! - transcode between filenames and tags with `%field%` format strings
//! - edit many files at once: common values are shown, differing ones are kept
//!
//! `core` is the engine (no UI, no terminal output). `config` holds user settings.

pub mod config;
pub mod core;
