//! did - Simple command-line task logging
//!
//! This library provides the core functionality for the did CLI tool: an
//! append-only text log of dated tasks and a fixed-width activity report.
//!
//! # Core Concepts
//!
//! - **Log**: plain text, one `YYYY/MM/DD task` entry per line
//! - **Window**: the run of consecutive days a report covers (70 by default)
//! - **Registry**: distinct tasks in name order with per-day counts
//! - **Report**: a bordered grid, one glyph per task per day, with date labels
//!
//! # Module Organization
//!
//! - `calendar`: Date parsing, formatting, weekday and day arithmetic
//! - `window`: Date window construction
//! - `registry`: Task registry and log aggregation
//! - `render`: Report grid rendering
//! - `log`: Log file reading and appending
//! - `config`: Configuration loading from `.did.toml`
//! - `output`: Human and JSON output
//! - `cli`: Command-line interface using clap
//! - `error`: Error types and result aliases

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod output;
pub mod registry;
pub mod render;
pub mod window;

pub use error::{Error, Result};
