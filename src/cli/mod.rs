//! Command-line interface for did
//!
//! `did` has no subcommands: with no task it prints the report, with a task
//! it logs that task. Each mode lives in its own submodule.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{validate_days, Config};
use crate::error::{Error, Result};
use crate::log::LogFile;
use crate::render::ReportLayout;

mod add;
mod report;

pub use add::AddOptions;
pub use report::ReportOptions;

/// did - Simple command-line task logging
///
/// Logs tasks to a plain text file and shows how often each was done
/// over the last weeks.
#[derive(Parser, Debug)]
#[command(name = "did")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    did                    Show report\n  \
    did -d 2013/03/11      Show report ending at date\n  \
    did email              Log task as done today\n  \
    did email yest         Log task as done yesterday")]
pub struct Cli {
    /// Show report ending at date
    #[arg(short = 'd', long = "date", value_name = "YYYY/MM/DD", conflicts_with = "task")]
    pub date: Option<String>,

    /// Task to log as done
    #[arg(value_name = "TASK")]
    pub task: Option<String>,

    /// Pass `yest` to log the task as done yesterday
    #[arg(value_name = "WHEN", requires = "task")]
    pub when: Option<String>,

    /// Path to the task log (defaults to did.txt)
    #[arg(long, env = "DID_FILE")]
    pub file: Option<PathBuf>,

    /// Number of days in the report
    #[arg(long)]
    pub days: Option<usize>,

    /// Path to a config file (defaults to ./.did.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Name of the mode this invocation runs, for error reporting
    pub fn command_name(&self) -> &'static str {
        if self.task.is_some() {
            "add"
        } else {
            "report"
        }
    }

    /// Run the CLI command
    pub fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_from_dir(&std::env::current_dir()?)?,
        };

        let log = LogFile::new(
            self.file
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.log.file)),
        );

        match self.task {
            Some(task) => add::run(AddOptions {
                task,
                when: self.when,
                log,
                json: self.json,
                quiet: self.quiet,
            }),
            None => {
                let days = self.days.unwrap_or(config.report.days);
                validate_days(days)
                    .map_err(|msg| Error::InvalidArgument(format!("--days {msg}")))?;
                report::run(ReportOptions {
                    end: self.date,
                    days,
                    layout: ReportLayout {
                        label_width: config.report.label_width,
                    },
                    log,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
        }
    }
}
