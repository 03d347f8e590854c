//! Task log file for did
//!
//! The log is append-only plain text, one `YYYY/MM/DD task` entry per line.
//! Reports read it in a single forward pass; logging a task appends one line.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::calendar::CalendarDate;
use crate::error::{Error, Result};

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "did.txt";

/// Result of opening the log for a report
pub enum LogSource {
    /// The log exists; entries are read from this reader
    Existing(BufReader<File>),
    /// The log was missing and an empty file was created
    Created,
}

/// Handle on the task log file
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the log for reading, creating an empty one on first use
    pub fn open_for_report(&self) -> Result<LogSource> {
        match File::open(&self.path) {
            Ok(file) => Ok(LogSource::Existing(BufReader::new(file))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.create_empty()?;
                tracing::debug!(path = %self.path.display(), "created empty task log");
                Ok(LogSource::Created)
            }
            Err(source) => Err(Error::UnreadableLog {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Append one entry for `date`, returning the line written (without newline)
    pub fn append(&self, date: CalendarDate, task: &str) -> Result<String> {
        let entry = format_entry(date, task)?;

        self.create_parent().map_err(|source| self.unwritable(source))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.unwritable(source))?;
        writeln!(file, "{entry}").map_err(|source| self.unwritable(source))?;
        file.sync_all().map_err(|source| self.unwritable(source))?;

        tracing::debug!(path = %self.path.display(), entry = %entry, "appended task entry");
        Ok(entry)
    }

    fn create_empty(&self) -> Result<()> {
        let uncreatable = |source: io::Error| Error::UncreatableLog {
            path: self.path.clone(),
            source,
        };
        self.create_parent().map_err(uncreatable)?;
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(uncreatable)?;
        Ok(())
    }

    fn create_parent(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn unwritable(&self, source: io::Error) -> Error {
        Error::UnwritableLog {
            path: self.path.clone(),
            source,
        }
    }
}

/// Format a log line for `task` on `date`
///
/// Task text must be non-blank and fit on one line. Trailing whitespace is
/// dropped, since reports would not read it back.
pub fn format_entry(date: CalendarDate, task: &str) -> Result<String> {
    let task = task.trim_end();
    if task.trim_start().is_empty() {
        return Err(Error::InvalidArgument("task cannot be empty".to_string()));
    }
    if task.contains(['\n', '\r']) {
        return Err(Error::InvalidArgument(
            "task cannot contain line breaks".to_string(),
        ));
    }
    Ok(format!("{date} {task}"))
}
