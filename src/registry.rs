//! Task registry and log aggregation
//!
//! The log is a plain text file with one entry per line:
//!
//! ```text
//! 2013/03/11 email
//! 2013/03/11 write report
//! ```
//!
//! The first 10 characters are the date, one separator character follows,
//! and the rest of the line is the task name. [`aggregate`] folds the lines
//! falling inside a [`DateWindow`] into a [`TaskRegistry`] of per-day counts.

use std::io::BufRead;

use serde::Serialize;

use crate::calendar::DATE_LEN;
use crate::error::{Error, Result};
use crate::window::DateWindow;

/// One distinct task and its per-day occurrence counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    name: String,
    counts: Vec<u32>,
}

impl TaskRecord {
    fn new(name: &str, days: usize) -> Self {
        Self {
            name: name.to_string(),
            counts: vec![0; days],
        }
    }

    /// Full task name, as written in the log
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Occurrences per window column, oldest first
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Occurrences across the whole window
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    /// Name cut to at most `width` characters, for the report label column
    pub fn label(&self, width: usize) -> String {
        self.name.chars().take(width).collect()
    }
}

/// Tasks seen in one report window, kept in ascending name order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRegistry {
    days: usize,
    records: Vec<TaskRecord>,
}

impl TaskRegistry {
    /// Empty registry whose records track `days` columns
    pub fn new(days: usize) -> Self {
        Self {
            days,
            records: Vec::new(),
        }
    }

    /// Count one occurrence of `name` at window column `index`
    ///
    /// Unknown names get a zeroed record inserted in front of the first
    /// record with a greater name. Returns the updated count.
    pub fn record(&mut self, name: &str, index: usize) -> Result<u32> {
        if index >= self.days {
            return Err(Error::InvalidArgument(format!(
                "column {index} outside a {}-day window",
                self.days
            )));
        }

        let pos = match self
            .records
            .binary_search_by(|record| record.name.as_str().cmp(name))
        {
            Ok(pos) => pos,
            Err(pos) => {
                self.records.insert(pos, TaskRecord::new(name, self.days));
                pos
            }
        };

        let count = &mut self.records[pos].counts[index];
        *count = count.saturating_add(1);
        Ok(*count)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TaskRecord> {
        self.records
            .binary_search_by(|record| record.name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.records[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(TaskRecord::name).collect()
    }
}

impl<'a> IntoIterator for &'a TaskRegistry {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Split a log line into its date field and task name
///
/// Leading and trailing whitespace is dropped first. Returns `None` for blank
/// lines, lines too short to hold a date, and lines without task text.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_end().trim_start();
    if line.is_empty() {
        return None;
    }

    let date = line.get(..DATE_LEN)?;
    let mut rest = line[DATE_LEN..].chars();
    rest.next()?;
    let task = rest.as_str();
    if task.is_empty() {
        return None;
    }
    Some((date, task))
}

/// Fold log lines into a registry of per-day task counts
///
/// Lines whose date is not in `window`, and lines that cannot be split into
/// a date and a task, are skipped. Read failures are returned as errors.
pub fn aggregate<R: BufRead>(mut reader: R, window: &DateWindow) -> Result<TaskRegistry> {
    let mut registry = TaskRegistry::new(window.len());
    let mut buf = Vec::new();
    let mut lines_read = 0usize;
    let mut matched = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines_read += 1;

        let line = String::from_utf8_lossy(&buf);
        let Some((date, task)) = split_entry(&line) else {
            continue;
        };
        let Some(index) = window.index_of(date) else {
            continue;
        };

        registry.record(task, index)?;
        matched += 1;
    }

    tracing::debug!(
        lines = lines_read,
        matched,
        skipped = lines_read - matched,
        tasks = registry.len(),
        "aggregated task log"
    );

    Ok(registry)
}
