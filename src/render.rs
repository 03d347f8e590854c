//! Report rendering for did
//!
//! A report is a bordered grid with one row per task and one column per
//! window day, followed by three label rows:
//!
//! ```text
//!       #####
//! email #-@2# email (3)
//!       ##### (3)
//!  2013  901
//! 03-03  011
//!        SSM
//! ```
//!
//! The first label row carries the year and the ones digit of each day, the
//! second the month span and the tens digit, the third the weekday initial.

use serde::Serialize;

use crate::calendar::CalendarDate;
use crate::registry::{TaskRecord, TaskRegistry};
use crate::window::DateWindow;

/// Grid glyph for a day with no occurrences
pub const OFF: char = '-';

/// Grid glyph for a day with exactly one occurrence
pub const ON: char = '@';

/// Frame character around the grid
pub const BORDER: char = '#';

/// Glyph for counts too large to show as a digit or letter
pub const OVERFLOW: char = '+';

/// Default width of the task label column
pub const DEFAULT_LABEL_WIDTH: usize = 5;

/// Narrowest label column; wide enough for the year and `MM-MM` labels
pub const MIN_COLUMN_WIDTH: usize = 5;

/// Column layout for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLayout {
    /// Characters of the task name shown left of the grid
    pub label_width: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl ReportLayout {
    /// Width of the label column; never narrower than the date labels
    pub fn column_width(&self) -> usize {
        self.label_width.max(MIN_COLUMN_WIDTH)
    }

    fn margin(&self) -> String {
        " ".repeat(self.column_width() + 1)
    }
}

/// Single-character glyph for a per-day occurrence count
pub fn count_glyph(count: u32) -> char {
    match count {
        0 => OFF,
        1 => ON,
        2..=9 => char::from(b'2' + (count - 2) as u8),
        10..=35 => char::from(b'A' + (count - 10) as u8),
        _ => OVERFLOW,
    }
}

/// Glyph string for one task across the window
pub fn glyph_row(record: &TaskRecord) -> String {
    record.counts().iter().map(|&count| count_glyph(count)).collect()
}

/// Render the full report, one string per output line
pub fn render_report(
    window: &DateWindow,
    registry: &TaskRegistry,
    layout: ReportLayout,
) -> Vec<String> {
    let width = layout.column_width();
    let border = border_row(window.len(), layout);
    let mut lines = Vec::with_capacity(registry.len() + 5);

    lines.push(border.clone());
    for record in registry {
        lines.push(format!(
            "{label:>width$} {BORDER}{glyphs}{BORDER} {name} ({total})",
            label = record.label(layout.label_width),
            glyphs = glyph_row(record),
            name = record.name(),
            total = record.total(),
        ));
    }
    lines.push(format!("{border} ({})", window.len()));

    let dates = window.dates();
    let first = window.first();
    let last = window.last();

    let year = format!("{:04}", first.year());
    let ones: String = dates.iter().map(|date| day_digit(date, 1)).collect();
    lines.push(format!("{year:>width$}  {ones}"));

    let months = format!("{:02}-{:02}", first.month(), last.month());
    let tens: String = dates.iter().map(|date| day_digit(date, 10)).collect();
    lines.push(format!("{months:>width$}  {tens}"));

    let weekdays: String = dates.iter().map(CalendarDate::weekday_initial).collect();
    lines.push(format!("{} {weekdays}", layout.margin()));

    lines
}

fn border_row(days: usize, layout: ReportLayout) -> String {
    let mut row = layout.margin();
    row.extend(std::iter::repeat(BORDER).take(days + 2));
    row
}

/// Digit of the day-of-month at `place` (1 or 10)
fn day_digit(date: &CalendarDate, place: u32) -> char {
    char::from(b'0' + ((date.day() / place) % 10) as u8)
}

/// Serializable view of a report, used for JSON output
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub days: usize,
    pub tasks: Vec<TaskSummary<'a>>,
}

/// Serializable view of one task row
#[derive(Debug, Serialize)]
pub struct TaskSummary<'a> {
    pub name: &'a str,
    pub total: u64,
    pub glyphs: String,
    pub counts: &'a [u32],
}

impl<'a> ReportSummary<'a> {
    pub fn new(window: &DateWindow, registry: &'a TaskRegistry) -> Self {
        Self {
            start: window.first(),
            end: window.last(),
            days: window.len(),
            tasks: registry
                .iter()
                .map(|record| TaskSummary {
                    name: record.name(),
                    total: record.total(),
                    glyphs: glyph_row(record),
                    counts: record.counts(),
                })
                .collect(),
        }
    }
}
