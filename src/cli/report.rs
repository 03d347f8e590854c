//! did report command implementation
//!
//! Builds the date window, folds the log into a task registry and prints the
//! activity grid. Nothing is printed until the whole report is rendered.

use crate::calendar::CalendarDate;
use crate::error::{Error, Result};
use crate::log::{LogFile, LogSource};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::registry::{aggregate, TaskRegistry};
use crate::render::{render_report, ReportLayout, ReportSummary};
use crate::window::DateWindow;

/// Banner printed above the report
pub const BANNER: &str = "did - Simple command-line task logging (\"did -h\" for usage)";

/// Options for the report command
pub struct ReportOptions {
    /// End date as typed by the user; today when absent
    pub end: Option<String>,
    pub days: usize,
    pub layout: ReportLayout,
    pub log: LogFile,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct ReportData<'a> {
    file: String,
    created: bool,
    #[serde(flatten)]
    report: ReportSummary<'a>,
}

pub fn run(options: ReportOptions) -> Result<()> {
    let end = match options.end.as_deref() {
        Some(text) => CalendarDate::parse(text)?,
        None => CalendarDate::today(),
    };
    let window = DateWindow::build(end, options.days)?;

    let (registry, created) = match options.log.open_for_report()? {
        LogSource::Existing(reader) => {
            let registry = aggregate(reader, &window).map_err(|err| match err {
                Error::Io(source) => Error::UnreadableLog {
                    path: options.log.path().to_path_buf(),
                    source,
                },
                other => other,
            })?;
            (registry, false)
        }
        LogSource::Created => (TaskRegistry::new(window.len()), true),
    };

    let lines = render_report(&window, &registry, options.layout);

    let mut human = HumanOutput::new();
    if !options.quiet {
        human.push_line(BANNER);
        human.push_line("");
        if created {
            human.push_line(format!("Creating file: {}", options.log.path().display()));
        }
    }
    human.extend_lines(lines);

    let data = ReportData {
        file: options.log.path().display().to_string(),
        created,
        report: ReportSummary::new(&window, &registry),
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: false,
        },
        "report",
        &data,
        Some(&human),
    )
}
