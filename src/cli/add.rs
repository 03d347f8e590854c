//! did add command implementation
//!
//! Appends one `YYYY/MM/DD task` line to the log for today or yesterday.

use crate::calendar::CalendarDate;
use crate::error::{Error, Result};
use crate::log::LogFile;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for logging a task
pub struct AddOptions {
    pub task: String,
    /// Optional second word; anything starting with `yest` means yesterday
    pub when: Option<String>,
    pub log: LogFile,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    file: String,
    date: CalendarDate,
    task: String,
    entry: String,
}

pub fn run(options: AddOptions) -> Result<()> {
    let date = resolve_date(options.when.as_deref())?;
    let task = options.task.trim_end();
    let entry = options.log.append(date, task)?;

    let mut human = HumanOutput::new();
    human.push_line(format!("\"{entry}\" added"));

    let report = AddReport {
        file: options.log.path().display().to_string(),
        date,
        task: task.to_string(),
        entry,
    };

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &report,
        Some(&human),
    )
}

fn resolve_date(when: Option<&str>) -> Result<CalendarDate> {
    match when {
        None => Ok(CalendarDate::today()),
        Some(word) if word.starts_with("yest") => CalendarDate::yesterday(),
        Some(word) => Err(Error::InvalidArgument(format!(
            "unexpected '{word}': only 'yest' may follow the task"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_date_defaults_to_today() {
        assert_eq!(resolve_date(None).expect("today"), CalendarDate::today());
    }

    #[test]
    fn resolve_date_accepts_yest_prefix() {
        let yesterday = CalendarDate::today().add_days(-1).expect("yesterday");
        assert_eq!(resolve_date(Some("yest")).expect("yest"), yesterday);
        assert_eq!(resolve_date(Some("yesterday")).expect("yesterday"), yesterday);
    }

    #[test]
    fn resolve_date_rejects_other_words() {
        let err = resolve_date(Some("tomorrow")).expect_err("invalid");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
