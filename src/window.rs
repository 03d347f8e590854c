//! Date window for did reports
//!
//! A window is the run of consecutive days a report covers, oldest first.
//! Column `i` of every report row corresponds to `dates()[i]`.

use std::collections::HashMap;

use crate::calendar::CalendarDate;
use crate::error::{Error, Result};

/// Default number of days covered by a report
pub const DEFAULT_WINDOW_DAYS: usize = 70;

/// Consecutive calendar days ending at a given date
#[derive(Debug, Clone)]
pub struct DateWindow {
    dates: Vec<CalendarDate>,
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl DateWindow {
    /// Build a window of `size` days ending at `end` (inclusive)
    pub fn build(end: CalendarDate, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidArgument(
                "window size must be at least 1 day".to_string(),
            ));
        }

        let mut dates = Vec::with_capacity(size);
        let mut current = end;
        dates.push(current);
        for _ in 1..size {
            current = current.add_days(-1)?;
            dates.push(current);
        }
        dates.reverse();

        let labels: Vec<String> = dates.iter().map(CalendarDate::format).collect();
        let index = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        tracing::debug!(
            start = %dates[0],
            end = %end,
            days = size,
            "built date window"
        );

        Ok(Self {
            dates,
            labels,
            index,
        })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false: a window holds at least one day
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Canonical `YYYY/MM/DD` strings, in window order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Oldest day in the window
    pub fn first(&self) -> CalendarDate {
        self.dates[0]
    }

    /// Newest day in the window (the end date)
    pub fn last(&self) -> CalendarDate {
        self.dates[self.dates.len() - 1]
    }

    /// Column of a canonical date string, by exact string equality
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        CalendarDate::parse(text).expect("valid date")
    }

    #[test]
    fn build_is_oldest_first_and_ends_at_end() {
        let window = DateWindow::build(date("2013/03/11"), 3).expect("window");
        assert_eq!(
            window.labels(),
            &["2013/03/09", "2013/03/10", "2013/03/11"]
        );
        assert_eq!(window.first(), date("2013/03/09"));
        assert_eq!(window.last(), date("2013/03/11"));
    }

    #[test]
    fn build_crosses_month_boundary() {
        let window = DateWindow::build(date("2024/03/02"), 4).expect("window");
        assert_eq!(
            window.labels(),
            &["2024/02/28", "2024/02/29", "2024/03/01", "2024/03/02"]
        );
    }

    #[test]
    fn single_day_window() {
        let window = DateWindow::build(date("2013/01/01"), 1).expect("window");
        assert_eq!(window.len(), 1);
        assert_eq!(window.first(), window.last());
    }

    #[test]
    fn zero_size_rejected() {
        let err = DateWindow::build(date("2013/01/01"), 0).expect_err("empty window");
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn index_of_uses_exact_strings() {
        let window = DateWindow::build(date("2013/03/11"), DEFAULT_WINDOW_DAYS).expect("window");
        assert_eq!(window.index_of("2013/03/11"), Some(DEFAULT_WINDOW_DAYS - 1));
        assert_eq!(window.index_of("2013/03/10"), Some(DEFAULT_WINDOW_DAYS - 2));
        assert_eq!(window.index_of("2013/3/11"), None);
        assert_eq!(window.index_of("2013/03/12"), None);
    }
}
