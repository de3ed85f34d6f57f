//! Report date ranges.

use chrono::{Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed date range `[start_date, end_date]` covered by a report.
///
/// Immutable once constructed; the start date never exceeds the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("period start {start} is after end {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// Create a period spanning `start_date..=end_date`.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, PeriodError> {
        if start_date > end_date {
            return Err(PeriodError::StartAfterEnd {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The last `days` days, ending today.
    pub fn days(days: u32) -> Self {
        let end = Local::now().date_naive();
        Self {
            start_date: end - chrono::Duration::days(i64::from(days)),
            end_date: end,
        }
    }

    /// The last `months` calendar months, ending today.
    pub fn months(months: u32) -> Self {
        let end = Local::now().date_naive();
        Self {
            // Clamped to the earliest representable date on underflow.
            start_date: end.checked_sub_months(Months::new(months)).unwrap_or(NaiveDate::MIN),
            end_date: end,
        }
    }

    /// The last `years` years, ending today.
    pub fn years(years: u32) -> Self {
        Self::months(years.saturating_mul(12))
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}
