//! Inclusive date ranges
//!
//! A `Period` is used both for queries and for the span a monthly budget covers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt;

use super::year_month::YearMonth;
use crate::error::ProrataError;

/// An inclusive date range
///
/// A period whose start is after its end is invalid: it has no days and
/// overlaps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    start: NaiveDate,
    end: NaiveDate,
}

impl Period {
    /// Create a period; inverted ranges are allowed and simply empty
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The period covering a whole calendar month
    pub fn month(year_month: YearMonth) -> Self {
        Self::new(year_month.first_day(), year_month.last_day())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// Number of days in the period, both ends included
    pub fn day_count(&self) -> i64 {
        if self.is_valid() {
            (self.end - self.start).num_days() + 1
        } else {
            0
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days present in both periods
    pub fn overlapping_days(&self, other: &Period) -> i64 {
        let overlap_start = max(self.start, other.start);
        let overlap_end = min(self.end, other.end);

        if overlap_start <= overlap_end {
            (overlap_end - overlap_start).num_days() + 1
        } else {
            0
        }
    }

    /// Parse a period string in the form "2000-03-30..2000-05-10"
    pub fn parse(s: &str) -> Result<Self, ProrataError> {
        Self::parse_with_format(s, "%Y-%m-%d")
    }

    /// Parse a "start..end" period using the given date format
    pub fn parse_with_format(s: &str, date_format: &str) -> Result<Self, ProrataError> {
        let s = s.trim();
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| ProrataError::Validation(format!("Invalid period format: {}", s)))?;

        Ok(Self::new(
            parse_date(start, date_format)?,
            parse_date(end, date_format)?,
        ))
    }
}

/// Parse a single date, reporting the offending input on failure
pub fn parse_date(s: &str, date_format: &str) -> Result<NaiveDate, ProrataError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, date_format).map_err(|e| {
        ProrataError::Validation(format!(
            "Invalid date '{}' (expected {}): {}",
            s, date_format, e
        ))
    })
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
