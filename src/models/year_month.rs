//! Calendar month identifier
//!
//! Budgets are keyed by a six-digit `YYYYMM` token, e.g. "200004" for April 2000.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProrataError;

/// A year and month (1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, rejecting months outside 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, ProrataError> {
        if !(1..=12).contains(&month) {
            return Err(ProrataError::InvalidYearMonth(format!(
                "{:04}{:02}",
                year, month
            )));
        }
        // Reject years chrono cannot represent
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ProrataError::InvalidYearMonth(format!(
                "{:04}{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a month token
    ///
    /// Formats:
    /// - Token: "200004"
    /// - Dashed: "2000-04"
    pub fn parse(s: &str) -> Result<Self, ProrataError> {
        let s = s.trim();
        let invalid = || ProrataError::InvalidYearMonth(s.to_string());

        let (year_str, month_str) = match s.split_once('-') {
            Some((year, month)) if year.len() == 4 && month.len() == 2 => (year, month),
            Some(_) => return Err(invalid()),
            None if s.len() == 6 && s.is_ascii() => s.split_at(4),
            None => return Err(invalid()),
        };

        if !year_str.bytes().chain(month_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        // Validated in new(), the fallback is unreachable
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or_else(|| {
                // December of the last representable year
                NaiveDate::from_ymd_opt(self.year, 12, 31).unwrap_or(NaiveDate::MAX)
            })
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-friendly label, e.g. "April 2000"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ProrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ProrataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
