//! Accounting period types.
//!
//! The source data model keys everything on zero-padded period strings:
//! reference months are `YYYY-MM`, while revenue validity bounds may be
//! year-only (`YYYY`) or year-month (`YYYY-MM`) and are compared
//! lexicographically. These types make the formats explicit and keep the
//! comparison semantics identical to string order on the rendered form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing period strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    /// Input does not match `YYYY-MM`.
    #[error("invalid month string: {0:?} (expected YYYY-MM)")]
    InvalidMonth(String),

    /// Input does not match `YYYY` or `YYYY-MM`.
    #[error("invalid period bound: {0:?} (expected YYYY or YYYY-MM)")]
    InvalidBound(String),

    /// Month number outside 1-12.
    #[error("month out of range: {0}")]
    MonthOutOfRange(u8),
}

/// A calendar month (`YYYY-MM`), the reference-month key for all ledger
/// and expense data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: u16,
    month: u8,
}

impl Month {
    /// Creates a month, validating the month number.
    pub fn new(year: u16, month: u8) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing a calendar date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = date.year() as u16;
        #[allow(clippy::cast_possible_truncation)]
        let month = date.month() as u8;
        Self { year, month }
    }

    /// The year component.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// The month component (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// The following calendar month.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Inclusive iterator from `self` through `end`.
    ///
    /// Empty when `end < self`.
    #[must_use]
    pub fn through(self, end: Self) -> MonthRange {
        MonthRange {
            next: if self <= end { Some(self) } else { None },
            end,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || PeriodParseError::InvalidMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(bad)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(bad());
        }
        let year: u16 = year.parse().map_err(|_| bad())?;
        let month: u8 = month.parse().map_err(|_| bad())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(m: Month) -> Self {
        m.to_string()
    }
}

/// Inclusive iterator over calendar months.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<Month>,
    end: Month,
}

impl Iterator for MonthRange {
    type Item = Month;

    fn next(&mut self) -> Option<Month> {
        let current = self.next?;
        self.next = if current < self.end { Some(current.next()) } else { None };
        Some(current)
    }
}

/// A revenue validity bound: either a whole year (`YYYY`) or a specific
/// month (`YYYY-MM`).
///
/// Ordering against a [`Month`] reproduces lexicographic order on the
/// zero-padded string forms, which is what the source system compares.
/// A year-only bound therefore sorts *before* January of its own year:
/// as a start bound it covers the whole year, as an end bound it covers
/// nothing past December of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodBound {
    year: u16,
    month: Option<u8>,
}

impl PeriodBound {
    /// A year-only bound.
    #[must_use]
    pub const fn year_only(year: u16) -> Self {
        Self { year, month: None }
    }

    /// The year component.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// The month component, if this bound is month-granular.
    #[must_use]
    pub const fn month(self) -> Option<u8> {
        self.month
    }

    /// Sort key matching lexicographic order of the rendered string:
    /// a year-only bound compares below every month of its year.
    const fn key(self) -> (u16, u8) {
        (self.year, match self.month {
            Some(m) => m,
            None => 0,
        })
    }

    /// True if this bound is at or before the given month (`self <= m`).
    #[must_use]
    pub fn at_or_before(self, m: Month) -> bool {
        self.key() <= (m.year(), m.month())
    }

    /// True if this bound is at or after the given month (`self >= m`).
    #[must_use]
    pub fn at_or_after(self, m: Month) -> bool {
        self.key() >= (m.year(), m.month())
    }

    /// The latest month this bound, used as an inclusive end, still covers.
    ///
    /// A month bound covers itself; a year-only bound covers nothing
    /// within its own year, so the answer is December of the prior year.
    #[must_use]
    pub fn last_covered_month(self) -> Month {
        match self.month {
            Some(m) => Month { year: self.year, month: m },
            None => Month { year: self.year.saturating_sub(1), month: 12 },
        }
    }
}

impl From<Month> for PeriodBound {
    fn from(m: Month) -> Self {
        Self { year: m.year(), month: Some(m.month()) }
    }
}

impl PartialOrd for PeriodBound {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeriodBound {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for PeriodBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(m) => write!(f, "{:04}-{:02}", self.year, m),
            None => write!(f, "{:04}", self.year),
        }
    }
}

impl FromStr for PeriodBound {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 {
            let year: u16 = s
                .parse()
                .map_err(|_| PeriodParseError::InvalidBound(s.to_string()))?;
            return Ok(Self::year_only(year));
        }
        let month: Month = s
            .parse()
            .map_err(|_| PeriodParseError::InvalidBound(s.to_string()))?;
        Ok(month.into())
    }
}

impl TryFrom<String> for PeriodBound {
    type Error = PeriodParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PeriodBound> for String {
    fn from(b: PeriodBound) -> Self {
        b.to_string()
    }
}

/// A building's fiscal accounting window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalWindow {
    /// First bound of the fiscal window.
    pub start: PeriodBound,
    /// Last bound of the fiscal window.
    pub end: PeriodBound,
}

impl FiscalWindow {
    /// True if the month falls inside the window (inclusive bounds,
    /// lexicographic comparison semantics).
    #[must_use]
    pub fn contains(self, m: Month) -> bool {
        self.start.at_or_before(m) && self.end.at_or_after(m)
    }
}
