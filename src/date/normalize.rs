//! Raw date string -> canonical `YYYY-MM-DD`.
//!
//! Accepted input is three numeric fields separated by `-`, `\` or `/`, with
//! exactly one 4-character field holding the year. Day and month are told
//! apart with two signals:
//!
//! - a value above 12 cannot be a month, so it is the day
//! - otherwise the position of the year picks the convention
//!   (year first: month then day; year last: the larger value is the day)
//!
//! A year in the middle with both remaining values `<= 12` is rejected rather
//! than guessed.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Separators in detection order. The first one present in the input wins.
const SEPARATORS: [char; 3] = ['-', '\\', '/'];

const YEAR_WIDTH: usize = 4;
const MAX_MONTH: u64 = 12;
const MAX_DAY: u64 = 31;

/// Why a raw date string could not be normalized.
///
/// Every variant is deterministic: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// No separator found, or the split did not yield exactly three parts.
    #[error("malformed date '{input}': {reason}")]
    MalformedInput { input: String, reason: String },
    #[error("date part should be a number: '{0}'")]
    NonNumericField(String),
    #[error("date part cannot be negative: '{0}'")]
    NegativeField(String),
    /// Year, month or day could not be resolved (or resolved to zero).
    #[error("cannot resolve year, month and day from '{0}'")]
    IncompleteDate(String),
    #[error("invalid month: {0}")]
    InvalidMonth(u64),
    #[error("invalid day: {0}")]
    InvalidDay(u64),
}

/// Where the 4-character year field sat in the original three parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearPosition {
    First,
    Middle,
    Last,
}

impl YearPosition {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::First,
            1 => Self::Middle,
            _ => Self::Last,
        }
    }
}

/// Resolved day/month pair, before range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMonth {
    pub day: u64,
    pub month: u64,
}

/// A normalized date. Month is `1..=12` and day is `1..=31`; month length is
/// not checked, so `2021-02-31` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CanonicalDate {
    /// Parse a raw date string in any of the accepted conventions.
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let input = raw.trim();
        let separator = detect_separator(input).ok_or_else(|| DateError::MalformedInput {
            input: input.to_string(),
            reason: "no separator ('-', '\\' or '/') found".to_string(),
        })?;

        let parts: [&str; 3] = input
            .split(separator)
            .map(str::trim)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|parts: Vec<&str>| DateError::MalformedInput {
                input: input.to_string(),
                reason: format!("expected 3 parts, found {}", parts.len()),
            })?;

        let mut values = [0u64; 3];
        for (slot, part) in values.iter_mut().zip(parts) {
            *slot = parse_part(part)?;
        }

        let incomplete = || DateError::IncompleteDate(input.to_string());

        let year_index = parts
            .iter()
            .position(|p| p.len() == YEAR_WIDTH)
            .ok_or_else(incomplete)?;
        let year = values[year_index];
        let (d0, d1) = match year_index {
            0 => (values[1], values[2]),
            1 => (values[0], values[2]),
            _ => (values[0], values[1]),
        };

        let DayMonth { day, month } =
            resolve_day_month(YearPosition::from_index(year_index), d0, d1).ok_or_else(incomplete)?;

        if year == 0 || month == 0 || day == 0 {
            return Err(incomplete());
        }
        if month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day > MAX_DAY {
            return Err(DateError::InvalidDay(day));
        }

        // Bounded above: the year has 4 characters, month/day were range-checked.
        Ok(Self {
            year: year as u32,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Calendar date, if the triple exists on the calendar (e.g. not `02-30`).
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(i32::try_from(self.year).ok()?, self.month, self.day)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CanonicalDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalize a raw date string to `YYYY-MM-DD`.
pub fn normalize_date(raw: &str) -> Result<String, DateError> {
    CanonicalDate::parse(raw).map(|date| date.to_string())
}

/// Decide which of the two non-year values is the day and which the month.
///
/// `d0`/`d1` keep their left-to-right order from the input. Returns `None`
/// for the unhandled case (year in the middle, both values `<= 12`).
pub fn resolve_day_month(position: YearPosition, d0: u64, d1: u64) -> Option<DayMonth> {
    match (position, d0, d1) {
        (_, d0, d1) if d0 > MAX_MONTH => Some(DayMonth { day: d0, month: d1 }),
        (_, d0, d1) if d1 > MAX_MONTH => Some(DayMonth { day: d1, month: d0 }),
        (YearPosition::First, d0, d1) => Some(DayMonth { day: d1, month: d0 }),
        (YearPosition::Last, d0, d1) if d0 > d1 => Some(DayMonth { day: d0, month: d1 }),
        (YearPosition::Last, d0, d1) => Some(DayMonth { day: d1, month: d0 }),
        (YearPosition::Middle, _, _) => None,
    }
}

fn detect_separator(input: &str) -> Option<char> {
    SEPARATORS.into_iter().find(|sep| input.contains(*sep))
}

fn parse_part(part: &str) -> Result<u64, DateError> {
    let value: i64 = part
        .parse()
        .map_err(|_| DateError::NonNumericField(part.to_string()))?;
    u64::try_from(value).map_err(|_| DateError::NegativeField(part.to_string()))
}
