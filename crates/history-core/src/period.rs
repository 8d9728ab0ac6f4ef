//! Calendar-month pay periods and month-range enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::error::HistoryError;

// ── Period ────────────────────────────────────────────────────────────────────

/// A single pay period (one calendar month).
///
/// Displays and parses as `"YYYY-MM"`. Ordering is chronological, which for
/// four-digit years is the same as the lexicographic order of the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// The following calendar month, rolling December over into January.
    pub fn succ(&self) -> Self {
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
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono needs a full date; pin the day to the first of the month.
        let date = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .map_err(|_| HistoryError::InvalidPeriod(s.to_string()))?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }
}

// ── MonthRange ────────────────────────────────────────────────────────────────

/// Iterator over every period from `start` to `end`, both inclusive.
///
/// Cloning the iterator restarts it from wherever the clone was taken.
#[derive(Debug, Clone)]
pub struct MonthRange {
    next: Option<Period>,
    end: Period,
}

impl Iterator for MonthRange {
    type Item = Period;

    fn next(&mut self) -> Option<Period> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.succ());
        Some(current)
    }
}

/// Enumerate the periods from `start` to `end` inclusive.
///
/// A range whose start lies after its end yields nothing.
pub fn months(start: Period, end: Period) -> MonthRange {
    MonthRange {
        next: (start <= end).then_some(start),
        end,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
