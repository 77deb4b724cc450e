//! Inclusive calendar date ranges.
//!
//! A [`DateRange`] is a validated `[from, to]` interval. It is `Copy` and every
//! call to [`DateRange::iter`] starts a fresh, finite, lazy walk over its dates,
//! so the same range can be enumerated as many times as needed.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive, non-empty range of calendar dates.
///
/// # Example
///
/// ```
/// use daycare_billing::calculation::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 2, 27).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
/// )
/// .unwrap();
///
/// let dates: Vec<String> = range.iter().map(|d| d.to_string()).collect();
/// assert_eq!(dates, ["2026-02-27", "2026-02-28", "2026-03-01", "2026-03-02"]);
/// assert_eq!(range.len_days(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a range, failing with `InvalidRange` when `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates a range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Creates the range from the first to the last day of a month.
    ///
    /// # Example
    ///
    /// ```
    /// use daycare_billing::calculation::DateRange;
    ///
    /// let february = DateRange::month(2028, 2).unwrap();
    /// assert_eq!(february.to().to_string(), "2028-02-29");
    /// assert!(DateRange::month(2028, 13).is_err());
    /// ```
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidMonth { year, month };
        let from = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let to = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;
        Ok(Self { from, to })
    }

    /// Creates the range covering a whole calendar year.
    pub fn year(year: i32) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidYear { year };
        let from = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let to = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        Ok(Self { from, to })
    }

    /// Returns the first day of the range.
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// Returns the last day of the range.
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Checks if a given date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns the number of calendar days in the range.
    pub fn len_days(&self) -> u32 {
        // Ranges are bounded by NaiveDate's span, which fits in u32 days.
        u32::try_from((self.to - self.from).num_days() + 1).unwrap_or(u32::MAX)
    }

    /// Returns the year and month of the first day.
    pub fn first_month(&self) -> (i32, u32) {
        (self.from.year(), self.from.month())
    }

    /// Starts a new lazy walk over every date of the range.
    pub fn iter(&self) -> DateIter {
        DateIter {
            next: Some(self.from),
            back: self.to,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`], in ascending order.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<NaiveDate>,
    back: NaiveDate,
}

impl Iterator for DateIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.back {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => usize::try_from((self.back - next).num_days() + 1).unwrap_or(0),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for DateIter {
    fn next_back(&mut self) -> Option<NaiveDate> {
        let front = self.next?;
        let current = self.back;
        if current > front {
            match current.pred_opt() {
                Some(prev) => self.back = prev,
                None => self.next = None,
            }
        } else {
            self.next = None;
        }
        Some(current)
    }
}

impl ExactSizeIterator for DateIter {}

impl std::iter::FusedIterator for DateIter {}
