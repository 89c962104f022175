//! Calendar dates that may be partial
//!
//! A [`CivilDate`] is a wall-calendar date with no time zone. The year is
//! always meaningful when the date is set; month and day may be left at `0`
//! to mean "unspecified" (a year-only or year-and-month date).

use chrono::{Datelike, NaiveDate};

/// A possibly-partial calendar date
///
/// `CivilDate::default()` is the zero date, meaning "no date recorded".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    /// Year, e.g. 2023
    pub year: i32,
    /// Month of year, 1-12, or 0 if unspecified
    pub month: i32,
    /// Day of month, 1-31, or 0 if unspecified
    pub day: i32,
}

impl CivilDate {
    /// Create a full date
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        CivilDate { year, month, day }
    }

    /// Create a year-only date
    pub fn year_only(year: i32) -> Self {
        CivilDate {
            year,
            month: 0,
            day: 0,
        }
    }

    /// Create a year-and-month date
    pub fn year_month(year: i32, month: i32) -> Self {
        CivilDate { year, month, day: 0 }
    }

    /// True for the zero date (nothing recorded)
    pub fn is_zero(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// Convert to a chrono date if every component is specified and valid
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        // month() and day() are at most 12 and 31
        CivilDate {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
        }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.month, self.day) {
            (0, _) => write!(f, "{:04}", self.year),
            (m, 0) => write!(f, "{:04}-{:02}", self.year, m),
            (m, d) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
        }
    }
}
