//! Validated Jalali calendar date.

use crate::convert::{gregorian_to_jalali_with, jalali_to_gregorian_with};
use crate::error::CalendarError;
use crate::leap::LeapRule;
use crate::month::{days_in_month, jalali_day_of_year};

/// A Jalali `(year, month, day)` triple.
///
/// Ordering is chronological: by year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliYmd {
    year: i32,
    month: u8,
    day: u8,
}

impl JalaliYmd {
    /// Creates a new `JalaliYmd`, checking the day against the month length
    /// under `rule`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for the month.
    pub fn new(year: i32, month: u8, day: u8, rule: LeapRule) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month, rule)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a value the converter has already produced.
    pub(crate) fn from_parts(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts a Gregorian date under the default rule.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Self {
        Self::from_gregorian_with(year, month, day, LeapRule::default())
    }

    /// Converts a Gregorian date under `rule`.
    pub fn from_gregorian_with(year: i32, month: u8, day: u8, rule: LeapRule) -> Self {
        gregorian_to_jalali_with(year, month, day, rule)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 1-based day of the year (1..=366).
    pub fn day_of_year(self) -> u16 {
        jalali_day_of_year(self.month, self.day)
    }

    /// Returns the Gregorian `(year, month, day)` for this date under the
    /// default rule.
    pub fn to_gregorian(self) -> (i32, u8, u8) {
        self.to_gregorian_with(LeapRule::default())
    }

    /// Returns the Gregorian `(year, month, day)` for this date under `rule`.
    ///
    /// Use the rule the date was validated with.
    pub fn to_gregorian_with(self, rule: LeapRule) -> (i32, u8, u8) {
        jalali_to_gregorian_with(self.year, self.month, self.day, rule)
    }
}
