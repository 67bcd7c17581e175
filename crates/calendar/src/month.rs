//! Month-length tables for the Jalali and Gregorian calendars.

use crate::error::CalendarError;
use crate::leap::LeapRule;

/// Days per Gregorian month in a common year (index 0 = January).
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days per Jalali month in a common year (index 0 = Farvardin).
///
/// Esfand (index 11) gains a 30th day in leap years.
pub(crate) const JALALI_DAYS_IN_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a Jalali month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
///
/// # Examples
///
/// ```
/// use jalali_calendar::{LeapRule, days_in_month};
///
/// assert_eq!(days_in_month(1387, 1, LeapRule::default()).unwrap(), 31);
/// assert_eq!(days_in_month(1387, 12, LeapRule::default()).unwrap(), 30);
/// assert_eq!(days_in_month(1388, 12, LeapRule::default()).unwrap(), 29);
/// ```
pub fn days_in_month(year: i32, month: u8, rule: LeapRule) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            month: i32::from(month),
        });
    }
    if month == 12 && rule.is_leap_year(year) {
        return Ok(30);
    }
    Ok(JALALI_DAYS_IN_MONTH[usize::from(month - 1)])
}

/// Returns the number of days in a Gregorian month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn gregorian_days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            month: i32::from(month),
        });
    }
    if month == 2 && is_gregorian_leap_year(year) {
        return Ok(29);
    }
    Ok(GREGORIAN_DAYS_IN_MONTH[usize::from(month - 1)])
}

/// Returns the 1-based day of the Jalali year for a month and day.
///
/// The month is clamped into 1..=12; the day is taken as given.
pub fn jalali_day_of_year(month: u8, day: u8) -> u16 {
    let month = usize::from(month.clamp(1, 12));
    let before: u16 = JALALI_DAYS_IN_MONTH[..month - 1]
        .iter()
        .copied()
        .map(u16::from)
        .sum();
    before + u16::from(day)
}
