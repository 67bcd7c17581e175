//! Day-count conversion between the Gregorian and Jalali calendars.
//!
//! Both directions go through an absolute day number. Gregorian days are
//! counted from 1600-01-01 and Jalali days from 979-01-01; the two origins are
//! [`EPOCH_OFFSET_DAYS`] apart.
//!
//! Jalali year lengths come from a [`LeapRule`], so a date that is valid
//! under a rule converts and converts back exactly under the same rule.

use crate::date::JalaliYmd;
use crate::leap::LeapRule;
use crate::month::{GREGORIAN_DAYS_IN_MONTH, JALALI_DAYS_IN_MONTH, is_gregorian_leap_year};

const GREGORIAN_EPOCH_YEAR: i64 = 1600;
const JALALI_EPOCH_YEAR: i64 = 979;

/// Days between 1600-01-01 (Gregorian) and 979-01-01 (Jalali).
const EPOCH_OFFSET_DAYS: i64 = 80;

/// 365 * 400 + 400 / 4 - 400 / 100 + 400 / 400
const GREGORIAN_400_YEARS: i64 = 146_097;
/// 365 * 100 + 100 / 4 - 100 / 100
const GREGORIAN_100_YEARS: i64 = 36_524;
/// 365 * 4 + 4 / 4
const FOUR_YEARS: i64 = 1_461;
/// 365 * 128 + 31
const JALALI_128_YEARS: i64 = 46_751;

fn gregorian_day_number(year: i32, month: u8, day: u8) -> i64 {
    let gy = i64::from(year) - GREGORIAN_EPOCH_YEAR;
    let mut days = 365 * gy + (gy + 3).div_euclid(4) - (gy + 99).div_euclid(100)
        + (gy + 399).div_euclid(400);
    let m = usize::from(month.clamp(1, 12));
    days += GREGORIAN_DAYS_IN_MONTH[..m - 1]
        .iter()
        .copied()
        .map(i64::from)
        .sum::<i64>();
    if m > 2 && is_gregorian_leap_year(year) {
        days += 1;
    }
    days + i64::from(day) - 1
}

/// Day number of Farvardin 1 of `year`.
fn jalali_year_start(year: i64, rule: LeapRule) -> i64 {
    365 * (year - JALALI_EPOCH_YEAR) + rule.leap_years_between(JALALI_EPOCH_YEAR, year)
}

fn jalali_day_number(year: i32, month: u8, day: u8, rule: LeapRule) -> i64 {
    let mut days = jalali_year_start(i64::from(year), rule);
    let m = usize::from(month.clamp(1, 12));
    days += JALALI_DAYS_IN_MONTH[..m - 1]
        .iter()
        .copied()
        .map(i64::from)
        .sum::<i64>();
    days + i64::from(day) - 1
}

fn gregorian_from_day_number(day_number: i64) -> (i32, u8, u8) {
    let mut g = day_number.rem_euclid(GREGORIAN_400_YEARS);
    let mut gy = GREGORIAN_EPOCH_YEAR + 400 * day_number.div_euclid(GREGORIAN_400_YEARS);

    // The first century of each 400-year block holds the divisible-by-400 leap year.
    let mut leap = true;
    if g > GREGORIAN_100_YEARS {
        g -= 1;
        gy += 100 * (g / GREGORIAN_100_YEARS);
        g %= GREGORIAN_100_YEARS;
        if g >= 365 {
            g += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (g / FOUR_YEARS);
    g %= FOUR_YEARS;

    if g >= 366 {
        leap = false;
        g -= 1;
        gy += g / 365;
        g %= 365;
    }

    let mut month = 0;
    while month < 11 {
        let len = i64::from(GREGORIAN_DAYS_IN_MONTH[month]) + i64::from(month == 1 && leap);
        if g < len {
            break;
        }
        g -= len;
        month += 1;
    }

    (gy as i32, month as u8 + 1, g as u8 + 1)
}

fn jalali_from_day_number(day_number: i64, rule: LeapRule) -> JalaliYmd {
    // Estimate from the mean year, then settle on the year that holds the day.
    let mut jy = JALALI_EPOCH_YEAR + (day_number * 128).div_euclid(JALALI_128_YEARS);
    while jalali_year_start(jy, rule) > day_number {
        jy -= 1;
    }
    while jalali_year_start(jy + 1, rule) <= day_number {
        jy += 1;
    }

    let mut j = day_number - jalali_year_start(jy, rule);
    let mut month = 0;
    while month < 11 && j >= i64::from(JALALI_DAYS_IN_MONTH[month]) {
        j -= i64::from(JALALI_DAYS_IN_MONTH[month]);
        month += 1;
    }

    JalaliYmd::from_parts(jy as i32, month as u8 + 1, j as u8 + 1)
}

/// Converts a Gregorian date to the Jalali calendar under the default
/// [`LeapRule`].
///
/// The input is assumed to be a real Gregorian date; months outside 1..=12
/// are clamped.
///
/// # Examples
///
/// ```
/// use jalali_calendar::gregorian_to_jalali;
///
/// let date = gregorian_to_jalali(2009, 3, 20);
/// assert_eq!((date.year(), date.month(), date.day()), (1387, 12, 30));
/// ```
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> JalaliYmd {
    gregorian_to_jalali_with(year, month, day, LeapRule::default())
}

/// Converts a Gregorian date to the Jalali calendar under `rule`.
///
/// # Examples
///
/// ```
/// use jalali_calendar::{LeapRule, gregorian_to_jalali_with};
///
/// // 1403 is leap only with the historical overrides.
/// let date = gregorian_to_jalali_with(2026, 3, 20, LeapRule::KhayyamWithOverrides);
/// assert_eq!((date.year(), date.month(), date.day()), (1404, 12, 29));
/// let date = gregorian_to_jalali_with(2026, 3, 20, LeapRule::Khayyam);
/// assert_eq!((date.year(), date.month(), date.day()), (1404, 12, 30));
/// ```
pub fn gregorian_to_jalali_with(year: i32, month: u8, day: u8, rule: LeapRule) -> JalaliYmd {
    jalali_from_day_number(gregorian_day_number(year, month, day) - EPOCH_OFFSET_DAYS, rule)
}

/// Converts a Jalali date to the Gregorian calendar under the default
/// [`LeapRule`], returning `(year, month, day)`.
///
/// The input is assumed to be normalized; months outside 1..=12 are clamped.
///
/// # Examples
///
/// ```
/// use jalali_calendar::jalali_to_gregorian;
///
/// assert_eq!(jalali_to_gregorian(1388, 1, 1), (2009, 3, 21));
/// ```
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> (i32, u8, u8) {
    jalali_to_gregorian_with(year, month, day, LeapRule::default())
}

/// Converts a Jalali date to the Gregorian calendar under `rule`.
pub fn jalali_to_gregorian_with(year: i32, month: u8, day: u8, rule: LeapRule) -> (i32, u8, u8) {
    gregorian_from_day_number(jalali_day_number(year, month, day, rule) + EPOCH_OFFSET_DAYS)
}
