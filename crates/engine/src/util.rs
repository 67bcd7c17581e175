//! Conversion and parsing helpers.

use chrono::format::{Parsed, StrftimeItems};
use chrono::{DateTime, Utc};
use jalali_calendar::LeapRule;
use tracing::debug;

use crate::calendar::JalaliCalendar;
use crate::date::JalaliDate;
use crate::error::EngineError;
use crate::fields::Projection;
use crate::zone::TimeZoneId;

/// Added to two-digit years.
const SHORT_YEAR_BASE: i32 = 1400;

/// The Jalali date of `instant` as seen in `zone`, under the default
/// [`LeapRule`].
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jalali_engine::{JalaliDate, TimeZoneId, gregorian_to_jalali};
///
/// let instant = Utc.with_ymd_and_hms(2009, 3, 20, 20, 20, 3).unwrap();
/// let zone = TimeZoneId::fixed(12_600).unwrap();
/// let date = gregorian_to_jalali(&instant, zone);
/// assert_eq!(date, JalaliDate::new(1387, 12, 30).with_hms(23, 50, 3));
/// ```
pub fn gregorian_to_jalali(instant: &DateTime<Utc>, zone: TimeZoneId) -> JalaliDate {
    let fields = Projection::new(instant, zone, LeapRule::default()).fields;
    JalaliDate::new(fields.year, fields.month, fields.day)
        .with_hms(fields.hour, fields.minute, fields.second)
        .with_millisecond(fields.millisecond)
        .with_time_zone(zone)
}

/// The instant of a Jalali date, read in the date's zone (UTC when it has
/// none). Returns `None` when the date is not valid.
pub fn jalali_to_gregorian(date: &JalaliDate) -> Option<DateTime<Utc>> {
    if !date.is_valid() {
        debug!(%date, "refusing to convert an invalid date");
        return None;
    }
    JalaliCalendar::from_jalali_date(date, None).instant().ok()
}

/// Parses Jalali date text with a `chrono` strftime pattern.
///
/// The parsed numbers are taken as Jalali fields and normalized, so a day
/// past the end of its month and a second of 60 are carried. Minutes over
/// 59, hours over 23 and days over 31 are rejected by `chrono` before that.
/// A `%Y` year from 10 to 99, or any `%y` year, is read as 14xx. Fields the
/// pattern omits are unset: the year becomes 979, the month and day the
/// first.
///
/// # Errors
///
/// Returns [`EngineError::Parse`] if the text does not match the pattern.
///
/// # Example
///
/// ```
/// use jalali_engine::{JalaliDate, parse_jalali_date};
///
/// let date = parse_jalali_date("1383/9/19, 15:14", "%Y/%m/%d, %H:%M").unwrap();
/// assert_eq!(date, JalaliDate::new(1383, 9, 19).with_hms(15, 14, 0));
/// ```
#[tracing::instrument(level = "debug")]
pub fn parse_jalali_date(text: &str, pattern: &str) -> Result<JalaliDate, EngineError> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, text, StrftimeItems::new(pattern)).map_err(|err| {
        EngineError::Parse {
            text: text.to_string(),
            reason: err.to_string(),
        }
    })?;

    let year = match (parsed.year(), parsed.year_mod_100()) {
        (Some(year), _) if (10..=99).contains(&year) => year + SHORT_YEAR_BASE,
        (Some(year), _) => year,
        (None, Some(short)) => short + SHORT_YEAR_BASE,
        (None, None) => 0,
    };
    let hour = match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (Some(half), Some(hour)) => half * 12 + hour,
        (None, Some(hour)) => hour,
        _ => 0,
    };
    let number = |value: Option<u32>| value.map_or(0, |v| v as i32);

    let raw = JalaliDate::new(year, number(parsed.month()), number(parsed.day()))
        .with_hms(
            hour as i32,
            number(parsed.minute()),
            number(parsed.second()),
        )
        .with_millisecond(number(parsed.nanosecond().map(|ns| ns / 1_000_000)));

    let normalized = JalaliCalendar::from_jalali_date(&raw, None).jalali_date()?;
    debug!(%raw, %normalized, "parsed jalali date");
    Ok(
        JalaliDate::new(normalized.year(), normalized.month(), normalized.day())
            .with_hms(normalized.hour(), normalized.minute(), normalized.second())
            .with_millisecond(normalized.millisecond()),
    )
}
