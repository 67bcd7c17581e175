//! Time-zone identifiers and wall-clock resolution.
//!
//! A [`TimeZoneId`] is either an IANA zone from the `chrono-tz` database or a
//! fixed UTC offset. It projects instants onto local wall-clock time and
//! resolves wall-clock time back to instants.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};
use tracing::{debug, warn};

use crate::error::EngineError;

/// A time zone: a named IANA zone or a fixed offset from UTC.
///
/// # Example
///
/// ```
/// use jalali_engine::TimeZoneId;
///
/// let tehran: TimeZoneId = "Asia/Tehran".parse().unwrap();
/// assert_eq!(tehran.id(), "Asia/Tehran");
///
/// let fixed: TimeZoneId = "GMT+3:30".parse().unwrap();
/// assert_eq!(fixed.id(), "GMT+03:30");
/// assert_eq!(fixed, "+0330".parse().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZoneId {
    /// A zone from the IANA database, with its DST history.
    Named(Tz),
    /// A constant offset east of UTC.
    Fixed(FixedOffset),
}

impl TimeZoneId {
    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self::Named(Tz::UTC)
    }

    /// A fixed zone `offset_seconds` east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTimeZone`] if the offset is a day or more.
    pub fn fixed(offset_seconds: i32) -> Result<Self, EngineError> {
        FixedOffset::east_opt(offset_seconds)
            .map(Self::Fixed)
            .ok_or_else(|| EngineError::UnknownTimeZone {
                id: format!("{offset_seconds}s"),
            })
    }

    /// The host's configured zone, or UTC when it cannot be determined.
    pub fn system() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(name) => name.parse().unwrap_or_else(|_| {
                warn!(zone = %name, "system time zone is not in the database, using UTC");
                Self::utc()
            }),
            Err(err) => {
                warn!(error = %err, "cannot determine system time zone, using UTC");
                Self::utc()
            }
        }
    }

    /// The zone identifier: the IANA name, or `GMT±HH:MM` for fixed offsets.
    pub fn id(&self) -> String {
        match self {
            Self::Named(tz) => tz.name().to_string(),
            Self::Fixed(offset) => {
                let secs = offset.local_minus_utc();
                let sign = if secs < 0 { '-' } else { '+' };
                let abs = secs.unsigned_abs();
                format!("GMT{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60)
            }
        }
    }

    /// Wall-clock time of `instant` in this zone.
    pub(crate) fn to_local(self, instant: &DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Named(tz) => instant.with_timezone(&tz).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
        }
    }

    /// Standard and daylight-saving offsets in force at `instant`, in seconds.
    pub(crate) fn offsets_at(self, instant: &DateTime<Utc>) -> (i32, i32) {
        match self {
            Self::Named(tz) => {
                let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
                let base = offset.base_utc_offset().num_seconds();
                let dst = offset.dst_offset().num_seconds();
                (base as i32, dst as i32)
            }
            Self::Fixed(offset) => (offset.local_minus_utc(), 0),
        }
    }

    /// Resolves a wall-clock time in this zone to an instant.
    ///
    /// A time inside a DST gap is read with the offset in force before the
    /// gap, which moves it forward. An ambiguous time takes the earlier
    /// instant. Returns `None` only on arithmetic overflow.
    pub(crate) fn resolve_local(self, local: &NaiveDateTime) -> Option<DateTime<Utc>> {
        let offset_seconds = match self {
            Self::Named(tz) => match tz.from_local_datetime(local) {
                LocalResult::Single(dt) => return Some(dt.with_timezone(&Utc)),
                LocalResult::Ambiguous(earliest, _) => return Some(earliest.with_timezone(&Utc)),
                LocalResult::None => {
                    // Transitions are months apart; a day earlier is before the gap.
                    let before = local.checked_sub_signed(TimeDelta::days(1))?;
                    let offset = tz.offset_from_utc_datetime(&before).fix();
                    debug!(zone = %tz.name(), %local, "wall-clock time falls in a DST gap");
                    offset.local_minus_utc()
                }
            },
            Self::Fixed(offset) => offset.local_minus_utc(),
        };
        let utc = local.checked_sub_signed(TimeDelta::seconds(i64::from(offset_seconds)))?;
        Some(Utc.from_utc_datetime(&utc))
    }
}

impl Default for TimeZoneId {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl From<Tz> for TimeZoneId {
    fn from(tz: Tz) -> Self {
        Self::Named(tz)
    }
}

impl From<FixedOffset> for TimeZoneId {
    fn from(offset: FixedOffset) -> Self {
        Self::Fixed(offset)
    }
}

impl FromStr for TimeZoneId {
    type Err = EngineError;

    /// Parses an IANA name (`Asia/Tehran`, `UTC`) or a fixed offset
    /// (`GMT+3:30`, `UTC-05:00`, `+04:00`, `+0330`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(tz) = trimmed.parse::<Tz>() {
            return Ok(Self::Named(tz));
        }
        parse_fixed_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| EngineError::UnknownTimeZone { id: s.to_string() })
    }
}

fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let rest = s
        .strip_prefix("GMT")
        .or_else(|| s.strip_prefix("UTC"))
        .unwrap_or(s);
    let (sign, digits) = if let Some(digits) = rest.strip_prefix('+') {
        (1, digits)
    } else if let Some(digits) = rest.strip_prefix('-') {
        (-1, digits)
    } else {
        return None;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }

    let (hours, minutes) = match digits.split_once(':') {
        Some(parts) => parts,
        None if digits.len() > 2 => digits.split_at(digits.len() - 2),
        None => (digits, "0"),
    };
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
