//! Plain Jalali date-and-time value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use jalali_calendar::{CalendarError, JalaliYmd, LeapRule};

use crate::error::EngineError;
use crate::zone::TimeZoneId;

/// A Jalali date and wall-clock time with an optional zone.
///
/// The value is not normalized: out-of-range fields are kept as given and
/// reported by [`JalaliDate::is_valid`]. The all-zero [`Default`] is the
/// "unset" value and is never valid.
///
/// Equality ignores milliseconds and compares zones only when both sides
/// carry one. Ordering goes through [`JalaliDate::try_cmp`], which does count
/// milliseconds, so there is no `PartialOrd` impl.
///
/// # Example
///
/// ```
/// use jalali_engine::JalaliDate;
///
/// let date = JalaliDate::new(1387, 12, 30).with_hms(23, 50, 3);
/// assert!(date.is_valid());
/// assert_eq!(date.to_string(), "1387/12/30 23:50:03");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JalaliDate {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    millisecond: i32,
    time_zone: Option<TimeZoneId>,
}

impl JalaliDate {
    /// Creates a date at midnight with no zone. `month` is 1-based.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            ..Self::default()
        }
    }

    /// Sets the wall-clock time.
    pub fn with_hms(mut self, hour: i32, minute: i32, second: i32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Sets the millisecond.
    pub fn with_millisecond(mut self, millisecond: i32) -> Self {
        self.millisecond = millisecond;
        self
    }

    /// Attaches a zone.
    pub fn with_time_zone(mut self, zone: TimeZoneId) -> Self {
        self.time_zone = Some(zone);
        self
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-based.
    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn minute(&self) -> i32 {
        self.minute
    }

    pub fn second(&self) -> i32 {
        self.second
    }

    pub fn millisecond(&self) -> i32 {
        self.millisecond
    }

    pub fn time_zone(&self) -> Option<TimeZoneId> {
        self.time_zone
    }

    /// Whether every field is in range, under the default leap rule.
    pub fn is_valid(&self) -> bool {
        self.is_valid_with(LeapRule::default())
    }

    /// Whether every field is in range, with Esfand's length taken from `rule`.
    pub fn is_valid_with(&self, rule: LeapRule) -> bool {
        let time_ok = (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
            && (0..1000).contains(&self.millisecond);
        time_ok && !self.is_unset() && self.year >= 0 && self.to_ymd(rule).is_ok()
    }

    /// The date part as a validated calendar triple.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Calendar`] when the month or day is out of range.
    pub fn to_ymd(&self, rule: LeapRule) -> Result<JalaliYmd, EngineError> {
        let month = u8::try_from(self.month).map_err(|_| CalendarError::InvalidMonth {
            month: self.month,
        })?;
        let day = u8::try_from(self.day).unwrap_or(u8::MAX);
        Ok(JalaliYmd::new(self.year, month, day, rule)?)
    }

    /// Chronological comparison down to the millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if either date is not valid.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, EngineError> {
        for date in [self, other] {
            if !date.is_valid() {
                return Err(EngineError::InvalidDate {
                    date: date.to_string(),
                });
            }
        }
        Ok(self.sort_key().cmp(&other.sort_key()))
    }

    fn is_unset(&self) -> bool {
        self.year == 0
            && self.month == 0
            && self.day == 0
            && self.hour == 0
            && self.minute == 0
            && self.second == 0
    }

    fn sort_key(&self) -> [i32; 7] {
        [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        ]
    }
}

impl PartialEq for JalaliDate {
    fn eq(&self, other: &Self) -> bool {
        let zones_match = match (self.time_zone, other.time_zone) {
            (Some(a), Some(b)) => a.id() == b.id(),
            _ => true,
        };
        zones_match && self.sort_key()[..6] == other.sort_key()[..6]
    }
}

impl Eq for JalaliDate {}

impl Hash for JalaliDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key()[..6].hash(state);
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(date: &JalaliDate) -> u64 {
        let mut hasher = DefaultHasher::new();
        date.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn builder_sets_fields() {
        let zone = TimeZoneId::utc();
        let date = JalaliDate::new(1388, 3, 29)
            .with_hms(9, 55, 7)
            .with_millisecond(120)
            .with_time_zone(zone);
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (1388, 3, 29)
        );
        assert_eq!((date.hour(), date.minute(), date.second()), (9, 55, 7));
        assert_eq!(date.millisecond(), 120);
        assert_eq!(date.time_zone(), Some(zone));
    }

    #[test]
    fn valid_dates() {
        assert!(JalaliDate::new(1387, 12, 30).is_valid());
        assert!(JalaliDate::new(1388, 6, 31).with_hms(23, 59, 59).is_valid());
        assert!(JalaliDate::new(0, 1, 1).is_valid());
    }

    #[test]
    fn invalid_dates() {
        assert!(!JalaliDate::new(1388, 12, 30).is_valid());
        assert!(!JalaliDate::new(1388, 7, 31).is_valid());
        assert!(!JalaliDate::new(1388, 13, 1).is_valid());
        assert!(!JalaliDate::new(1388, 0, 1).is_valid());
        assert!(!JalaliDate::new(1388, 1, 0).is_valid());
        assert!(!JalaliDate::new(-1, 1, 1).is_valid());
        assert!(!JalaliDate::new(1388, 1, 1).with_hms(24, 0, 0).is_valid());
        assert!(!JalaliDate::new(1388, 1, 1).with_hms(0, 60, 0).is_valid());
        assert!(!JalaliDate::new(1388, 1, 1).with_millisecond(1000).is_valid());
    }

    #[test]
    fn unset_is_invalid() {
        assert!(!JalaliDate::default().is_valid());
    }

    #[test]
    fn validity_follows_rule() {
        let date = JalaliDate::new(1403, 12, 30);
        assert!(date.is_valid_with(LeapRule::KhayyamWithOverrides));
        assert!(!date.is_valid_with(LeapRule::Khayyam));
    }

    #[test]
    fn to_ymd_reports_structural_errors() {
        let ymd = JalaliDate::new(1388, 1, 1).to_ymd(LeapRule::default()).unwrap();
        assert_eq!((ymd.year(), ymd.month(), ymd.day()), (1388, 1, 1));

        let err = JalaliDate::new(1388, 13, 1)
            .to_ymd(LeapRule::default())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Calendar(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn try_cmp_orders_chronologically() {
        let a = JalaliDate::new(1387, 12, 30).with_hms(23, 59, 59);
        let b = JalaliDate::new(1388, 1, 1);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(b.try_cmp(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.try_cmp(&a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn try_cmp_counts_milliseconds() {
        let a = JalaliDate::new(1388, 1, 1).with_millisecond(1);
        let b = JalaliDate::new(1388, 1, 1).with_millisecond(2);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Less);
        assert_eq!(a, b);
    }

    #[test]
    fn try_cmp_rejects_invalid_operand() {
        let good = JalaliDate::new(1388, 1, 1);
        let bad = JalaliDate::new(1388, 12, 30);
        assert_eq!(
            good.try_cmp(&bad).unwrap_err(),
            EngineError::InvalidDate {
                date: "1388/12/30 00:00:00".to_string()
            }
        );
        assert!(bad.try_cmp(&good).is_err());
    }

    #[test]
    fn equality_and_zones() {
        let tehran: TimeZoneId = "Asia/Tehran".parse().unwrap();
        let plain = JalaliDate::new(1388, 1, 1);
        let in_tehran = plain.with_time_zone(tehran);
        let in_utc = plain.with_time_zone(TimeZoneId::utc());

        assert_eq!(plain, in_tehran);
        assert_eq!(plain, in_utc);
        assert_ne!(in_tehran, in_utc);
        assert_ne!(plain, JalaliDate::new(1388, 1, 2));
    }

    #[test]
    fn hash_agrees_with_equality() {
        let a = JalaliDate::new(1388, 1, 1).with_millisecond(5);
        let b = JalaliDate::new(1388, 1, 1)
            .with_millisecond(900)
            .with_time_zone(TimeZoneId::utc());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn display_pads_fields() {
        let date = JalaliDate::new(1383, 9, 19).with_hms(15, 4, 0);
        assert_eq!(date.to_string(), "1383/09/19 15:04:00");
        assert_eq!(JalaliDate::default().to_string(), "0000/00/00 00:00:00");
    }
}
