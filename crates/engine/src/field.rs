//! Calendar fields and their bounds.

use jalali_calendar::{MAX_YEAR, MIN_YEAR};

/// [`Field::AmPm`] value for hours 0..=11.
pub const AM: i32 = 0;
/// [`Field::AmPm`] value for hours 12..=23.
pub const PM: i32 = 1;

const HOUR_MS: i32 = 60 * 60 * 1000;

/// A field of a [`JalaliCalendar`](crate::JalaliCalendar).
///
/// `Month` is 0-based (0 = Farvardin). `DayOfWeek` runs from 1 (Sunday) to
/// 7 (Saturday). Offsets are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    DayOfMonth,
    DayOfYear,
    DayOfWeek,
    AmPm,
    /// Hour within the half day, 0..=11.
    Hour,
    /// Hour within the day, 0..=23.
    HourOfDay,
    Minute,
    Second,
    Millisecond,
    /// Standard offset from UTC.
    ZoneOffset,
    /// Daylight-saving adjustment on top of [`Field::ZoneOffset`].
    DstOffset,
}

impl Field {
    /// Every field, in declaration order.
    pub const ALL: [Field; 13] = [
        Field::Year,
        Field::Month,
        Field::DayOfMonth,
        Field::DayOfYear,
        Field::DayOfWeek,
        Field::AmPm,
        Field::Hour,
        Field::HourOfDay,
        Field::Minute,
        Field::Second,
        Field::Millisecond,
        Field::ZoneOffset,
        Field::DstOffset,
    ];

    /// Smallest value the field takes.
    pub fn minimum(self) -> i32 {
        match self {
            Field::Year => MIN_YEAR,
            Field::DayOfMonth | Field::DayOfYear | Field::DayOfWeek => 1,
            Field::ZoneOffset => -13 * HOUR_MS,
            Field::Month
            | Field::AmPm
            | Field::Hour
            | Field::HourOfDay
            | Field::Minute
            | Field::Second
            | Field::Millisecond
            | Field::DstOffset => 0,
        }
    }

    /// Largest value the field takes.
    pub fn maximum(self) -> i32 {
        match self {
            Field::Year => MAX_YEAR,
            Field::Month => 11,
            Field::DayOfMonth => 31,
            Field::DayOfYear => 366,
            Field::DayOfWeek => 7,
            Field::AmPm => PM,
            Field::Hour => 11,
            Field::HourOfDay => 23,
            Field::Minute | Field::Second => 59,
            Field::Millisecond => 999,
            Field::ZoneOffset => 14 * HOUR_MS,
            Field::DstOffset => 2 * HOUR_MS,
        }
    }

    /// Whether the field is computed from the others and cannot be set.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Field::DayOfYear | Field::DayOfWeek | Field::ZoneOffset | Field::DstOffset
        )
    }
}
