//! Raw Jalali wall-clock fields and the carry arithmetic on them.
//!
//! [`WallFields`] holds fields exactly as written, possibly out of range.
//! Overflow in hours, minutes, seconds and milliseconds is left in place and
//! resolved when the fields are turned into an instant. Years, months and
//! days are carried eagerly by [`WallFields::increment`],
//! [`WallFields::decrement`] and [`WallFields::roll`].

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};
use jalali_calendar::{
    CalendarError, LeapRule, MIN_YEAR, days_in_month, gregorian_to_jalali_with, jalali_day_of_year,
    jalali_to_gregorian_with,
};
use tracing::trace;

use crate::error::EngineError;
use crate::field::Field;
use crate::zone::TimeZoneId;

/// Length of a normalized month.
///
/// # Panics
///
/// Panics if `month` is outside 1..=12. Callers fold months first.
fn month_length(year: i32, month: i32, rule: LeapRule) -> i32 {
    let length = u8::try_from(month)
        .map_err(|_| CalendarError::InvalidMonth { month })
        .and_then(|month| days_in_month(year, month, rule));
    match length {
        Ok(length) => i32::from(length),
        Err(err) => panic!("month must be folded before a length lookup: {err}"),
    }
}

/// Length of Esfand, the only month whose length varies.
fn esfand_length(year: i32, rule: LeapRule) -> i32 {
    if rule.is_leap_year(year) { 30 } else { 29 }
}

/// Nominal length of `month` for the overflow checks, or `None` outside 1..=12.
fn nominal_length(year: i32, month: i32, rule: LeapRule) -> Option<i32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 => Some(esfand_length(year, rule)),
        _ => None,
    }
}

/// Folds a raw month into 1..=12, carrying whole years. `None` on overflow.
fn fold_month(year: i32, month: i32) -> Option<(i32, i32)> {
    let month = i64::from(month) - 1;
    let year = i32::try_from(i64::from(year) + month.div_euclid(12)).ok()?;
    Some((year, (month.rem_euclid(12) + 1) as i32))
}

/// Wraps `value` into `0..=max` after a single step.
fn wrap(value: i32, max: i32) -> i32 {
    if value > max {
        0
    } else if value < 0 {
        max
    } else {
        value
    }
}

/// Jalali wall-clock fields in a specific zone. `month` is 1-based.
///
/// A zero year, month or day is "unset" and resolves to 979, 1 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WallFields {
    pub(crate) year: i32,
    pub(crate) month: i32,
    pub(crate) day: i32,
    pub(crate) hour: i32,
    pub(crate) minute: i32,
    pub(crate) second: i32,
    pub(crate) millisecond: i32,
    pub(crate) zone: TimeZoneId,
}

impl WallFields {
    fn out_of_range(&self) -> EngineError {
        EngineError::OutOfRange {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Folds an out-of-range month into the year and fills unset month and day.
    fn settle_month_and_day(&mut self) -> Result<(), EngineError> {
        if self.month == 0 {
            self.month = 1;
        } else if !(1..=12).contains(&self.month) {
            (self.year, self.month) =
                fold_month(self.year, self.month).ok_or_else(|| self.out_of_range())?;
        }
        if self.day == 0 {
            self.day = 1;
        }
        Ok(())
    }

    /// Carries overflow in freshly constructed fields.
    ///
    /// Seconds and minutes carry upward; hours past 24 carry into days (24
    /// itself is left for resolution). A month past 12 is added through
    /// [`WallFields::increment`], and a day past the nominal month length,
    /// measured against the day as given, is added the same way.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if the year overflows.
    pub(crate) fn carry_overflow(
        &mut self,
        preserve_overflow: bool,
        rule: LeapRule,
    ) -> Result<(), EngineError> {
        if self.second > 59 {
            self.minute = self.minute.saturating_add(self.second / 60);
            self.second %= 60;
        }
        if self.minute > 59 {
            self.hour = self.hour.saturating_add(self.minute / 60);
            self.minute %= 60;
        }
        if self.hour > 24 {
            self.day = self.day.saturating_add(self.hour / 24);
            self.hour %= 24;
        }

        let base_day = self.day;
        if self.month > 12 {
            let extra = self.month - 12;
            self.month = 12;
            self.increment(0, extra, 0, preserve_overflow, rule)?;
        }
        if let Some(max_day) = nominal_length(self.year, self.month, rule) {
            if base_day > max_day {
                self.increment(0, 0, base_day - max_day, preserve_overflow, rule)?;
            }
        }
        Ok(())
    }

    /// Moves forward by whole years, months and days.
    ///
    /// Unless `preserve_overflow` is set, the day is first clamped to the
    /// length of the target month, so 1387/12/30 plus one year is 1388/12/29.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if the year or day overflows.
    pub(crate) fn increment(
        &mut self,
        years: i32,
        months: i32,
        days: i32,
        preserve_overflow: bool,
        rule: LeapRule,
    ) -> Result<(), EngineError> {
        self.settle_month_and_day()?;
        self.year = self.year.checked_add(years).ok_or_else(|| self.out_of_range())?;
        self.month = self.month.checked_add(months).ok_or_else(|| self.out_of_range())?;
        let carried_years = if self.month % 12 == 0 {
            let years = self.month / 12 - 1;
            self.month = 12;
            years
        } else {
            let years = self.month / 12;
            self.month %= 12;
            years
        };
        self.year = self.year.checked_add(carried_years).ok_or_else(|| self.out_of_range())?;

        if !preserve_overflow {
            self.day = self.day.min(month_length(self.year, self.month, rule));
        }
        self.day = self.day.checked_add(days).ok_or_else(|| self.out_of_range())?;

        loop {
            let length = month_length(self.year, self.month, rule);
            if self.day <= length {
                break;
            }
            self.day -= length;
            self.month += 1;
            if self.month > 12 {
                self.year = self.year.checked_add(1).ok_or_else(|| self.out_of_range())?;
                self.month = 1;
            }
        }
        Ok(())
    }

    /// Moves backward by whole years, months and days.
    ///
    /// A date on the last day of its month stays on the last day of the
    /// target month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if the year overflows.
    pub(crate) fn decrement(
        &mut self,
        years: i32,
        months: i32,
        mut days: i32,
        rule: LeapRule,
    ) -> Result<(), EngineError> {
        self.settle_month_and_day()?;
        let was_month_end = self.day == month_length(self.year, self.month, rule);

        self.year = self.year.checked_sub(years).ok_or_else(|| self.out_of_range())?;
        self.month = self.month.checked_sub(months).ok_or_else(|| self.out_of_range())?;
        let borrowed_years = if self.month % 12 < 1 {
            let years = 1 - self.month / 12;
            self.month = self.month % 12 + 12;
            years
        } else {
            let years = -(self.month / 12);
            self.month %= 12;
            years
        };
        self.year = self.year.checked_sub(borrowed_years).ok_or_else(|| self.out_of_range())?;

        let length = month_length(self.year, self.month, rule);
        if self.day > length || was_month_end {
            self.day = length;
        }

        while days >= self.day {
            days -= self.day;
            self.month -= 1;
            if self.month < 1 {
                self.year = self.year.checked_sub(1).ok_or_else(|| self.out_of_range())?;
                self.month = 12;
            }
            self.day = month_length(self.year, self.month, rule);
        }
        self.day -= days;
        Ok(())
    }

    /// Steps one field by one unit, wrapping without touching larger fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if rolling the year overflows.
    pub(crate) fn roll(
        &mut self,
        field: Field,
        up: bool,
        rule: LeapRule,
    ) -> Result<(), EngineError> {
        let step = if up { 1 } else { -1 };
        match field {
            Field::Year => {
                self.year = self.year.checked_add(step).ok_or_else(|| self.out_of_range())?;
                if self.month == 12 && self.day >= 30 {
                    self.day = esfand_length(self.year, rule);
                }
            }
            Field::Month => {
                self.month = self.month.saturating_add(step);
                if self.month > 12 {
                    self.month = 1;
                } else if self.month < 1 {
                    self.month = 12;
                }
                if self.month > 6 {
                    let max_day = if self.month == 12 {
                        esfand_length(self.year, rule)
                    } else {
                        30
                    };
                    self.day = self.day.min(max_day);
                }
            }
            Field::DayOfMonth => {
                self.day = self.day.saturating_add(step);
                if let Some(max_day) = nominal_length(self.year, self.month, rule) {
                    if self.day > max_day {
                        self.day = 1;
                    } else if self.day < 1 {
                        self.day = max_day;
                    }
                }
            }
            Field::Hour | Field::HourOfDay => self.hour = wrap(self.hour.saturating_add(step), 23),
            Field::Minute => self.minute = wrap(self.minute.saturating_add(step), 59),
            Field::Second => self.second = wrap(self.second.saturating_add(step), 59),
            Field::DayOfYear
            | Field::DayOfWeek
            | Field::AmPm
            | Field::Millisecond
            | Field::ZoneOffset
            | Field::DstOffset => {}
        }
        Ok(())
    }

    /// Resolves the fields to an instant, reading them as wall-clock time in
    /// their zone under `rule`. Unset fields take their defaults; pending
    /// overflow in any field rolls into the result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if the result cannot be represented.
    pub(crate) fn resolve(&self, rule: LeapRule) -> Result<DateTime<Utc>, EngineError> {
        let out_of_range = || self.out_of_range();

        let year = if self.year == 0 { MIN_YEAR } else { self.year };
        let month = if self.month == 0 { 1 } else { self.month };
        let day = if self.day == 0 { 1 } else { self.day };
        let (year, month) = fold_month(year, month).ok_or_else(out_of_range)?;

        // The converter takes the first of the month; the day is added as an offset.
        let (gy, gm, gd) = jalali_to_gregorian_with(year, month as u8, 1, rule);
        let elapsed = TimeDelta::days(i64::from(day) - 1)
            + TimeDelta::hours(i64::from(self.hour))
            + TimeDelta::minutes(i64::from(self.minute))
            + TimeDelta::seconds(i64::from(self.second))
            + TimeDelta::milliseconds(i64::from(self.millisecond));
        let local = NaiveDate::from_ymd_opt(gy, u32::from(gm), u32::from(gd))
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .and_then(|midnight| midnight.checked_add_signed(elapsed))
            .ok_or_else(out_of_range)?;

        let instant = self.zone.resolve_local(&local).ok_or_else(out_of_range)?;
        trace!(year, month, day, %instant, "resolved jalali fields");
        Ok(instant)
    }
}

/// Fields of an instant as seen in a zone, with the derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Projection {
    pub(crate) fields: WallFields,
    pub(crate) day_of_year: i32,
    pub(crate) day_of_week: i32,
    pub(crate) zone_offset_ms: i32,
    pub(crate) dst_offset_ms: i32,
}

impl Projection {
    /// Projects `instant` into `zone` under `rule`. Always normalized.
    pub(crate) fn new(instant: &DateTime<Utc>, zone: TimeZoneId, rule: LeapRule) -> Self {
        let local = zone.to_local(instant);
        let ymd =
            gregorian_to_jalali_with(local.year(), local.month() as u8, local.day() as u8, rule);
        let (base_offset, dst_offset) = zone.offsets_at(instant);
        let fields = WallFields {
            year: ymd.year(),
            month: i32::from(ymd.month()),
            day: i32::from(ymd.day()),
            hour: local.hour() as i32,
            minute: local.minute() as i32,
            second: local.second() as i32,
            millisecond: (local.nanosecond() / 1_000_000).min(999) as i32,
            zone,
        };
        trace!(%instant, %zone, year = fields.year, month = fields.month, day = fields.day, "projected instant");
        Self {
            fields,
            day_of_year: i32::from(jalali_day_of_year(ymd.month(), ymd.day())),
            day_of_week: local.weekday().number_from_sunday() as i32,
            zone_offset_ms: base_offset * 1000,
            dst_offset_ms: dst_offset * 1000,
        }
    }
}
