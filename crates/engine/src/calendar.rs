//! Jalali calendar value with field access and arithmetic.

use chrono::{DateTime, FixedOffset, Utc, Weekday};
use chrono_tz::Tz;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::date::JalaliDate;
use crate::error::EngineError;
use crate::field::{AM, Field, PM};
use crate::fields::{Projection, WallFields};
use crate::zone::TimeZoneId;

/// Which representation is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Fields are derived by projecting the instant into the destination zone.
    Instant(DateTime<Utc>),
    /// The instant is derived by resolving the fields in their own zone.
    Fields(WallFields),
}

/// A point in time viewed through the Jalali calendar.
///
/// A calendar carries two zones. The era zone is fixed at construction: it
/// is the zone the originating instant or fields were captured in. The
/// destination zone is where fields are read and written, and can be changed
/// with [`JalaliCalendar::set_time_zone`] without moving the instant.
///
/// Reads never change the value. Every write ([`set`](Self::set),
/// [`add`](Self::add), [`roll`](Self::roll), [`clear`](Self::clear)) first
/// projects the value into the destination zone and then edits the fields
/// there.
///
/// # Example
///
/// ```
/// use jalali_engine::{Field, JalaliCalendar, JalaliDate};
///
/// let date = JalaliDate::new(1387, 12, 29).with_hms(9, 55, 0);
/// let mut calendar = JalaliCalendar::from_jalali_date(&date, None);
/// calendar.add(Field::Month, 3).unwrap();
///
/// assert_eq!(calendar.get(Field::Year).unwrap(), 1388);
/// assert_eq!(calendar.get(Field::Month).unwrap(), 2); // 0-based: Khordad
/// assert_eq!(calendar.get(Field::DayOfMonth).unwrap(), 29);
/// ```
#[derive(Debug, Clone)]
pub struct JalaliCalendar {
    state: State,
    era_zone: TimeZoneId,
    dest_zone: TimeZoneId,
    config: CalendarConfig,
}

impl JalaliCalendar {
    /// The current instant, viewed in `zone`.
    pub fn now(zone: TimeZoneId) -> Self {
        Self::from_instant(Utc::now(), zone, zone)
    }

    /// An instant captured in `era`, viewed in `dest`.
    pub fn from_instant(instant: DateTime<Utc>, era: TimeZoneId, dest: TimeZoneId) -> Self {
        Self {
            state: State::Instant(instant),
            era_zone: era,
            dest_zone: dest,
            config: CalendarConfig::default(),
        }
    }

    /// A zoned datetime, viewed in `dest` or in its own zone.
    pub fn from_zoned(datetime: &DateTime<Tz>, dest: Option<TimeZoneId>) -> Self {
        let era = TimeZoneId::Named(datetime.timezone());
        Self::from_instant(datetime.with_timezone(&Utc), era, dest.unwrap_or(era))
    }

    /// A fixed-offset datetime, viewed in `dest` or at its own offset.
    pub fn from_fixed(datetime: &DateTime<FixedOffset>, dest: Option<TimeZoneId>) -> Self {
        let era = TimeZoneId::Fixed(*datetime.offset());
        Self::from_instant(datetime.with_timezone(&Utc), era, dest.unwrap_or(era))
    }

    /// Jalali fields, read as wall-clock time in the date's zone (UTC when it
    /// has none) and viewed in `dest` or that same zone.
    ///
    /// Out-of-range fields are carried: `1387/12/30 23:65:60` becomes
    /// `1388/01/01 00:06:00`.
    pub fn from_jalali_date(date: &JalaliDate, dest: Option<TimeZoneId>) -> Self {
        Self::from_jalali_date_with(date, dest, CalendarConfig::default())
    }

    /// Like [`from_jalali_date`](Self::from_jalali_date), carrying overflow
    /// under `config`.
    pub fn from_jalali_date_with(
        date: &JalaliDate,
        dest: Option<TimeZoneId>,
        config: CalendarConfig,
    ) -> Self {
        let era = date.time_zone().unwrap_or_default();
        let raw = WallFields {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
            millisecond: date.millisecond(),
            zone: era,
        };
        let mut fields = raw;
        if let Err(err) = fields.carry_overflow(config.preserve_overflow(), config.leap_rule()) {
            debug!(%date, %err, "leaving overflow for resolution");
            fields = raw;
        }
        if (fields.year, fields.month, fields.day) != (date.year(), date.month(), date.day()) {
            debug!(%date, year = fields.year, month = fields.month, day = fields.day, "carried overflow at construction");
        }
        Self {
            state: State::Fields(fields),
            era_zone: era,
            dest_zone: dest.unwrap_or(era),
            config,
        }
    }

    /// Replaces the configuration used by later arithmetic.
    pub fn with_config(mut self, config: CalendarConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration used for arithmetic and for reading fields.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Reads a field in the destination zone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn get(&self, field: Field) -> Result<i32, EngineError> {
        let projection = self.projection()?;
        let fields = projection.fields;
        Ok(match field {
            Field::Year => fields.year,
            Field::Month => fields.month - 1,
            Field::DayOfMonth => fields.day,
            Field::DayOfYear => projection.day_of_year,
            Field::DayOfWeek => projection.day_of_week,
            Field::AmPm => {
                if fields.hour < 12 {
                    AM
                } else {
                    PM
                }
            }
            Field::Hour => fields.hour % 12,
            Field::HourOfDay => fields.hour,
            Field::Minute => fields.minute,
            Field::Second => fields.second,
            Field::Millisecond => fields.millisecond,
            Field::ZoneOffset => projection.zone_offset_ms,
            Field::DstOffset => projection.dst_offset_ms,
        })
    }

    /// Writes a field in the destination zone. `Month` is 0-based.
    ///
    /// Values are stored as given and carried when read, except hours, which
    /// wrap modulo 24 from 24 upward. Writes to derived fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn set(&mut self, field: Field, value: i32) -> Result<(), EngineError> {
        let mut fields = self.editable_fields()?;
        match field {
            Field::Year => fields.year = value,
            Field::Month => fields.month = value.saturating_add(1),
            Field::DayOfMonth => fields.day = value,
            Field::Hour | Field::HourOfDay => {
                fields.hour = if value >= 24 { value % 24 } else { value };
            }
            Field::AmPm => {
                let pm = value != AM;
                if pm && fields.hour < 12 {
                    fields.hour += 12;
                } else if !pm && fields.hour >= 12 {
                    fields.hour -= 12;
                }
            }
            Field::Minute => fields.minute = value,
            Field::Second => fields.second = value,
            Field::Millisecond => fields.millisecond = value,
            Field::DayOfYear | Field::DayOfWeek | Field::ZoneOffset | Field::DstOffset => {
                debug!(?field, value, "ignoring write to a derived field");
            }
        }
        self.state = State::Fields(fields);
        Ok(())
    }

    /// Resets a field to "unset". An unset year reads as 979 and an unset
    /// month or day as the first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn clear(&mut self, field: Field) -> Result<(), EngineError> {
        let mut fields = self.editable_fields()?;
        match field {
            Field::Year => fields.year = 0,
            Field::Month => fields.month = 0,
            Field::DayOfMonth => fields.day = 0,
            Field::Hour | Field::HourOfDay => fields.hour = 0,
            Field::AmPm => fields.hour %= 12,
            Field::Minute => fields.minute = 0,
            Field::Second => fields.second = 0,
            Field::Millisecond => fields.millisecond = 0,
            Field::DayOfYear | Field::DayOfWeek | Field::ZoneOffset | Field::DstOffset => {
                debug!(?field, "ignoring clear of a derived field");
            }
        }
        self.state = State::Fields(fields);
        Ok(())
    }

    /// Adds `amount` to a field, carrying into larger fields.
    ///
    /// Adding years or months keeps the day of month where it fits and
    /// clamps it to the month length otherwise (see
    /// [`CalendarConfig::with_preserve_overflow`]).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be
    /// resolved or the year would leave the `i32` range. The value is left
    /// unchanged on error.
    pub fn add(&mut self, field: Field, amount: i32) -> Result<(), EngineError> {
        let mut fields = self.editable_fields()?;
        let rule = self.config.leap_rule();
        let keep = self.config.preserve_overflow();
        let back = amount.saturating_neg();
        match field {
            Field::Year if amount >= 0 => fields.increment(amount, 0, 0, keep, rule)?,
            Field::Year => fields.decrement(back, 0, 0, rule)?,
            Field::Month if amount >= 0 => fields.increment(0, amount, 0, keep, rule)?,
            Field::Month => fields.decrement(0, back, 0, rule)?,
            Field::DayOfMonth if amount >= 0 => fields.increment(0, 0, amount, keep, rule)?,
            Field::DayOfMonth => fields.decrement(0, 0, back, rule)?,
            Field::Hour | Field::HourOfDay => fields.hour = fields.hour.saturating_add(amount),
            Field::Minute => fields.minute = fields.minute.saturating_add(amount),
            Field::Second => fields.second = fields.second.saturating_add(amount),
            Field::Millisecond => {
                fields.millisecond = fields.millisecond.saturating_add(amount);
            }
            Field::DayOfYear
            | Field::DayOfWeek
            | Field::AmPm
            | Field::ZoneOffset
            | Field::DstOffset => {
                debug!(?field, amount, "ignoring add to a derived field");
            }
        }
        self.state = State::Fields(fields);
        Ok(())
    }

    /// Steps a field by one unit, wrapping without changing larger fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn roll(&mut self, field: Field, up: bool) -> Result<(), EngineError> {
        self.roll_by(field, if up { 1 } else { -1 })
    }

    /// Rolls a field `amount.abs()` times, up when `amount` is positive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be
    /// resolved or a rolled year would leave the `i32` range.
    pub fn roll_by(&mut self, field: Field, amount: i32) -> Result<(), EngineError> {
        let mut fields = self.editable_fields()?;
        let rule = self.config.leap_rule();
        for _ in 0..amount.unsigned_abs() {
            fields.roll(field, amount > 0, rule)?;
        }
        self.state = State::Fields(fields);
        Ok(())
    }

    /// The smallest value `field` takes. YEAR starts at 979.
    pub fn get_minimum(&self, field: Field) -> i32 {
        field.minimum()
    }

    /// The largest value `field` takes. YEAR stops at 9979.
    pub fn get_maximum(&self, field: Field) -> i32 {
        field.maximum()
    }

    /// Same as [`get_minimum`](Self::get_minimum); the bounds do not vary.
    pub fn get_greatest_minimum(&self, field: Field) -> i32 {
        field.minimum()
    }

    /// Same as [`get_maximum`](Self::get_maximum); the bounds do not vary.
    pub fn get_least_maximum(&self, field: Field) -> i32 {
        field.maximum()
    }

    /// The Jalali week starts on Saturday.
    pub fn first_day_of_week(&self) -> Weekday {
        Weekday::Sat
    }

    /// The destination zone.
    pub fn time_zone(&self) -> TimeZoneId {
        self.dest_zone
    }

    /// The zone the value was captured in.
    pub fn era_time_zone(&self) -> TimeZoneId {
        self.era_zone
    }

    /// Changes the destination zone. The instant is unchanged.
    pub fn set_time_zone(&mut self, zone: TimeZoneId) {
        self.dest_zone = zone;
    }

    /// The absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn instant(&self) -> Result<DateTime<Utc>, EngineError> {
        match &self.state {
            State::Instant(instant) => Ok(*instant),
            State::Fields(fields) => fields.resolve(self.config.leap_rule()),
        }
    }

    /// Milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn timestamp_millis(&self) -> Result<i64, EngineError> {
        Ok(self.instant()?.timestamp_millis())
    }

    /// Moves the value to `instant`, discarding any pending fields.
    pub fn set_instant(&mut self, instant: DateTime<Utc>) {
        self.state = State::Instant(instant);
    }

    /// Whether the instant, rather than the fields, is the source of truth.
    pub fn is_instant_authoritative(&self) -> bool {
        matches!(self.state, State::Instant(_))
    }

    /// The value in the destination zone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] if pending fields cannot be resolved.
    pub fn jalali_date(&self) -> Result<JalaliDate, EngineError> {
        let fields = self.projection()?.fields;
        Ok(JalaliDate::new(fields.year, fields.month, fields.day)
            .with_hms(fields.hour, fields.minute, fields.second)
            .with_millisecond(fields.millisecond)
            .with_time_zone(self.dest_zone))
    }

    fn projection(&self) -> Result<Projection, EngineError> {
        Ok(Projection::new(
            &self.instant()?,
            self.dest_zone,
            self.config.leap_rule(),
        ))
    }

    /// Fields to edit: the pending fields when they are already in the
    /// destination zone, otherwise a fresh projection.
    fn editable_fields(&self) -> Result<WallFields, EngineError> {
        match &self.state {
            State::Fields(fields) if fields.zone == self.dest_zone => Ok(*fields),
            _ => Ok(self.projection()?.fields),
        }
    }
}
