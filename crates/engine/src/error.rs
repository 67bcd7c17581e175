//! Error types for the jalali-engine crate.

use jalali_calendar::CalendarError;

/// Error type for all fallible operations in the jalali-engine crate.
///
/// Out-of-range sub-fields handed to constructors and setters are not
/// errors; they are carried into the next larger field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Returned when a comparison involves a date that fails validation.
    #[error("invalid date argument: {date}")]
    InvalidDate {
        /// The offending date, in `YYYY/MM/DD hh:mm:ss` form.
        date: String,
    },

    /// Returned when text does not match the parse pattern.
    #[error("the date text {text:?} is not valid: {reason}")]
    Parse {
        /// The input that failed to parse.
        text: String,
        /// Why the parser rejected it.
        reason: String,
    },

    /// Returned when a time-zone identifier is not recognised.
    #[error("unknown time zone: {id:?}")]
    UnknownTimeZone {
        /// The identifier as given.
        id: String,
    },

    /// Returned when fields resolve to an instant outside the representable range.
    #[error("date {year}/{month}/{day} is outside the representable range")]
    OutOfRange {
        /// Jalali year.
        year: i32,
        /// Jalali month (1-based).
        month: i32,
        /// Jalali day of month.
        day: i32,
    },

    /// A structural error from the calendar arithmetic.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
