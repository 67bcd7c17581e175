//! Error types for the jalali-calendar crate.

/// Error type for all fallible operations in the jalali-calendar crate.
///
/// Both variants signal a structurally impossible month or day. Callers that
/// normalize their fields first never see them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year the month belongs to.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },
}
