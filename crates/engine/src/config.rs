//! Configuration for calendar arithmetic.

use jalali_calendar::LeapRule;

/// Configuration for a [`JalaliCalendar`](crate::JalaliCalendar).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use jalali_engine::{CalendarConfig, LeapRule};
///
/// let config = CalendarConfig::new()
///     .with_historical_overrides(false)
///     .with_preserve_overflow(true);
///
/// assert_eq!(config.leap_rule(), LeapRule::Khayyam);
/// assert!(config.preserve_overflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Apply the 1403/1436/1469 leap-year corrections.
    historical_overrides: bool,
    /// Keep a day past the end of the month when adding years or months,
    /// letting it spill into the next month instead of clamping.
    preserve_overflow: bool,
}

impl CalendarConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `historical_overrides = true`, `preserve_overflow = false`.
    pub fn new() -> Self {
        Self {
            historical_overrides: true,
            preserve_overflow: false,
        }
    }

    /// Enables or disables the historical leap-year overrides.
    pub fn with_historical_overrides(mut self, enabled: bool) -> Self {
        self.historical_overrides = enabled;
        self
    }

    /// Enables or disables day overflow when adding years or months.
    pub fn with_preserve_overflow(mut self, enabled: bool) -> Self {
        self.preserve_overflow = enabled;
        self
    }

    /// Returns whether the historical overrides are applied.
    pub fn historical_overrides(&self) -> bool {
        self.historical_overrides
    }

    /// Returns whether day overflow is preserved.
    pub fn preserve_overflow(&self) -> bool {
        self.preserve_overflow
    }

    /// The leap rule selected by this configuration.
    pub fn leap_rule(&self) -> LeapRule {
        LeapRule::from_overrides(self.historical_overrides)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}
