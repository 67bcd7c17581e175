//! # jalali-calendar
//!
//! Pure day-count arithmetic for the Jalali (Solar Hijri) calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["is_leap_year()"] --> B["days_in_month()"]
//!     B --> C["JalaliYmd::new()"]
//!     D["(y, m, d) Gregorian"] -->|"gregorian_to_jalali()"| C
//!     C -->|"jalali_to_gregorian()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use jalali_calendar::{LeapRule, days_in_month, gregorian_to_jalali, is_leap_year, jalali_to_gregorian};
//!
//! assert!(is_leap_year(1387));
//! assert_eq!(days_in_month(1388, 12, LeapRule::default()).unwrap(), 29);
//!
//! let nowruz = gregorian_to_jalali(2009, 3, 21);
//! assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (1388, 1, 1));
//! assert_eq!(jalali_to_gregorian(1388, 1, 1), (2009, 3, 21));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | 128-year cycle leap rule with optional historical overrides |
//! | `month` | Jalali and Gregorian month-length tables |
//! | `convert` | Day-count conversion in both directions, under a [`LeapRule`] |
//! | `date` | Validated Jalali year/month/day |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod leap;
mod month;

pub use convert::{
    gregorian_to_jalali, gregorian_to_jalali_with, jalali_to_gregorian, jalali_to_gregorian_with,
};
pub use date::JalaliYmd;
pub use error::CalendarError;
pub use leap::{LeapRule, is_leap_year, is_leap_year_with};
pub use month::{days_in_month, gregorian_days_in_month, is_gregorian_leap_year, jalali_day_of_year};

/// Smallest year the engine reports as its minimum.
pub const MIN_YEAR: i32 = 979;

/// Largest year the engine reports as its maximum.
pub const MAX_YEAR: i32 = 9979;
