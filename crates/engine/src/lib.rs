//! # jalali-engine
//!
//! A time-zone aware Jalali calendar value with field access, calendar
//! arithmetic and text parsing, built on the day counts of
//! [`jalali_calendar`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["instant + era zone"] -->|"from_instant()"| C["JalaliCalendar"]
//!     B["JalaliDate"] -->|"from_jalali_date()"| C
//!     C -->|"get() / jalali_date()"| D["fields in destination zone"]
//!     C -->|"set() / add() / roll()"| C
//!     C -->|"instant()"| A
//! ```
//!
//! A calendar holds either an instant or a set of raw Jalali fields. Reads
//! project the instant into the destination zone; writes edit fields there
//! and leave the instant to be resolved on the next read.
//!
//! ## Quick Start
//!
//! ```
//! use jalali_engine::{Field, JalaliCalendar, JalaliDate, TimeZoneId};
//!
//! let era: TimeZoneId = "GMT+3:30".parse().unwrap();
//! let dest: TimeZoneId = "GMT+4".parse().unwrap();
//! let date = JalaliDate::new(1387, 12, 30).with_hms(23, 20, 3).with_time_zone(era);
//!
//! let calendar = JalaliCalendar::from_jalali_date(&date, Some(dest));
//! assert_eq!(
//!     calendar.jalali_date().unwrap(),
//!     JalaliDate::new(1387, 12, 30).with_hms(23, 50, 3)
//! );
//! assert_eq!(calendar.get(Field::DayOfYear).unwrap(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | [`JalaliCalendar`]: field access, `add`, `roll`, zones |
//! | `date` | [`JalaliDate`] value type |
//! | `field` | [`Field`] selectors and their bounds |
//! | `fields` | Raw wall-clock fields and carry arithmetic |
//! | `zone` | [`TimeZoneId`]: IANA and fixed-offset zones |
//! | `config` | [`CalendarConfig`] |
//! | `util` | Free conversion and parsing functions |
//! | `error` | Error types |

mod calendar;
mod config;
mod date;
mod error;
mod field;
mod fields;
mod util;
mod zone;

pub use calendar::JalaliCalendar;
pub use config::CalendarConfig;
pub use date::JalaliDate;
pub use error::EngineError;
pub use field::{AM, Field, PM};
pub use jalali_calendar::{LeapRule, MAX_YEAR, MIN_YEAR, is_leap_year};
pub use util::{gregorian_to_jalali, jalali_to_gregorian, parse_jalali_date};
pub use zone::TimeZoneId;
