//! The `lunical` crate locates lunar phase events and publishes them as
//! an iCalendar feed.
//!
//! ```rust
//! use lunical::{generate_calendar, FeedOptions, MeanLunation, TimeWindow};
//! use lunical::epoch::EpochMilliseconds;
//!
//! // One year starting 2025-01-01T00:00:00Z.
//! let start = EpochMilliseconds::from(1_735_689_600_000);
//! let window = TimeWindow::try_new(start, start.add_days(365)).unwrap();
//!
//! let feed = generate_calendar(&window, &MeanLunation, &FeedOptions::default()).unwrap();
//! assert!(feed.starts_with("BEGIN:VCALENDAR"));
//! ```
//!
//! The engine is a pure batch computation: a [`TimeWindow`] and a
//! [`PhaseOracle`] go in, one serialized calendar document comes out.
//! Phase crossings (New Moon, Full Moon) are found by a coarse daily
//! scan followed by a 15-minute refinement pass, merged with fixed
//! seasonal gateway markers, and rendered as RFC 5545 `VEVENT` records
//! in UTC.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod epoch;
pub mod error;
pub mod event;
pub mod feed;
pub mod gateway;
pub mod ics;
pub mod iso;
pub mod locator;
pub mod oracle;
pub mod zodiac;

#[cfg(feature = "sys")]
pub mod sys;

#[doc(inline)]
pub use error::LunarError;

/// The `lunical` result type.
pub type LunarResult<T> = Result<T, LunarError>;

pub use epoch::EpochMilliseconds;
pub use event::{EventKind, LunarEvent, TimeWindow};
pub use feed::{generate_calendar, FeedOptions};
pub use oracle::{MeanLunation, MoonPhase, PhaseOracle};
pub use zodiac::Sign;

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Milliseconds per hour constant: 3.6e+6
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per minute constant: 6e+4
pub const MS_PER_MINUTE: i64 = 60 * 1000;
/// Max instant millisecond constant
#[doc(hidden)]
pub(crate) const MS_MAX_INSTANT: i64 = MS_PER_DAY * 100_000_000;
/// Min instant millisecond constant
#[doc(hidden)]
pub(crate) const MS_MIN_INSTANT: i64 = -MS_MAX_INSTANT;
