//! UTC instants measured in milliseconds from the Unix epoch.

use crate::{LunarError, LunarResult, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

/// A UTC instant as a millisecond offset from the Unix epoch.
///
/// Milliseconds are the crate-wide time unit: event detection runs on a
/// 15-minute grid, so sub-millisecond precision carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EpochMilliseconds(pub(crate) i64);

impl From<i64> for EpochMilliseconds {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl EpochMilliseconds {
    /// Returns the underlying millisecond offset.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Checks that the instant is within the supported epoch range.
    pub fn check_validity(&self) -> LunarResult<()> {
        if !is_valid_epoch_ms(&self.0) {
            return Err(
                LunarError::range().with_message("Instant is not within a valid epoch range.")
            );
        }
        Ok(())
    }

    /// Returns this instant offset by a whole number of days.
    #[inline]
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + days * MS_PER_DAY)
    }

    /// Returns this instant offset by a whole number of hours.
    #[inline]
    #[must_use]
    pub fn add_hours(&self, hours: i64) -> Self {
        Self(self.0 + hours * MS_PER_HOUR)
    }

    /// Returns this instant offset by a whole number of minutes.
    #[inline]
    #[must_use]
    pub fn add_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + minutes * MS_PER_MINUTE)
    }

    /// Returns this instant offset by a raw millisecond amount.
    #[inline]
    #[must_use]
    pub fn add_ms(&self, ms: i64) -> Self {
        Self(self.0 + ms)
    }
}

/// Utility for determining if an instant is within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_ms(ms: &i64) -> bool {
    (crate::MS_MIN_INSTANT..=crate::MS_MAX_INSTANT).contains(ms)
}
