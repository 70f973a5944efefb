//! System clock access for building "now"-anchored windows.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::epoch::EpochMilliseconds;
use crate::event::TimeWindow;
use crate::{LunarError, LunarResult};

// Day-level precision is all the feed needs from a "month".
const MS_PER_MEAN_MONTH: i64 = (30.44 * crate::MS_PER_DAY as f64) as i64;

/// Returns the current system time in epoch milliseconds.
pub fn current_epoch_ms() -> LunarResult<EpochMilliseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| LunarError::general("Error fetching system time"))
        .map(|duration| EpochMilliseconds::from(duration.as_millis() as i64))
}

impl TimeWindow {
    /// Builds the default feed window: now to now plus `months` mean
    /// months. Zero months is an empty window and is rejected.
    pub fn months_from_now(months: u32) -> LunarResult<Self> {
        let now = current_epoch_ms()?;
        Self::try_new(now, now.add_ms(i64::from(months) * MS_PER_MEAN_MONTH))
    }

    /// Builds a window reaching `months_back` mean months into the
    /// past and `months_ahead` ahead of now.
    pub fn months_around_now(months_back: u32, months_ahead: u32) -> LunarResult<Self> {
        let now = current_epoch_ms()?;
        Self::try_new(
            now.add_ms(-i64::from(months_back) * MS_PER_MEAN_MONTH),
            now.add_ms(i64::from(months_ahead) * MS_PER_MEAN_MONTH),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_window_spans_forward() {
        let window = TimeWindow::months_from_now(12).unwrap();
        assert!(window.start() < window.end());
        let span = window.end().as_i64() - window.start().as_i64();
        assert_eq!(span, 12 * MS_PER_MEAN_MONTH);
    }

    #[test]
    fn zero_months_is_empty() {
        let err = TimeWindow::months_from_now(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }
}
