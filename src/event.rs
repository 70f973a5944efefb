//! The core data model: lunar events and search windows.

use crate::epoch::EpochMilliseconds;
use crate::iso::IsoDate;
use crate::zodiac::Sign;
use crate::{LunarError, LunarResult, MS_PER_DAY};

/// The kind of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    NewMoon,
    FullMoon,
    /// A seasonal marker (equinox or solstice), observed as a day.
    Gateway,
}

impl EventKind {
    /// A short stable tag used in feed identifiers.
    pub(crate) fn uid_tag(&self) -> &'static str {
        match self {
            Self::NewMoon => "new",
            Self::FullMoon => "full",
            Self::Gateway => "gateway",
        }
    }
}

/// A located calendar event. Immutable once constructed.
///
/// Construction goes through [`LunarEvent::new_moon`],
/// [`LunarEvent::full_moon`], or [`LunarEvent::gateway`], which keep
/// the `all_day` flag consistent with the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarEvent {
    kind: EventKind,
    instant: EpochMilliseconds,
    sign: Option<Sign>,
    all_day: bool,
}

impl LunarEvent {
    /// Creates a timed New Moon event.
    #[must_use]
    pub fn new_moon(instant: EpochMilliseconds, sign: Sign) -> Self {
        Self {
            kind: EventKind::NewMoon,
            instant,
            sign: Some(sign),
            all_day: false,
        }
    }

    /// Creates a timed Full Moon event.
    #[must_use]
    pub fn full_moon(instant: EpochMilliseconds, sign: Sign) -> Self {
        Self {
            kind: EventKind::FullMoon,
            instant,
            sign: Some(sign),
            all_day: false,
        }
    }

    /// Creates an all-day gateway event at the given UTC midnight.
    #[must_use]
    pub fn gateway(instant: EpochMilliseconds) -> Self {
        Self {
            kind: EventKind::Gateway,
            instant,
            sign: None,
            all_day: true,
        }
    }

    /// Returns the event's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the event's UTC instant.
    #[inline]
    #[must_use]
    pub fn instant(&self) -> EpochMilliseconds {
        self.instant
    }

    /// Returns the event's zodiac sign, if it carries one.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Option<Sign> {
        self.sign
    }

    /// Whether the event is observed as a whole day.
    #[inline]
    #[must_use]
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    /// Returns the event's UTC calendar date.
    #[must_use]
    pub fn date(&self) -> IsoDate {
        IsoDate::from_epoch_ms(self.instant)
    }

    /// The key under which re-entrant scans deduplicate: one event per
    /// kind per calendar date.
    #[must_use]
    pub fn dedup_key(&self) -> (EventKind, IsoDate) {
        (self.kind, self.date())
    }

    /// Defensive check run before feed assembly.
    ///
    /// All-day events must sit at UTC midnight so the date-only
    /// rendering is faithful; timed events must not claim `all_day`;
    /// the instant must fit the fixed-width iCalendar year.
    pub fn validate_for_feed(&self) -> LunarResult<()> {
        self.instant.check_validity()?;
        match self.kind {
            EventKind::Gateway => {
                if !self.all_day {
                    return Err(LunarError::range()
                        .with_message("Gateway events must be marked all-day."));
                }
                if self.instant.as_i64().rem_euclid(MS_PER_DAY) != 0 {
                    return Err(LunarError::range()
                        .with_message("All-day event instants must be a UTC midnight."));
                }
            }
            EventKind::NewMoon | EventKind::FullMoon => {
                if self.all_day {
                    return Err(LunarError::range()
                        .with_message("Lunation events must carry a time of day."));
                }
            }
        }
        if !(0..=9999).contains(&self.date().year) {
            return Err(LunarError::range()
                .with_message("Event year is outside the representable feed range."));
        }
        Ok(())
    }
}

/// A half-open UTC search interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: EpochMilliseconds,
    end: EpochMilliseconds,
}

impl TimeWindow {
    /// Creates a window, rejecting empty or inverted intervals.
    pub fn try_new(start: EpochMilliseconds, end: EpochMilliseconds) -> LunarResult<Self> {
        if start >= end {
            return Err(
                LunarError::range().with_message("window start must precede window end.")
            );
        }
        start.check_validity()?;
        end.check_validity()?;
        Ok(Self { start, end })
    }

    /// Returns the window's inclusive start.
    #[inline]
    #[must_use]
    pub fn start(&self) -> EpochMilliseconds {
        self.start
    }

    /// Returns the window's exclusive end.
    #[inline]
    #[must_use]
    pub fn end(&self) -> EpochMilliseconds {
        self.end
    }

    /// Whether an instant falls inside the window.
    #[inline]
    #[must_use]
    pub fn contains(&self, at: EpochMilliseconds) -> bool {
        self.start <= at && at < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_window_rejected() {
        let at = EpochMilliseconds::from(1_700_000_000_000);
        let err = TimeWindow::try_new(at, at).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(TimeWindow::try_new(at, at.add_days(-1)).is_err());
        assert!(TimeWindow::try_new(at, at.add_days(1)).is_ok());
    }

    #[test]
    fn window_is_half_open() {
        let start = EpochMilliseconds::from(0);
        let window = TimeWindow::try_new(start, start.add_days(30)).unwrap();
        assert!(window.contains(start));
        assert!(window.contains(start.add_days(30).add_ms(-1)));
        assert!(!window.contains(start.add_days(30)));
    }

    #[test]
    fn feed_validation() {
        use crate::zodiac::Sign;

        // 2025-03-21T00:00:00Z
        let midnight = EpochMilliseconds::from(1_742_515_200_000);
        assert!(LunarEvent::gateway(midnight).validate_for_feed().is_ok());
        assert!(LunarEvent::gateway(midnight.add_hours(12))
            .validate_for_feed()
            .is_err());
        assert!(LunarEvent::new_moon(midnight.add_hours(5), Sign::Aries)
            .validate_for_feed()
            .is_ok());
    }

    #[test]
    fn dedup_key_is_kind_and_date() {
        use crate::zodiac::Sign;

        let morning = EpochMilliseconds::from(1_742_515_200_000).add_hours(6);
        let evening = morning.add_hours(12);
        let a = LunarEvent::new_moon(morning, Sign::Aries);
        let b = LunarEvent::new_moon(evening, Sign::Aries);
        assert_eq!(a.dedup_key(), b.dedup_key());

        let c = LunarEvent::full_moon(morning, Sign::Aries);
        assert_ne!(a.dedup_key(), c.dedup_key());
    }
}
