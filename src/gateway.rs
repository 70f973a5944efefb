//! Seasonal gateway markers: the equinoxes and solstices, observed as
//! all-day events on fixed calendar dates.
//!
//! Actual equinox and solstice instants drift by up to a day from year
//! to year; the feed treats each marker as a day-level observance, so
//! fixed month/day pairs are used instead of computed instants.

use alloc::vec::Vec;

use crate::event::{LunarEvent, TimeWindow};
use crate::iso::IsoDate;

/// One seasonal marker's fixed date and display text.
#[derive(Debug, Clone, Copy)]
pub struct GatewayMarker {
    pub month: u8,
    pub day: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// The four markers of the solar year, in calendar order.
pub const GATEWAYS: [GatewayMarker; 4] = [
    GatewayMarker {
        month: 3,
        day: 21,
        name: "Spring Equinox",
        description: "Gateway of Emergence • Balance point between dark and light. The seed breaks through soil.",
    },
    GatewayMarker {
        month: 6,
        day: 21,
        name: "Summer Solstice",
        description: "Gateway of Fullness • Peak solar power. Maximum light, outward expression.",
    },
    GatewayMarker {
        month: 9,
        day: 23,
        name: "Autumn Equinox",
        description: "Gateway of Truth • Balance returns. Harvest and reflection.",
    },
    GatewayMarker {
        month: 12,
        day: 22,
        name: "Winter Solstice",
        description: "Gateway of Initiation • Deepest darkness before rebirth. The inner work begins.",
    },
];

/// Returns the marker observed on the given calendar date, if any.
#[must_use]
pub fn marker_for_date(date: IsoDate) -> Option<&'static GatewayMarker> {
    GATEWAYS
        .iter()
        .find(|marker| marker.month == date.month && marker.day == date.day)
}

/// Generates the all-day gateway events falling inside the window.
///
/// Every year whose span intersects the window is visited; each marker
/// is materialized at UTC midnight and filtered to `[start, end)`.
/// Output is ordered by instant.
#[must_use]
pub fn gateways(window: &TimeWindow) -> Vec<LunarEvent> {
    let start_year = IsoDate::from_epoch_ms(window.start()).year;
    let end_year = IsoDate::from_epoch_ms(window.end()).year;

    let mut events = Vec::new();
    for year in start_year..=end_year {
        for marker in &GATEWAYS {
            let date = IsoDate {
                year,
                month: marker.month,
                day: marker.day,
            };
            let instant = date.to_epoch_ms();
            if window.contains(instant) {
                events.push(LunarEvent::gateway(instant));
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::EpochMilliseconds;
    use crate::event::EventKind;
    use crate::MS_PER_DAY;

    #[test]
    fn one_calendar_year_yields_four_markers() {
        // 2025-01-01T00:00:00Z .. 2026-01-01T00:00:00Z
        let start = EpochMilliseconds::from(1_735_689_600_000);
        let window = TimeWindow::try_new(start, start.add_days(365)).unwrap();
        let events = gateways(&window);

        assert_eq!(events.len(), 4);
        for (event, marker) in events.iter().zip(&GATEWAYS) {
            assert_eq!(event.kind(), EventKind::Gateway);
            assert!(event.is_all_day());
            let date = event.date();
            assert_eq!((date.month, date.day), (marker.month, marker.day));
            assert_eq!(date.year, 2025);
            // All-day span is exactly one day.
            assert_eq!(
                date.next_day().to_epoch_ms().as_i64() - event.instant().as_i64(),
                MS_PER_DAY
            );
        }
    }

    #[test]
    fn window_straddling_new_year() {
        // 2024-12-01 .. 2025-04-01 catches the winter solstice and the
        // following spring equinox.
        let start = IsoDate {
            year: 2024,
            month: 12,
            day: 1,
        }
        .to_epoch_ms();
        let end = IsoDate {
            year: 2025,
            month: 4,
            day: 1,
        }
        .to_epoch_ms();
        let window = TimeWindow::try_new(start, end).unwrap();
        let events = gateways(&window);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].date().year, 2024);
        assert_eq!((events[0].date().month, events[0].date().day), (12, 22));
        assert_eq!(events[1].date().year, 2025);
        assert_eq!((events[1].date().month, events[1].date().day), (3, 21));
    }

    #[test]
    fn marker_lookup() {
        let solstice = IsoDate {
            year: 2025,
            month: 6,
            day: 21,
        };
        assert_eq!(marker_for_date(solstice).map(|m| m.name), Some("Summer Solstice"));
        assert!(marker_for_date(IsoDate {
            year: 2025,
            month: 6,
            day: 22
        })
        .is_none());
    }
}
