//! End-to-end feed generation properties.

use lunical::epoch::EpochMilliseconds;
use lunical::{
    generate_calendar, locator::locate, EventKind, FeedOptions, LunarEvent, MeanLunation,
    PhaseOracle, TimeWindow,
};

const DAY: i64 = lunical::MS_PER_DAY;
const HOUR: i64 = lunical::MS_PER_HOUR;

/// A uniform-speed synthetic oracle for exact expectations.
struct LinearOracle {
    anchor: i64,
    period_ms: f64,
}

impl PhaseOracle for LinearOracle {
    fn phase_at(&self, at: EpochMilliseconds) -> f64 {
        ((at.as_i64() - self.anchor) as f64 / self.period_ms).rem_euclid(1.0)
    }
}

fn window(start_ms: i64, days: i64) -> TimeWindow {
    let start = EpochMilliseconds::from(start_ms);
    TimeWindow::try_new(start, start.add_days(days)).unwrap()
}

// 2025-01-01T00:00:00Z
const JAN_1_2025: i64 = 1_735_689_600_000;

#[test]
fn ordering_is_non_decreasing() {
    let w = window(JAN_1_2025, 365);
    let events = locate(&w, &MeanLunation);
    assert!(!events.is_empty());
    assert!(events
        .windows(2)
        .all(|pair| pair[0].instant() <= pair[1].instant()));
}

#[test]
fn new_moon_periodicity() {
    let w = window(JAN_1_2025, 365);
    let events = locate(&w, &MeanLunation);
    let new_moons: Vec<_> = events
        .iter()
        .filter(|e| e.kind() == EventKind::NewMoon)
        .map(|e| e.instant().as_i64())
        .collect();
    assert!(new_moons.len() >= 11);
    for pair in new_moons.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= 29 * DAY, "gap of {} ms is too short", gap);
        assert!(gap <= 30 * DAY, "gap of {} ms is too long", gap);
    }
}

#[test]
fn no_duplicate_lunation() {
    let w = window(JAN_1_2025, 365);
    let events = locate(&w, &MeanLunation);
    let mut keys: Vec<_> = events.iter().map(LunarEvent::dedup_key).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn feed_generation_is_idempotent() {
    let w = window(JAN_1_2025, 365);
    let options = FeedOptions::default();
    let first = generate_calendar(&w, &MeanLunation, &options).unwrap();
    let second = generate_calendar(&w, &MeanLunation, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn zero_length_window_is_rejected() {
    let at = EpochMilliseconds::from(JAN_1_2025);
    assert!(TimeWindow::try_new(at, at).is_err());
}

// Scenario A: a wrap between day 5 and day 6 of the window is reported
// as a New Moon inside that day, on the 15-minute grid.
#[test]
fn scenario_a_wrap_between_day_five_and_six() {
    let start = JAN_1_2025;
    let oracle = LinearOracle {
        anchor: start + 5 * DAY + 12 * HOUR,
        period_ms: 29.5 * DAY as f64,
    };
    let events = locate(&window(start, 12), &oracle);

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.kind(), EventKind::NewMoon);
    assert!(event.instant().as_i64() >= start + 5 * DAY);
    assert!(event.instant().as_i64() < start + 6 * DAY);
    // On the 15-minute grid, and here exactly on the true crossing.
    assert_eq!(event.instant().as_i64() % (15 * 60 * 1000), 0);
    assert_eq!(event.instant().as_i64(), start + 5 * DAY + 12 * HOUR);
}

// Scenario B: one calendar year produces exactly four all-day gateway
// events on the fixed dates, each spanning exactly one day.
#[test]
fn scenario_b_one_year_of_gateways() {
    let w = window(JAN_1_2025, 365);
    let events = lunical::gateway::gateways(&w);

    assert_eq!(events.len(), 4);
    let expected = [(3, 21), (6, 21), (9, 23), (12, 22)];
    for (event, (month, day)) in events.iter().zip(expected) {
        assert!(event.is_all_day());
        let date = event.date();
        assert_eq!(date.year, 2025);
        assert_eq!((date.month, date.day), (month, day));
        assert_eq!(
            date.next_day().to_epoch_ms().as_i64(),
            event.instant().as_i64() + DAY
        );
    }
}

// Scenario C: an oracle that never crosses 0.5 yields no full moons
// and no error.
#[test]
fn scenario_c_constant_phase_yields_nothing() {
    struct Stuck;
    impl PhaseOracle for Stuck {
        fn phase_at(&self, _: EpochMilliseconds) -> f64 {
            0.3
        }
    }
    let events = locate(&window(JAN_1_2025, 40), &Stuck);
    assert!(events.is_empty());

    let feed = generate_calendar(&window(JAN_1_2025, 40), &Stuck, &FeedOptions::default());
    assert!(feed.is_ok());
}

#[test]
fn full_year_feed_contains_all_event_families() {
    let w = window(JAN_1_2025, 365);
    let feed = generate_calendar(&w, &MeanLunation, &FeedOptions::default()).unwrap();

    assert!(feed.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(feed.ends_with("END:VCALENDAR"));
    assert_eq!(feed.matches("UID:lunical-gateway-").count(), 4);
    assert!(feed.matches("UID:lunical-new-").count() >= 11);
    assert!(feed.matches("UID:lunical-full-").count() >= 11);
    assert_eq!(
        feed.matches("BEGIN:VEVENT\r\n").count(),
        feed.matches("END:VEVENT\r\n").count()
    );
    // Every record carries the deterministic stamp.
    assert!(feed.contains("DTSTAMP:19700101T000000Z\r\n"));
}
