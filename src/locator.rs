//! The event locator: a two-phase search for lunar phase crossings.
//!
//! A coarse scan samples the oracle once per day until it sees a phase
//! crossing, then a fine pass samples every 15 minutes across the day
//! step that brackets the crossing and keeps the sample closest to the
//! exact phase.
//! The scan watches for both crossing kinds at once, so results come
//! out already ordered by instant.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::epoch::EpochMilliseconds;
use crate::event::{EventKind, LunarEvent, TimeWindow};
use crate::iso::IsoDate;
use crate::oracle::PhaseOracle;
use crate::zodiac::Sign;
use crate::MS_PER_MINUTE;
// Newer toolchains make the f64 methods inherent in `core`; the trait
// import keeps the minimum supported compiler working.
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Maximum daily steps in one coarse scan. A healthy oracle crosses a
/// phase within ~30 days; hitting this cap means the oracle is
/// misbehaving and the segment yields nothing.
pub(crate) const COARSE_SCAN_CAP: i64 = 40;

/// Fine-pass sample spacing.
const FINE_STEP_MS: i64 = 15 * MS_PER_MINUTE;
/// Fine-pass sample count: every 15 minutes across 24 hours.
const FINE_SAMPLES: i64 = 24 * 4;

/// The two detectable phase crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crossing {
    New,
    Full,
}

impl Crossing {
    fn kind(self) -> EventKind {
        match self {
            Self::New => EventKind::NewMoon,
            Self::Full => EventKind::FullMoon,
        }
    }

    /// Distance from the exact crossing phase; smaller is closer.
    fn distance(self, phase: f64) -> f64 {
        match self {
            Self::New => phase.min(1.0 - phase),
            Self::Full => (phase - 0.5).abs(),
        }
    }
}

/// Samples the oracle, voiding anomalous values.
///
/// Out-of-range or non-finite phases are oracle anomalies; returning
/// `None` makes the step carry no transition instead of aborting.
fn sample<O: PhaseOracle + ?Sized>(oracle: &O, at: EpochMilliseconds) -> Option<f64> {
    let phase = oracle.phase_at(at);
    if (0.0..1.0).contains(&phase) {
        Some(phase)
    } else {
        #[cfg(feature = "log")]
        log::debug!("oracle anomaly: phase {phase} at {} ms", at.as_i64());
        None
    }
}

/// Coarse scan: daily samples from `from`, reporting the first day step
/// that crosses either phase boundary.
///
/// New Moon is a wrap (previous day above 0.95, next below 0.05); Full
/// Moon is the 0.5 boundary, which counts as reached at exactly 0.5.
fn coarse_scan<O: PhaseOracle + ?Sized>(
    oracle: &O,
    from: EpochMilliseconds,
) -> Option<(Crossing, EpochMilliseconds)> {
    let mut previous = sample(oracle, from);
    for step in 1..=COARSE_SCAN_CAP {
        let at = from.add_days(step);
        let current = sample(oracle, at);
        if let (Some(prev), Some(cur)) = (previous, current) {
            if prev > 0.95 && cur < 0.05 {
                return Some((Crossing::New, at));
            }
            if prev < 0.5 && cur >= 0.5 {
                return Some((Crossing::Full, at));
            }
        }
        previous = current;
    }
    None
}

/// Fine refinement: 15-minute samples across the day step that
/// brackets the crossing; the first sample at minimal distance wins.
///
/// The coarse hit is the first daily sample past the crossing, so the
/// crossing lies in `(hit - 1 day, hit]`. Sampling that whole span,
/// both endpoints included, keeps the result within one grid step of
/// the true instant.
fn refine<O: PhaseOracle + ?Sized>(
    oracle: &O,
    hit: EpochMilliseconds,
    crossing: Crossing,
) -> EpochMilliseconds {
    let from = hit.add_days(-1);
    let mut best_at = hit;
    let mut best_distance = 1.0;
    for i in 0..=FINE_SAMPLES {
        let at = from.add_ms(i * FINE_STEP_MS);
        let Some(phase) = sample(oracle, at) else {
            continue;
        };
        let distance = crossing.distance(phase);
        if distance < best_distance {
            best_distance = distance;
            best_at = at;
        }
    }
    best_at
}

/// Locates all New Moon and Full Moon events inside the window.
///
/// Events come out ordered by instant, at most one per kind per
/// calendar date, each instant accurate to the 15-minute sample grid.
/// A window shorter than a lunation may legitimately yield nothing; a
/// broken oracle yields nothing for the affected segments rather than
/// an error.
pub fn locate<O: PhaseOracle + ?Sized>(window: &TimeWindow, oracle: &O) -> Vec<LunarEvent> {
    let mut events = Vec::new();
    let mut seen: BTreeSet<(EventKind, IsoDate)> = BTreeSet::new();
    let mut cursor = window.start();

    while cursor < window.end() {
        let Some((crossing, hit)) = coarse_scan(oracle, cursor) else {
            #[cfg(feature = "log")]
            log::debug!(
                "no phase crossing within {COARSE_SCAN_CAP} days of {} ms; advancing",
                cursor.as_i64()
            );
            cursor = cursor.add_days(COARSE_SCAN_CAP);
            continue;
        };

        let instant = refine(oracle, hit, crossing);
        if instant >= window.end() {
            // The scan reports the earliest crossing of either kind,
            // so nothing in-window remains.
            break;
        }

        let date = IsoDate::from_epoch_ms(instant);
        if seen.insert((crossing.kind(), date)) {
            let sign = Sign::for_date(date);
            let event = match crossing {
                Crossing::New => LunarEvent::new_moon(instant, sign),
                Crossing::Full => LunarEvent::full_moon(instant, sign),
            };
            events.push(event);
        }

        // Resume one day past the found instant. The next crossing of
        // either kind is ~14 days out, so nothing can be skipped.
        cursor = instant.add_days(1);
    }

    events
}
