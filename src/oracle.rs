//! The phase oracle abstraction and the built-in mean-lunation model.
//!
//! The event locator only ever sees [`PhaseOracle`]; any ephemeris
//! library can back the trait. [`MeanLunation`] is the built-in
//! stand-in: a uniform-speed model anchored at a known new moon, good
//! to a few hours, which the locator's crossing search tolerates.

use crate::epoch::EpochMilliseconds;
use crate::MS_PER_DAY;
// Newer toolchains make the f64 methods inherent in `core`; the trait
// import keeps the minimum supported compiler working.
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Mean length of a synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// Mean length of a synodic month in milliseconds.
pub(crate) const SYNODIC_MONTH_MS: f64 = SYNODIC_MONTH_DAYS * MS_PER_DAY as f64;

// The new moon of 2000-01-06 18:14 UTC, the usual lunation-number anchor.
const LUNATION_EPOCH_MS: i64 = 947_182_440_000;

/// A source of the Moon's illumination phase.
///
/// `phase_at` reports a fraction in `[0, 1)`: `0` is New Moon, `0.5`
/// is Full Moon. Implementations must be pure; between events the
/// reported phase is expected to increase monotonically with a
/// ~29.53-day period. The locator treats out-of-range or non-finite
/// values as anomalies and skips them rather than aborting.
pub trait PhaseOracle {
    /// Returns the phase fraction at the given instant.
    fn phase_at(&self, at: EpochMilliseconds) -> f64;
}

/// The built-in mean synodic month oracle.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanLunation;

impl PhaseOracle for MeanLunation {
    fn phase_at(&self, at: EpochMilliseconds) -> f64 {
        let elapsed = (at.as_i64() - LUNATION_EPOCH_MS) as f64;
        (elapsed / SYNODIC_MONTH_MS).rem_euclid(1.0)
    }
}

/// The eight named phases of the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Classifies a phase fraction into a named phase.
    ///
    /// The quarter phases get a narrow band around their exact
    /// fraction; anything out of `[0, 1)` falls back to `New`.
    #[must_use]
    pub fn classify(phase: f64) -> Self {
        match phase {
            p if p >= 0.99 || p < 0.01 => Self::New,
            p if p < 0.24 => Self::WaxingCrescent,
            p if p < 0.26 => Self::FirstQuarter,
            p if p < 0.49 => Self::WaxingGibbous,
            p if p < 0.51 => Self::Full,
            p if p < 0.74 => Self::WaningGibbous,
            p if p < 0.76 => Self::LastQuarter,
            p if p < 0.99 => Self::WaningCrescent,
            _ => Self::New,
        }
    }

    /// Returns the phase's display name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl core::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated days until the next New Moon from a phase fraction.
#[must_use]
pub fn days_until_new(phase: f64) -> f64 {
    (1.0 - phase).rem_euclid(1.0) * SYNODIC_MONTH_DAYS
}

/// Estimated days until the next Full Moon from a phase fraction.
#[must_use]
pub fn days_until_full(phase: f64) -> f64 {
    (0.5 - phase).rem_euclid(1.0) * SYNODIC_MONTH_DAYS
}
