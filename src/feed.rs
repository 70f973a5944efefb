//! The engine entry point: locate events, generate gateways, assemble
//! the feed document.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::epoch::EpochMilliseconds;
use crate::event::{EventKind, LunarEvent, TimeWindow};
use crate::gateway::{gateways, marker_for_date};
use crate::ics::{assemble, IcsEventRecord};
use crate::locator::locate;
use crate::oracle::PhaseOracle;
use crate::zodiac::Sign;
use crate::LunarResult;

/// Document-level feed configuration.
///
/// `stamped_at` is the `DTSTAMP` applied to every record. It is an
/// explicit input rather than a wall-clock read so that generating the
/// same window twice yields byte-identical documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    /// Display name of the calendar.
    pub name: String,
    /// One-line calendar description.
    pub description: String,
    /// RFC 5545 product identifier.
    pub prod_id: String,
    /// URL attached to every event record.
    pub url: String,
    /// Domain suffix of event identifiers.
    pub domain: String,
    /// Creation timestamp stamped onto every record.
    pub stamped_at: EpochMilliseconds,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            name: "Lunical Lunar Calendar".to_string(),
            description: "New Moon, Full Moon, and Seasonal Gateways".to_string(),
            prod_id: "-//Lunical//Lunar Calendar//EN".to_string(),
            url: "https://lunical.dev".to_string(),
            domain: "lunical.dev".to_string(),
            stamped_at: EpochMilliseconds::from(0),
        }
    }
}

fn lunar_summary(kind: EventKind, sign: Sign) -> String {
    match kind {
        EventKind::NewMoon => format!("New Moon in {sign}"),
        EventKind::FullMoon => format!("Full Moon in {sign}"),
        EventKind::Gateway => "Seasonal Gateway".to_string(),
    }
}

fn lunar_description(kind: EventKind, sign: Sign) -> String {
    match kind {
        EventKind::NewMoon => format!(
            "New Moon in {sign} • The Void • Pure Potential\n\
             In darkness, all possibilities exist. This is the sacred pause before creation.\n\
             Phase Quality: Initiation, planting intentions, pure potential"
        ),
        EventKind::FullMoon => format!(
            "Full Moon in {sign} • The Revelation • Complete Illumination\n\
             All is revealed. See clearly what was hidden. This is peak manifestation.\n\
             Phase Quality: Culmination, revelation, illumination, completion"
        ),
        EventKind::Gateway => "Seasonal Gateway".to_string(),
    }
}

fn record_for(event: LunarEvent) -> IcsEventRecord {
    match event.kind() {
        EventKind::Gateway => {
            let (summary, description) = match marker_for_date(event.date()) {
                Some(marker) => (marker.name.to_string(), marker.description.to_string()),
                None => ("Seasonal Gateway".to_string(), String::new()),
            };
            IcsEventRecord::new(event, summary, description)
        }
        kind => {
            // Lunation events always carry a sign by construction.
            let sign = event.sign().unwrap_or(Sign::Pisces);
            IcsEventRecord::new(
                event,
                lunar_summary(kind, sign),
                lunar_description(kind, sign),
            )
        }
    }
}

/// Generates the full calendar document for a window.
///
/// Runs the event locator and the gateway generator, merges their
/// output, and serializes one `VCALENDAR`. An event-free window still
/// produces a valid empty document.
pub fn generate_calendar<O: PhaseOracle + ?Sized>(
    window: &TimeWindow,
    oracle: &O,
    options: &FeedOptions,
) -> LunarResult<String> {
    let mut records: Vec<IcsEventRecord> = Vec::new();
    for event in locate(window, oracle) {
        records.push(record_for(event));
    }
    for event in gateways(window) {
        records.push(record_for(event));
    }
    assemble(records, options)
}
