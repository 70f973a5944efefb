//! iCalendar (RFC 5545) document assembly.
//!
//! The whole document is produced through [`Writeable`] impls: leaf
//! components (dates, escaped text) know their own shape, and the
//! calendar writer stitches them into CRLF-terminated content lines.
//! Identifiers are derived from `(kind, instant)` only, so assembling
//! the same events twice yields byte-identical output.

use alloc::string::String;
use alloc::vec::Vec;

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::epoch::EpochMilliseconds;
use crate::event::LunarEvent;
use crate::feed::FeedOptions;
use crate::iso::{IcsDate, IcsDateTimeUtc, IsoDate};
use crate::{LunarError, LunarResult, MS_PER_HOUR};

const CRLF: &str = "\r\n";

/// One event plus its display text, ready for assembly.
#[derive(Debug, Clone)]
pub struct IcsEventRecord {
    event: LunarEvent,
    summary: String,
    description: String,
}

impl IcsEventRecord {
    /// Pairs an event with its summary and description text.
    #[must_use]
    pub fn new(event: LunarEvent, summary: String, description: String) -> Self {
        Self {
            event,
            summary,
            description,
        }
    }

    /// Returns the underlying event.
    #[inline]
    #[must_use]
    pub fn event(&self) -> &LunarEvent {
        &self.event
    }
}

/// Assembles validated records into a complete calendar document.
///
/// Records are stable-sorted by instant, so equal instants keep their
/// input order. An empty record list still yields a syntactically
/// valid document: envelope and footer with zero `VEVENT` blocks.
pub fn assemble(
    mut records: Vec<IcsEventRecord>,
    options: &FeedOptions,
) -> LunarResult<String> {
    // The stamp renders through the same fixed-width date-time writer
    // as event instants, so it obeys the same bounds.
    options.stamped_at.check_validity()?;
    if !(0..=9999).contains(&IsoDate::from_epoch_ms(options.stamped_at).year) {
        return Err(LunarError::range()
            .with_message("Stamp year is outside the representable feed range."));
    }
    for record in &records {
        record.event.validate_for_feed()?;
    }
    records.sort_by_key(|record| record.event.instant());

    let calendar = FormattableCalendar {
        options,
        records: &records,
    };
    Ok(calendar.write_to_string().into_owned())
}

struct FormattableCalendar<'a> {
    options: &'a FeedOptions,
    records: &'a [IcsEventRecord],
}

impl Writeable for FormattableCalendar<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        content_line(sink, "BEGIN", "VCALENDAR")?;
        content_line(sink, "VERSION", "2.0")?;
        escaped_line(sink, "PRODID", &self.options.prod_id)?;
        content_line(sink, "CALSCALE", "GREGORIAN")?;
        content_line(sink, "METHOD", "PUBLISH")?;
        escaped_line(sink, "X-WR-CALNAME", &self.options.name)?;
        escaped_line(sink, "X-WR-CALDESC", &self.options.description)?;
        content_line(sink, "X-WR-TIMEZONE", "UTC")?;
        content_line(sink, "REFRESH-INTERVAL;VALUE=DURATION", "P1W")?;
        content_line(sink, "X-PUBLISHED-TTL", "PT1H")?;
        escaped_line(sink, "NAME", &self.options.name)?;
        for record in self.records {
            FormattableEvent {
                record,
                options: self.options,
            }
            .write_to(sink)?;
        }
        sink.write_str("END:VCALENDAR")
    }
}

struct FormattableEvent<'a> {
    record: &'a IcsEventRecord,
    options: &'a FeedOptions,
}

impl Writeable for FormattableEvent<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let event = &self.record.event;
        content_line(sink, "BEGIN", "VEVENT")?;

        // UID: deterministic from kind and instant alone.
        sink.write_str("UID:lunical-")?;
        sink.write_str(event.kind().uid_tag())?;
        sink.write_char('-')?;
        event.instant().as_i64().write_to(sink)?;
        sink.write_char('@')?;
        sink.write_str(&self.options.domain)?;
        sink.write_str(CRLF)?;

        sink.write_str("DTSTAMP:")?;
        IcsDateTimeUtc::from_epoch_ms(self.options.stamped_at).write_to(sink)?;
        sink.write_str(CRLF)?;

        // Date-only and date-time forms never mix within one record.
        if event.is_all_day() {
            let date = event.date();
            sink.write_str("DTSTART;VALUE=DATE:")?;
            IcsDate(date).write_to(sink)?;
            sink.write_str(CRLF)?;
            sink.write_str("DTEND;VALUE=DATE:")?;
            IcsDate(date.next_day()).write_to(sink)?;
            sink.write_str(CRLF)?;
        } else {
            sink.write_str("DTSTART:")?;
            IcsDateTimeUtc::from_epoch_ms(event.instant()).write_to(sink)?;
            sink.write_str(CRLF)?;
            sink.write_str("DTEND:")?;
            IcsDateTimeUtc::from_epoch_ms(one_hour_later(event.instant())).write_to(sink)?;
            sink.write_str(CRLF)?;
        }

        escaped_line(sink, "SUMMARY", &self.record.summary)?;
        escaped_line(sink, "DESCRIPTION", &self.record.description)?;

        content_line(sink, "STATUS", "CONFIRMED")?;
        content_line(sink, "TRANSP", "TRANSPARENT")?;
        content_line(sink, "URL", &self.options.url)?;
        content_line(sink, "SEQUENCE", "0")?;
        content_line(sink, "END", "VEVENT")
    }
}

fn one_hour_later(at: EpochMilliseconds) -> EpochMilliseconds {
    at.add_ms(MS_PER_HOUR)
}

fn content_line<W: core::fmt::Write + ?Sized>(
    sink: &mut W,
    name: &str,
    value: &str,
) -> core::fmt::Result {
    sink.write_str(name)?;
    sink.write_char(':')?;
    sink.write_str(value)?;
    sink.write_str(CRLF)
}

// For caller-supplied values, which may contain TEXT-special characters.
fn escaped_line<W: core::fmt::Write + ?Sized>(
    sink: &mut W,
    name: &str,
    value: &str,
) -> core::fmt::Result {
    sink.write_str(name)?;
    sink.write_char(':')?;
    EscapedText(value).write_to(sink)?;
    sink.write_str(CRLF)
}

/// RFC 5545 TEXT escaping: backslash, semicolon, comma, and newline.
struct EscapedText<'a>(&'a str);

impl Writeable for EscapedText<'_> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        for c in self.0.chars() {
            match c {
                '\\' => sink.write_str("\\\\")?,
                ';' => sink.write_str("\\;")?,
                ',' => sink.write_str("\\,")?,
                '\n' => sink.write_str("\\n")?,
                '\r' => {}
                _ => sink.write_char(c)?,
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::between(self.0.len(), self.0.len() * 2)
    }
}

impl_display_with_writeable!(EscapedText<'_>);
