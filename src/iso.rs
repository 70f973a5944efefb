//! Gregorian date and time equations over epoch milliseconds, plus the
//! iCalendar basic-format components built from them.
//!
//! The equations mirror the ECMAScript `Date` abstract operations, kept
//! in integer millisecond arithmetic so every conversion is exact.

use crate::epoch::EpochMilliseconds;
use crate::MS_PER_DAY;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

// ==== Begin Date Equations ====

pub(crate) fn epoch_ms_to_day_number(t: i64) -> i64 {
    t.div_euclid(MS_PER_DAY)
}

/// Mathematically determine the days in a year.
pub(crate) fn mathematical_days_in_year(y: i32) -> i32 {
    if y % 4 != 0 {
        365
    } else if y % 4 == 0 && y % 100 != 0 {
        366
    } else if y % 100 == 0 && y % 400 != 0 {
        365
    } else {
        // Assert that y is divisible by 400 to ensure we are returning the correct result.
        debug_assert_eq!(y % 400, 0);
        366
    }
}

/// Returns the epoch day number for a given year.
pub(crate) fn epoch_day_number_for_year(y: i64) -> i64 {
    365 * (y - 1970) + (y - 1969).div_euclid(4) - (y - 1901).div_euclid(100)
        + (y - 1601).div_euclid(400)
}

pub(crate) fn epoch_ms_for_year(y: i32) -> i64 {
    MS_PER_DAY * epoch_day_number_for_year(i64::from(y))
}

pub(crate) fn epoch_ms_to_epoch_year(t: i64) -> i32 {
    // roughly calculate the largest possible year given the time t,
    // then check and refine the year.
    let day_count = epoch_ms_to_day_number(t);
    let mut year = (day_count / 365) as i32 + 1970;
    loop {
        if epoch_ms_for_year(year) <= t {
            break;
        }
        year -= 1;
    }

    year
}

/// Returns either 1 (true) or 0 (false)
pub(crate) fn mathematical_in_leap_year(t: i64) -> i32 {
    mathematical_days_in_year(epoch_ms_to_epoch_year(t)) - 365
}

/// Returns the 0-based month for the instant.
pub(crate) fn epoch_ms_to_month_in_year(t: i64) -> u8 {
    const DAYS: [i32; 11] = [30, 58, 89, 119, 150, 180, 211, 242, 272, 303, 333];
    const LEAP_DAYS: [i32; 11] = [30, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let in_leap_year = mathematical_in_leap_year(t) == 1;
    let day = epoch_ms_to_day_in_year(t);

    let result = if in_leap_year {
        LEAP_DAYS.binary_search(&day)
    } else {
        DAYS.binary_search(&day)
    };

    match result {
        Ok(i) | Err(i) => i as u8,
    }
}

/// Returns the day of the month for the instant.
pub(crate) fn epoch_ms_to_date(t: i64) -> u8 {
    const OFFSETS: [i16; 12] = [
        1, -30, -58, -89, -119, -150, -180, -211, -242, -272, -303, -333,
    ];
    let day_in_year = epoch_ms_to_day_in_year(t);
    let in_leap_year = mathematical_in_leap_year(t);
    let month = epoch_ms_to_month_in_year(t);

    // Cast from u8 to usize is safe as the month must be 0-11.
    let mut date = day_in_year + i32::from(OFFSETS[month as usize]);

    if month >= 2 {
        date -= in_leap_year;
    }

    // This return of date should be <= 31.
    date as u8
}

pub(crate) fn epoch_ms_to_day_in_year(t: i64) -> i32 {
    (epoch_ms_to_day_number(t) - epoch_day_number_for_year(i64::from(epoch_ms_to_epoch_year(t))))
        as i32
}

// ==== End Date Equations ====

// ==== Begin Calendar Equations ====

/// `ISODaysInMonth ( year, month )` with a 1-based month.
#[cfg(test)]
pub(crate) fn iso_days_in_month(year: i32, month: u8) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + (mathematical_days_in_year(year) - 365),
        _ => unreachable!("iso_days_in_month panicking is an implementation error."),
    }
}

/// Returns the day count preceding the given 1-based month in a year.
pub(crate) fn days_in_year_before_month(year: i32, month: u8) -> i64 {
    let leap_day = i64::from(mathematical_days_in_year(year)) - 365;

    match month {
        1 => 0,
        2 => 31,
        3 => 59 + leap_day,
        4 => 90 + leap_day,
        5 => 120 + leap_day,
        6 => 151 + leap_day,
        7 => 181 + leap_day,
        8 => 212 + leap_day,
        9 => 243 + leap_day,
        10 => 273 + leap_day,
        11 => 304 + leap_day,
        12 => 334 + leap_day,
        _ => unreachable!("days_in_year_before_month panicking is an implementation error."),
    }
}

// ==== End Calendar Equations ====

/// A Gregorian calendar date in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    /// 1-based month.
    pub month: u8,
    /// 1-based day of month.
    pub day: u8,
}

impl IsoDate {
    /// Returns the UTC calendar date containing the instant.
    #[must_use]
    pub fn from_epoch_ms(t: EpochMilliseconds) -> Self {
        let ms = t.as_i64();
        Self {
            year: epoch_ms_to_epoch_year(ms),
            month: epoch_ms_to_month_in_year(ms) + 1,
            day: epoch_ms_to_date(ms),
        }
    }

    /// Returns the instant at UTC midnight of this date.
    #[must_use]
    pub fn to_epoch_ms(self) -> EpochMilliseconds {
        let days = epoch_day_number_for_year(i64::from(self.year))
            + days_in_year_before_month(self.year, self.month)
            + i64::from(self.day)
            - 1;
        EpochMilliseconds::from(days * MS_PER_DAY)
    }

    /// Returns the calendar date one day later.
    #[must_use]
    pub fn next_day(self) -> Self {
        Self::from_epoch_ms(self.to_epoch_ms().add_days(1))
    }
}

/// A Gregorian calendar date with a UTC time of day, second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl IsoDateTime {
    /// Breaks an instant into UTC date and time-of-day components.
    ///
    /// Sub-second milliseconds are truncated; detection runs on a
    /// 15-minute grid so nothing real is lost.
    #[must_use]
    pub fn from_epoch_ms(t: EpochMilliseconds) -> Self {
        let ms_of_day = t.as_i64().rem_euclid(MS_PER_DAY);
        let seconds_of_day = ms_of_day / 1000;
        Self {
            date: IsoDate::from_epoch_ms(t),
            hour: (seconds_of_day / 3600) as u8,
            minute: (seconds_of_day % 3600 / 60) as u8,
            second: (seconds_of_day % 60) as u8,
        }
    }
}

// ==== iCalendar basic-format components ====

/// A date in the iCalendar basic `DATE` form: `YYYYMMDD`.
///
/// Date-only values never carry a time zone suffix.
#[derive(Debug, Clone, Copy)]
pub struct IcsDate(pub IsoDate);

impl Writeable for IcsDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_four_digit_year(self.0.year, sink)?;
        write_padded_u8(self.0.month, sink)?;
        write_padded_u8(self.0.day, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(8)
    }
}

/// A date-time in the iCalendar basic UTC form: `YYYYMMDDTHHMMSSZ`.
#[derive(Debug, Clone, Copy)]
pub struct IcsDateTimeUtc(pub IsoDateTime);

impl IcsDateTimeUtc {
    /// Builds the component directly from an instant.
    #[must_use]
    pub fn from_epoch_ms(t: EpochMilliseconds) -> Self {
        Self(IsoDateTime::from_epoch_ms(t))
    }
}

impl Writeable for IcsDateTimeUtc {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_four_digit_year(self.0.date.year, sink)?;
        write_padded_u8(self.0.date.month, sink)?;
        write_padded_u8(self.0.date.day, sink)?;
        sink.write_char('T')?;
        write_padded_u8(self.0.hour, sink)?;
        write_padded_u8(self.0.minute, sink)?;
        write_padded_u8(self.0.second, sink)?;
        sink.write_char('Z')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(16)
    }
}

impl_display_with_writeable!(IcsDate);
impl_display_with_writeable!(IcsDateTimeUtc);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

// iCalendar dates are fixed-width; feed validation rejects years
// outside 0..=9999 before anything reaches this point.
fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    debug_assert!((0..=9999).contains(&y));
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

// ==== Tests ====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ms_to_month() {
        let oct_2023 = 1_696_459_917_000;
        let mar_1_2020 = 1_583_020_800_000;
        let feb_29_2020 = 1_582_934_400_000;
        let mar_1_2021 = 1_614_556_800_000;

        assert_eq!(epoch_ms_to_month_in_year(oct_2023), 9);
        assert_eq!(epoch_ms_to_month_in_year(mar_1_2020), 2);
        assert_eq!(mathematical_in_leap_year(mar_1_2020), 1);
        assert_eq!(epoch_ms_to_month_in_year(feb_29_2020), 1);
        assert_eq!(mathematical_in_leap_year(feb_29_2020), 1);
        assert_eq!(epoch_ms_to_month_in_year(mar_1_2021), 2);
        assert_eq!(mathematical_in_leap_year(mar_1_2021), 0);
    }

    #[test]
    fn epoch_origin() {
        let date = IsoDate::from_epoch_ms(EpochMilliseconds::from(0));
        assert_eq!(
            date,
            IsoDate {
                year: 1970,
                month: 1,
                day: 1
            }
        );
        assert_eq!(date.to_epoch_ms().as_i64(), 0);
    }

    #[test]
    fn date_round_trips() {
        let dates = [
            IsoDate {
                year: 1999,
                month: 12,
                day: 31,
            },
            IsoDate {
                year: 2000,
                month: 1,
                day: 6,
            },
            IsoDate {
                year: 2020,
                month: 2,
                day: 29,
            },
            IsoDate {
                year: 2024,
                month: 12,
                day: 22,
            },
            IsoDate {
                year: 2025,
                month: 3,
                day: 21,
            },
        ];
        for date in dates {
            assert_eq!(IsoDate::from_epoch_ms(date.to_epoch_ms()), date);
        }
    }

    #[test]
    fn leap_day_neighbors() {
        let feb_29_2020 = IsoDate {
            year: 2020,
            month: 2,
            day: 29,
        };
        assert_eq!(
            feb_29_2020.next_day(),
            IsoDate {
                year: 2020,
                month: 3,
                day: 1
            }
        );
        assert_eq!(iso_days_in_month(2020, 2), 29);
        assert_eq!(iso_days_in_month(2021, 2), 28);
        assert_eq!(iso_days_in_month(1900, 2), 28);
        assert_eq!(iso_days_in_month(2000, 2), 29);
    }

    #[test]
    fn ics_component_forms() {
        // 2025-03-29T10:45:00Z
        let instant = EpochMilliseconds::from(1_743_245_100_000);
        let date_time = IcsDateTimeUtc::from_epoch_ms(instant);
        assert_eq!(date_time.write_to_string(), "20250329T104500Z");

        let date = IcsDate(IsoDate::from_epoch_ms(instant));
        assert_eq!(date.write_to_string(), "20250329");
    }
}
