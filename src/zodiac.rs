//! Tropical zodiac sign lookup by calendar date.
//!
//! Lunation events carry a best-effort sign derived from the UTC
//! calendar date of the event. The lookup is a single ordered table of
//! month/day spans; the Capricorn span wraps December into January.

use crate::iso::IsoDate;
use core::fmt;
use tinystr::{tinystr, TinyAsciiStr};

/// A classical element associated with a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// A sign's modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

/// The twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// One sign's span of calendar dates, `(month, day)` inclusive bounds.
struct SignSpan {
    sign: Sign,
    start: (u8, u8),
    end: (u8, u8),
}

// Ordered by span start within the civil year; the Capricorn span
// wraps December into January.
const SIGN_TABLE: [SignSpan; 12] = [
    SignSpan {
        sign: Sign::Aries,
        start: (3, 21),
        end: (4, 19),
    },
    SignSpan {
        sign: Sign::Taurus,
        start: (4, 20),
        end: (5, 20),
    },
    SignSpan {
        sign: Sign::Gemini,
        start: (5, 21),
        end: (6, 20),
    },
    SignSpan {
        sign: Sign::Cancer,
        start: (6, 21),
        end: (7, 22),
    },
    SignSpan {
        sign: Sign::Leo,
        start: (7, 23),
        end: (8, 22),
    },
    SignSpan {
        sign: Sign::Virgo,
        start: (8, 23),
        end: (9, 22),
    },
    SignSpan {
        sign: Sign::Libra,
        start: (9, 23),
        end: (10, 22),
    },
    SignSpan {
        sign: Sign::Scorpio,
        start: (10, 23),
        end: (11, 21),
    },
    SignSpan {
        sign: Sign::Sagittarius,
        start: (11, 22),
        end: (12, 21),
    },
    SignSpan {
        sign: Sign::Capricorn,
        start: (12, 22),
        end: (1, 19),
    },
    SignSpan {
        sign: Sign::Aquarius,
        start: (1, 20),
        end: (2, 18),
    },
    SignSpan {
        sign: Sign::Pisces,
        start: (2, 19),
        end: (3, 20),
    },
];

impl Sign {
    /// Looks up the sign containing a calendar date.
    ///
    /// Total over all valid dates. Every span covers the tail of its
    /// start month and the head of its end month, so the two-clause
    /// check below also handles the December to January wrap.
    #[must_use]
    pub fn for_date(date: IsoDate) -> Self {
        for span in &SIGN_TABLE {
            let (start_month, start_day) = span.start;
            let (end_month, end_day) = span.end;
            if (date.month == start_month && date.day >= start_day)
                || (date.month == end_month && date.day <= end_day)
            {
                return span.sign;
            }
        }
        // Unreachable for any valid month/day; a deterministic result
        // is still required for malformed input.
        Self::Pisces
    }

    /// Returns the sign's display name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Returns the sign's name as a fixed-size ASCII label.
    #[must_use]
    pub fn label(&self) -> TinyAsciiStr<16> {
        match self {
            Self::Aries => tinystr!(16, "Aries"),
            Self::Taurus => tinystr!(16, "Taurus"),
            Self::Gemini => tinystr!(16, "Gemini"),
            Self::Cancer => tinystr!(16, "Cancer"),
            Self::Leo => tinystr!(16, "Leo"),
            Self::Virgo => tinystr!(16, "Virgo"),
            Self::Libra => tinystr!(16, "Libra"),
            Self::Scorpio => tinystr!(16, "Scorpio"),
            Self::Sagittarius => tinystr!(16, "Sagittarius"),
            Self::Capricorn => tinystr!(16, "Capricorn"),
            Self::Aquarius => tinystr!(16, "Aquarius"),
            Self::Pisces => tinystr!(16, "Pisces"),
        }
    }

    /// Returns the sign's astrological glyph.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    /// Returns the sign's element.
    #[must_use]
    pub fn element(&self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Returns the sign's modality.
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Modality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Modality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Modality::Mutable,
        }
    }

    /// Returns the sign's traditional ruling body.
    #[must_use]
    pub fn ruler(&self) -> &'static str {
        match self {
            Self::Aries | Self::Scorpio => "Mars",
            Self::Taurus | Self::Libra => "Venus",
            Self::Gemini | Self::Virgo => "Mercury",
            Self::Cancer => "Moon",
            Self::Leo => "Sun",
            Self::Sagittarius | Self::Pisces => "Jupiter",
            Self::Capricorn | Self::Aquarius => "Saturn",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
