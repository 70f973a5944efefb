//! The error type for `lunical` operations.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of error raised.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A general error not covered by a more specific kind.
    #[default]
    Generic,
    /// An input value was outside its valid range, including empty or
    /// inverted time windows and events that would corrupt the feed's
    /// date-only vs date-time contract.
    Range,
    /// An internal invariant failed to hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => f.write_str("error"),
            Self::Range => f.write_str("range error"),
            Self::Assert => f.write_str("assertion failed"),
        }
    }
}

/// The error type of `lunical`.
///
/// Built in a builder style: pick a kind with one of the constructors,
/// then attach context with [`LunarError::with_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl LunarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a general error with the provided message.
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for LunarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LunarError {}
