use core::fmt;

use bstr::ByteSlice;
use thiserror::Error;

/// A scanning failure, carrying the line and byte that triggered it.
///
/// The `Display` rendering keeps the historical `PARSE ERROR!` layout so that
/// existing log scrapers keep matching. Structured callers should use
/// [`kind`](Self::kind), [`line`](Self::line) and [`byte`](Self::byte)
/// instead of parsing the message.
///
/// `line` is always 1-based; scanning primitives take the zero-based index of
/// the line being scanned and convert it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanError {
    /// Something other than `\r`, `\n`, NUL or end of input where a line
    /// terminator was expected.
    #[error(
        "PARSE ERROR! Unexpected char (hex: {byte:#04x}) At line {line} we expected an end of line character (\\n or \\r + \\n)"
    )]
    MalformedLineEnding {
        /// 1-based line number.
        line: usize,
        /// The offending byte, left unconsumed.
        byte: u8,
    },
    /// An integer was expected but no decimal digit was found.
    #[error("PARSE ERROR! Unexpected char (dec: '{}) At line {line} we expected a number", Found(.found))]
    MissingDigit {
        /// 1-based line number.
        line: usize,
        /// The offending byte, or `None` at end of input.
        found: Option<u8>,
    },
    /// The digits read so far no longer fit in an `i32`.
    #[error("PARSE ERROR! At line {line} the variable number is to high")]
    IntegerOverflow {
        /// 1-based line number.
        line: usize,
        /// The digit that pushed the value out of range, left unconsumed.
        byte: u8,
    },
}

/// Field-less discriminant of [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanErrorKind {
    /// See [`ScanError::MalformedLineEnding`].
    MalformedLineEnding,
    /// See [`ScanError::MissingDigit`].
    MissingDigit,
    /// See [`ScanError::IntegerOverflow`].
    IntegerOverflow,
}

impl ScanError {
    /// The category of this failure.
    #[must_use]
    pub fn kind(&self) -> ScanErrorKind {
        match self {
            Self::MalformedLineEnding { .. } => ScanErrorKind::MalformedLineEnding,
            Self::MissingDigit { .. } => ScanErrorKind::MissingDigit,
            Self::IntegerOverflow { .. } => ScanErrorKind::IntegerOverflow,
        }
    }

    /// The 1-based line the failure was detected on.
    #[must_use]
    pub fn line(&self) -> usize {
        match *self {
            Self::MalformedLineEnding { line, .. }
            | Self::MissingDigit { line, .. }
            | Self::IntegerOverflow { line, .. } => line,
        }
    }

    /// The byte under the cursor when the failure was detected, if any.
    #[must_use]
    pub fn byte(&self) -> Option<u8> {
        match *self {
            Self::MalformedLineEnding { byte, .. } | Self::IntegerOverflow { byte, .. } => {
                Some(byte)
            }
            Self::MissingDigit { found, .. } => found,
        }
    }
}

/// Renders the byte found instead of a digit. ASCII is written as is, other
/// bytes as a `\xNN` escape.
struct Found<'a>(&'a Option<u8>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(byte) if byte.is_ascii() => fmt::Display::fmt([byte].as_bstr(), f),
            Some(byte) => fmt::Display::fmt(&[byte].escape_bytes(), f),
            None => f.write_str("EOF"),
        }
    }
}
