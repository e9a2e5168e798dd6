//! Scanning primitives for whitespace-separated numeric records.

use memchr::memchr2;

use super::BufferedScanner;
use crate::{error::ScanError, source::ByteSource};

/// Returned by [`BufferedScanner::parse_signed_int`] in place of a number
/// when end-of-line sentinels are allowed and the line ends.
///
/// A literal `2147483647` in the input reads back as the same value.
pub const END_OF_LINE_SENTINEL: i32 = i32::MAX;

impl<S: ByteSource> BufferedScanner<S> {
    /// Skips spaces, tabs and carriage returns. Newlines are left in place.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r') = self.peek() {
            self.advance();
        }
    }

    /// Skips past the next newline.
    ///
    /// Returns `false` if end of input or a NUL byte comes first, in which
    /// case the cursor is left on it.
    pub fn skip_line(&mut self) -> bool {
        loop {
            let window = self.buffered();
            if window.is_empty() {
                return false;
            }
            match memchr2(b'\n', b'\0', window) {
                Some(at) => {
                    let newline = window[at] == b'\n';
                    self.bump(at);
                    if newline {
                        self.advance();
                    }
                    return newline;
                }
                None => {
                    let n = window.len();
                    self.bump(n);
                }
            }
        }
    }

    /// Consumes a line terminator: any run of `\r` followed by `\n`, end of
    /// input or a NUL byte. The NUL is not consumed.
    ///
    /// `line` is the zero-based index of the line being terminated.
    ///
    /// # Errors
    ///
    /// [`ScanError::MalformedLineEnding`] if any other byte is found. The
    /// cursor stays on that byte.
    pub fn skip_end_of_line(&mut self, line: usize) -> Result<(), ScanError> {
        loop {
            match self.peek() {
                None | Some(b'\0') => return Ok(()),
                Some(b'\n') => {
                    self.advance();
                    return Ok(());
                }
                Some(b'\r') => self.advance(),
                Some(byte) => {
                    return Err(ScanError::MalformedLineEnding {
                        line: line.saturating_add(1),
                        byte,
                    });
                }
            }
        }
    }

    /// Parses an optionally signed decimal `i32` after skipping whitespace.
    ///
    /// With `allow_end_of_line` set, reaching a newline where the digits
    /// should start yields [`END_OF_LINE_SENTINEL`]. The newline itself is
    /// not consumed.
    ///
    /// `line` is the zero-based index of the line being scanned.
    ///
    /// # Errors
    ///
    /// - [`ScanError::MissingDigit`] if no digit follows the optional sign.
    /// - [`ScanError::IntegerOverflow`] if the magnitude does not fit in an
    ///   `i32`. The cursor stays on the digit that overflowed.
    pub fn parse_signed_int(
        &mut self,
        line: usize,
        allow_end_of_line: bool,
    ) -> Result<i32, ScanError> {
        self.skip_whitespace();
        let negative = match self.peek() {
            Some(b'-') => {
                self.advance();
                true
            }
            Some(b'+') => {
                self.advance();
                false
            }
            _ => false,
        };

        if allow_end_of_line && self.peek() == Some(b'\n') {
            return Ok(END_OF_LINE_SENTINEL);
        }

        let mut value = match self.peek() {
            Some(digit @ b'0'..=b'9') => i32::from(digit - b'0'),
            found => {
                return Err(ScanError::MissingDigit {
                    line: line.saturating_add(1),
                    found,
                });
            }
        };
        self.advance();

        while let Some(digit @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(digit - b'0')))
                .ok_or(ScanError::IntegerOverflow {
                    line: line.saturating_add(1),
                    byte: digit,
                })?;
            self.advance();
        }

        Ok(if negative { -value } else { value })
    }

    /// Collects the next token into `out`.
    ///
    /// `out` is cleared, leading whitespace is skipped, then bytes are
    /// appended up to (not including) the next space, newline or end of
    /// input. Tabs and carriage returns inside a token are kept.
    pub fn parse_token(&mut self, out: &mut Vec<u8>) {
        out.clear();
        self.skip_whitespace();
        loop {
            let window = self.buffered();
            if window.is_empty() {
                return;
            }
            let end = memchr2(b' ', b'\n', window).unwrap_or(window.len());
            out.extend_from_slice(&window[..end]);
            let delimited = end < window.len();
            self.bump(end);
            if delimited {
                return;
            }
        }
    }
}
