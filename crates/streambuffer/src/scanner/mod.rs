//! Lookahead buffer and byte cursor.
//!
//! The scanner owns a fixed-capacity buffer and walks it forward one byte at
//! a time. Whenever the cursor reaches the end of the valid region the buffer
//! is refilled in one call to the source, so callers only ever see a single
//! unbroken byte stream.
//!
//! Invariants
//! - `0 <= pos <= size <= buf.len()`.
//! - `pos == size` only at end of stream: a refill is issued as soon as the
//!   cursor steps onto `size`, and a fill of zero bytes latches `exhausted`.
//! - Once `exhausted` is set the source is never read again.

mod text;


use std::io;

use tracing::{debug, trace, warn};

use crate::{options::ScannerOptions, source::ByteSource};

pub use text::END_OF_LINE_SENTINEL;

/// A forward-only byte cursor over a [`ByteSource`], with text scanning
/// primitives for line-oriented numeric formats.
///
/// The scanner performs its first read during construction. Dropping it drops
/// `S`; pass `&mut source` to keep the source alive and open.
#[derive(Debug)]
pub struct BufferedScanner<S> {
    source: S,
    buf: Box<[u8]>,
    pos: usize,
    size: usize,
    /// Bytes consumed before the current buffer contents.
    offset: u64,
    exhausted: bool,
    io_error: Option<io::Error>,
}

impl<S: ByteSource> BufferedScanner<S> {
    /// Creates a scanner with the default one MiB buffer.
    pub fn new(source: S) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Creates a scanner configured by `options`.
    pub fn with_options(source: S, options: ScannerOptions) -> Self {
        let mut scanner = Self {
            source,
            buf: vec![0; options.effective_capacity()].into_boxed_slice(),
            pos: 0,
            size: 0,
            offset: 0,
            exhausted: false,
            io_error: None,
        };
        scanner.refill();
        scanner
    }

    /// The byte under the cursor, or `None` at end of stream.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        if self.pos < self.size {
            Some(self.buf[self.pos])
        } else {
            None
        }
    }

    /// Moves the cursor past the current byte, refilling the buffer when it
    /// runs dry. Does nothing at end of stream.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.size {
            self.bump(1);
        }
    }

    /// Whether the stream is exhausted.
    #[inline]
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.size
    }

    /// Absolute offset of the byte under the cursor.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.offset + self.pos as u64
    }

    /// Number of bytes requested from the source per refill.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The I/O error that ended the stream early, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        self.io_error.as_ref()
    }

    /// Removes and returns the I/O error that ended the stream early.
    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    /// Borrows the source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrows the source. Reading from it directly skips bytes the
    /// scanner has not buffered yet.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the source, discarding any buffered bytes.
    pub fn into_source(self) -> S {
        self.source
    }

    /// The unread part of the buffer. Empty only at end of stream.
    #[inline]
    fn buffered(&self) -> &[u8] {
        &self.buf[self.pos..self.size]
    }

    /// Consumes `n` buffered bytes, refilling when the buffer runs dry.
    #[inline]
    fn bump(&mut self, n: usize) {
        debug_assert!(n <= self.size - self.pos);
        self.pos += n;
        if self.pos == self.size {
            self.refill();
        }
    }

    fn refill(&mut self) {
        if self.exhausted {
            return;
        }
        self.offset += self.size as u64;
        self.pos = 0;
        self.size = loop {
            match self.source.fill(&mut self.buf) {
                Ok(n) => break n.min(self.buf.len()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    warn!(offset = self.offset, error = %err, "byte source failed, treating as end of stream");
                    self.io_error = Some(err);
                    break 0;
                }
            }
        };
        if self.size == 0 {
            self.exhausted = true;
            debug!(offset = self.offset, "byte source exhausted");
        } else {
            trace!(offset = self.offset, filled = self.size, "refilled lookahead buffer");
        }
    }
}
