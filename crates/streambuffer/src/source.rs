//! Byte sources feeding the lookahead buffer.
//!
//! A source only has to fill a destination slice and report how many bytes
//! it wrote; `Ok(0)` is end of stream. The scanner never opens or closes a
//! source. Hand it `&mut source` to keep ownership on the caller's side.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

#[cfg(feature = "gzip")]
use std::io::{BufReader, Chain, Cursor};

/// Capability consumed by [`BufferedScanner`](crate::BufferedScanner).
pub trait ByteSource {
    /// Copies up to `buf.len()` bytes into `buf`, returning the count written.
    ///
    /// Returning fewer bytes than requested is allowed; returning `Ok(0)`
    /// signals that the source is exhausted.
    ///
    /// # Errors
    ///
    /// Any I/O error raised by the underlying reader. The scanner treats an
    /// error as end of stream and keeps it for inspection.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).fill(buf)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).fill(buf)
    }
}

impl ByteSource for &[u8] {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// Reads until `buf` is full or the reader reports end of stream.
fn fill_from_reader<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

/// Uncompressed input read straight from a [`Read`] implementation.
///
/// ```rust,no_run
/// use streambuffer::{BufferedScanner, PlainSource};
///
/// let mut source = PlainSource::open("problem.cnf")?;
/// let mut scanner = BufferedScanner::new(&mut source);
/// scanner.skip_line();
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct PlainSource<R = File> {
    inner: R,
}

impl PlainSource<File> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Whatever [`File::open`] reports.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        File::open(path).map(Self::new)
    }
}

impl<R: Read> PlainSource<R> {
    /// Wraps an already opened reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Borrows the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for PlainSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        fill_from_reader(&mut self.inner, buf)
    }
}

#[cfg(feature = "gzip")]
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Gzip-compressed input, decompressed on the fly.
///
/// Concatenated gzip members are decoded back to back. Input that does not
/// start with the gzip magic bytes is passed through as is, so one code path
/// can open both `problem.cnf` and `problem.cnf.gz`.
#[cfg(feature = "gzip")]
#[derive(Debug)]
pub struct GzSource<R = File> {
    inner: GzInner<R>,
}

/// The sniffed header bytes put back in front of the rest of the input.
#[cfg(feature = "gzip")]
type Rewound<R> = BufReader<Chain<Cursor<Vec<u8>>, R>>;

#[cfg(feature = "gzip")]
#[derive(Debug)]
enum GzInner<R> {
    Compressed(flate2::bufread::MultiGzDecoder<Rewound<R>>),
    Transparent(Rewound<R>),
}

#[cfg(feature = "gzip")]
impl GzSource<File> {
    /// Opens the file at `path` and sniffs whether it is compressed.
    ///
    /// # Errors
    ///
    /// Whatever [`File::open`] or the first read of the file reports.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::new(File::open(path)?)
    }
}

#[cfg(feature = "gzip")]
impl<R: Read> GzSource<R> {
    /// Wraps an already opened reader, reading its first two bytes to decide
    /// between decompression and pass-through. Short reads are retried until
    /// both bytes are in or the input ends.
    ///
    /// # Errors
    ///
    /// Any error raised while reading the header bytes.
    pub fn new(mut inner: R) -> io::Result<Self> {
        let mut header = [0u8; GZIP_MAGIC.len()];
        let n = fill_from_reader(&mut inner, &mut header)?;
        let compressed = header[..n] == GZIP_MAGIC;
        let reader = BufReader::new(Cursor::new(header[..n].to_vec()).chain(inner));
        let inner = if compressed {
            GzInner::Compressed(flate2::bufread::MultiGzDecoder::new(reader))
        } else {
            GzInner::Transparent(reader)
        };
        Ok(Self { inner })
    }

    /// Whether the input is being decompressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self.inner, GzInner::Compressed(_))
    }
}

#[cfg(feature = "gzip")]
impl<R: Read> ByteSource for GzSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            GzInner::Compressed(decoder) => fill_from_reader(decoder, buf),
            GzInner::Transparent(reader) => fill_from_reader(reader, buf),
        }
    }
}
