//! Buffered byte scanning for line-oriented numeric record formats.
//!
//! A [`BufferedScanner`] pulls large chunks from a [`ByteSource`] into a fixed
//! lookahead buffer and exposes a one-byte cursor over them. The scanning
//! primitives on top (whitespace, line endings, signed integers and
//! whitespace-delimited tokens) are what a DIMACS-style reader needs:
//!
//! ```rust
//! use streambuffer::{BufferedScanner, END_OF_LINE_SENTINEL};
//!
//! let mut scanner = BufferedScanner::new(&b"p cnf 3 2\n1 -3 0\n"[..]);
//! let mut word = Vec::new();
//! scanner.parse_token(&mut word);
//! assert_eq!(word, b"p");
//! scanner.skip_line();
//!
//! let mut clause = Vec::new();
//! loop {
//!     let lit = scanner.parse_signed_int(1, true).unwrap();
//!     if lit == 0 || lit == END_OF_LINE_SENTINEL {
//!         break;
//!     }
//!     clause.push(lit);
//! }
//! assert_eq!(clause, [1, -3]);
//! scanner.skip_end_of_line(1).unwrap();
//! assert!(scanner.is_eof());
//! ```

mod error;
mod options;
mod scanner;
mod source;


pub use error::{ScanError, ScanErrorKind};
pub use options::{DEFAULT_CAPACITY, ScannerOptions};
pub use scanner::{BufferedScanner, END_OF_LINE_SENTINEL};
#[cfg(feature = "gzip")]
pub use source::GzSource;
pub use source::{ByteSource, PlainSource};
