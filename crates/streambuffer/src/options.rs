/// Capacity of the lookahead buffer when none is configured: one MiB.
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// Configuration options for a [`BufferedScanner`](crate::BufferedScanner).
///
/// # Examples
///
/// ```rust
/// use streambuffer::{BufferedScanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     capacity: 64 * 1024,
/// };
/// let scanner = BufferedScanner::with_options(&b"1 2 0\n"[..], options);
/// assert_eq!(scanner.capacity(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScannerOptions {
    /// Number of bytes requested from the source on every refill.
    ///
    /// Larger buffers amortize the cost of each read call (a system call, or
    /// a round of decompression). The record format does not depend on it.
    /// A capacity of zero is treated as one.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`]
    pub capacity: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl ScannerOptions {
    pub(crate) fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}
