//! Incremental CRC32 computation over caller-delivered chunks.

use crate::crc::{update, INIT};
use crate::hex::u32_to_hex;

/// Streaming CRC32 state for data that arrives in chunks.
///
/// Chunking is transparent to the result: appending `c1, c2, ..., cn` in
/// order produces the same checksum as a one-shot [`crc32`](crate::crc32)
/// over their concatenation, and every intermediate [`append`] return value
/// equals the one-shot checksum of the bytes seen so far.
///
/// The stream is a plain mutable value with no internal synchronization;
/// share it across threads behind external locking or give each thread its
/// own instance. The lookup table is shared read-only process-wide.
///
/// # Examples
///
/// ```
/// use longan_crc::Crc32Stream;
///
/// let mut stream = Crc32Stream::new();
/// stream.append("de");
/// assert_eq!(stream.append("no"), "fd6f8c63");
/// assert_eq!(stream.checksum(), "fd6f8c63");
/// ```
///
/// [`append`]: Crc32Stream::append
#[derive(Debug, Clone)]
pub struct Crc32Stream {
    acc: u32,
    checksum: String,
}

impl Crc32Stream {
    /// Create a stream with no data processed yet.
    ///
    /// The checksum accessor returns the empty string until the first
    /// [`append`](Crc32Stream::append).
    pub fn new() -> Self {
        Self {
            acc: INIT,
            checksum: String::new(),
        }
    }

    /// Fold a chunk into the running state and return the refreshed checksum.
    ///
    /// String chunks contribute their UTF-8 bytes, exactly as the one-shot
    /// function. Bytes are processed strictly in call order across all
    /// `append` invocations since construction or the last
    /// [`reset`](Crc32Stream::reset).
    pub fn append(&mut self, data: impl AsRef<[u8]>) -> &str {
        self.acc = update(self.acc, data.as_ref());
        self.checksum = u32_to_hex(self.acc ^ INIT);
        &self.checksum
    }

    /// Reinitialize the stream to its freshly constructed state.
    ///
    /// The accumulator returns to all-ones and the cached checksum to the
    /// empty string; subsequent appends behave exactly as on a new instance.
    pub fn reset(&mut self) {
        self.acc = INIT;
        self.checksum.clear();
    }

    /// The most recent checksum computed by [`append`](Crc32Stream::append),
    /// or the empty string if no data has been appended since construction
    /// or the last reset.
    ///
    /// Reading has no side effect; repeated reads return the same value
    /// until the next mutating call.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// The finalized checksum of the bytes seen so far, as a `u32`.
    ///
    /// Unlike [`checksum`](Crc32Stream::checksum) this is defined before the
    /// first append as well: with no bytes processed it is `0`, the CRC32 of
    /// the empty sequence.
    pub fn value(&self) -> u32 {
        self.acc ^ INIT
    }
}

impl Default for Crc32Stream {
    fn default() -> Self {
        Self::new()
    }
}
