//! Table-driven CRC32 (IEEE) computation.
//!
//! Implements the reflected IEEE 802.3 variant used by zlib, gzip, and PNG:
//! polynomial `0xEDB88320`, initial value all-ones, final XOR all-ones. A
//! 256-entry lookup table replaces the 8-iterations-per-byte bit loop with a
//! single lookup per input byte.

use once_cell::sync::Lazy;

/// Reflected form of the IEEE 802.3 polynomial 0x04C11DB7.
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Initial accumulator state (also the final XOR mask).
pub(crate) const INIT: u32 = 0xFFFF_FFFF;

/// Shared lookup table, one entry per byte value.
///
/// Built at most once per process and never mutated afterwards, so it can be
/// read concurrently from any number of streams and threads.
static CRC_TABLE: Lazy<[u32; 256]> = Lazy::new(build_table);

/// Reflect each byte value through 8 rounds of polynomial division.
fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    for (n, entry) in table.iter_mut().enumerate() {
        let mut c = n as u32;
        for _ in 0..8 {
            c = if c & 1 == 1 {
                POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
        }
        *entry = c;
    }
    table
}

/// Fold `data` into a running accumulator, one table lookup per byte.
///
/// The accumulator stays in its complemented internal form; callers XOR with
/// [`INIT`] to obtain the publishable checksum.
#[inline]
pub(crate) fn update(mut acc: u32, data: &[u8]) -> u32 {
    let table = &*CRC_TABLE;
    for &byte in data {
        acc = (acc >> 8) ^ table[((acc ^ byte as u32) & 0xFF) as usize];
    }
    acc
}

/// Compute the CRC32 of a byte sequence, rendered as an 8-digit lowercase
/// zero-padded hex string.
///
/// String inputs contribute their UTF-8 bytes; byte slices pass through
/// untouched, so `crc32("deno")` and `crc32("deno".as_bytes())` agree.
///
/// # Examples
///
/// ```
/// use longan_crc::crc32;
///
/// assert_eq!(crc32("deno"), "fd6f8c63");
/// assert_eq!(crc32(""), "00000000");
/// ```
#[inline]
pub fn crc32(data: impl AsRef<[u8]>) -> String {
    crate::hex::u32_to_hex(crc32_raw(data))
}

/// Compute the CRC32 of a byte sequence as a `u32`.
///
/// Numeric form of [`crc32`], for callers embedding the checksum in binary
/// structures instead of text.
///
/// # Examples
///
/// ```
/// use longan_crc::crc32_raw;
///
/// assert_eq!(crc32_raw(b"deno"), 0xfd6f8c63);
/// ```
#[inline]
pub fn crc32_raw(data: impl AsRef<[u8]>) -> u32 {
    update(INIT, data.as_ref()) ^ INIT
}
