//! Streaming CRC32 (IEEE) checksums with hexadecimal conversion helpers.
//!
//! This crate implements the reflected IEEE 802.3 CRC32 variant used by
//! zlib, gzip, and PNG (polynomial `0xEDB88320`, initial value all-ones,
//! final XOR all-ones) in two modes: one-shot computation over a complete
//! buffer, and incremental computation over chunks delivered across repeated
//! calls. Hex encoding/decoding helpers round out the textual interface.
//!
//! # Quick Start
//!
//! ```rust
//! use longan_crc::{crc32, Crc32Stream};
//!
//! // One-shot
//! assert_eq!(crc32("deno"), "fd6f8c63");
//!
//! // Incremental - chunking is transparent to the result
//! let mut stream = Crc32Stream::new();
//! stream.append("de");
//! assert_eq!(stream.append("no"), "fd6f8c63");
//! ```
#![forbid(unsafe_code)]

mod crc;
mod errors;
mod hex;
mod stream;

pub use crc::{crc32, crc32_raw};
pub use errors::{Error, Result};
pub use hex::{bytes_to_hex, hex_to_bytes, u32_to_hex};
pub use stream::Crc32Stream;
