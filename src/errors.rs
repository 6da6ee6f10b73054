//! Error types for hexadecimal input validation.
//!
//! Checksum computation itself is total and never fails; the only fallible
//! operation in this crate is parsing caller-supplied hex text.

use thiserror::Error;

/// Main error type for longan-crc operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex input must contain a whole number of two-character byte pairs
    #[error("invalid hex input: length {len} is not a positive multiple of 2")]
    InvalidHexLength { len: usize },

    /// Hex input contained a character outside `[0-9a-fA-F]`
    #[error("invalid hex digit '{ch}' at position {index}")]
    InvalidHexDigit { ch: char, index: usize },
}

/// Result type for longan-crc operations.
pub type Result<T> = std::result::Result<T, Error>;
