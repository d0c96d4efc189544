//! Common types and constants for the byte-pair codec
//!
//! This module defines the value types shared by the encoder, the decoder and the
//! table serialization code.

use thiserror::Error;

/// Inputs shorter than this are returned unchanged by the encoder
pub const MIN_INPUT_LEN: usize = 4;

/// Number of distinct byte values, and so the number of candidate substitute codes
pub const ALPHABET_SIZE: usize = 0x100;

/// Size of one serialized table record: code byte + big-endian packed bigram
pub const TABLE_RECORD_SIZE: usize = 3;

/// An ordered pair of adjacent bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram {
    /// Byte that comes first in the original data
    pub first: u8,
    /// Byte that follows it
    pub second: u8,
}

impl Bigram {
    /// Create a bigram from its two bytes
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Pack into a `u16`, first byte in the high 8 bits
    pub const fn pack(self) -> u16 {
        ((self.first as u16) << 8) | self.second as u16
    }

    /// Inverse of [`Bigram::pack`]
    pub const fn from_packed(packed: u16) -> Self {
        Self {
            first: (packed >> 8) as u8,
            second: (packed & 0xFF) as u8,
        }
    }
}

/// One substitution performed by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableEntry {
    /// Byte value that was unused in the data and now stands for `bigram`
    pub code: u8,
    /// The pair of bytes `code` replaced
    pub bigram: Bigram,
}

/// Error type for byte-pair table handling
#[derive(Debug, Error)]
pub enum BytePairError {
    /// Serialized table length is not a whole number of records
    #[error("Truncated substitution table: {0} bytes is not a multiple of 3")]
    TruncatedTable(usize),

    /// Two table records use the same substitute code
    #[error("Duplicate substitute code in table: 0x{0:02X}")]
    DuplicateCode(u8),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for byte-pair operations
pub type Result<T> = std::result::Result<T, BytePairError>;

/// Why the encoder stopped iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    /// Input was shorter than [`MIN_INPUT_LEN`]
    #[default]
    TooShort,
    /// No bigram occurs more than once
    FixedPoint,
    /// Every byte value is already in use
    CodesExhausted,
}

/// Statistics for one encode call
#[derive(Debug, Default, Clone)]
pub struct EncodeStats {
    /// Bytes consumed
    pub input_len: usize,
    /// Bytes produced
    pub output_len: usize,
    /// Substitution rounds, equal to the table length
    pub rounds: usize,
    /// Individual pair substitutions across all rounds
    pub substitutions: usize,
    /// What ended the encode loop; only meaningful once the encoder has finished
    pub stop_reason: StopReason,
}

impl EncodeStats {
    /// Output size over input size; 1.0 for empty input
    pub fn compression_ratio(&self) -> f64 {
        if self.input_len == 0 {
            1.0
        } else {
            self.output_len as f64 / self.input_len as f64
        }
    }
}
