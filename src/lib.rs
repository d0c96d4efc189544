//! bytepair - lossless byte-pair substitution codec
//!
//! This crate implements byte-pair encoding over raw bytes. The encoder repeatedly finds the
//! most frequent pair of adjacent bytes, assigns it a byte value that does not occur in the data,
//! and replaces every occurrence. The result is a shorter (or equal-length) buffer plus a
//! substitution table; the decoder replays that table in reverse to restore the input exactly.
//!
//! # Features
//!
//! - Total, deterministic encoder: never fails, never grows the input
//! - Up to 256 substitution rounds, limited by the byte values absent from the input
//! - Compact table serialization (3 bytes per entry, no header)
//! - Per-call statistics via [`encode_with_stats`]
//!
//! # Example
//!
//! ```
//! use bytepair::{decode, encode};
//!
//! let data = b"aaabdaaabac";
//! let (encoded, table) = encode(data);
//! assert!(encoded.len() <= data.len());
//!
//! let decoded = decode(&encoded, &table);
//! assert_eq!(&decoded[..], &data[..]);
//! ```
//!
//! # Example - Storing the table
//!
//! ```
//! use bytepair::{decode, encode, SubstitutionTable};
//!
//! let (encoded, table) = encode(b"the cat sat on the mat");
//! let stored = table.to_bytes();
//!
//! let restored = SubstitutionTable::from_bytes(&stored)?;
//! assert_eq!(decode(&encoded, &restored), b"the cat sat on the mat");
//! # Ok::<(), bytepair::BytePairError>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod decode;
pub mod encode;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use common::{
    Bigram, BytePairError, EncodeStats, Result, StopReason, TableEntry, ALPHABET_SIZE,
    MIN_INPUT_LEN, TABLE_RECORD_SIZE,
};
pub use decode::decode;
pub use encode::{encode, encode_with_stats, Encoder};
pub use table::SubstitutionTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let (encoded, table) = encode(b"abababab");
        assert_eq!(decode(&encoded, &table), b"abababab");

        let _ = Bigram::new(0, 1);
        let _ = StopReason::FixedPoint;
    }
}
