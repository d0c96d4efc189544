//! Error handling for byte-pair operations
//!
//! Encoding and decoding are total; errors only arise when a substitution table is
//! read back from bytes or from an I/O source.

pub use crate::common::BytePairError;
pub use crate::common::Result;
