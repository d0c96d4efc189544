//! Byte usage tracking
//!
//! Counts how often each byte value has appeared in the working buffer so the encoder can pick
//! values that never occur as substitute codes.

use crate::common::ALPHABET_SIZE;

/// Occurrence counter for all 256 byte values
///
/// Counts only ever grow. A byte that appeared in the input keeps a non-zero count even after
/// every occurrence has been substituted away, so it is never handed out as a code.
#[derive(Debug, Clone)]
pub struct UsageCounts {
    counts: [u32; ALPHABET_SIZE],
}

impl UsageCounts {
    /// Count every byte of `data`
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut counts = [0u32; ALPHABET_SIZE];
        for &byte in data {
            counts[byte as usize] = counts[byte as usize].saturating_add(1);
        }
        Self { counts }
    }

    /// Record one more occurrence of `byte`
    pub fn record(&mut self, byte: u8) {
        self.counts[byte as usize] = self.counts[byte as usize].saturating_add(1);
    }

    /// Occurrences recorded for `byte`
    pub fn count(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// Smallest byte value with no recorded occurrence
    pub fn first_unused(&self) -> Option<u8> {
        self.counts
            .iter()
            .position(|&count| count == 0)
            .map(|index| index as u8)
    }

    /// Number of byte values never seen
    pub fn unused_count(&self) -> usize {
        self.counts.iter().filter(|&&count| count == 0).count()
    }
}
