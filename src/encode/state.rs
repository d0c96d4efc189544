//! Encoder state management
//!
//! Holds the working buffer, usage counts and the table being built for a single encode call.

use super::usage::UsageCounts;
use crate::common::{Bigram, EncodeStats, StopReason, MIN_INPUT_LEN};
use crate::table::SubstitutionTable;

/// One position of the working buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A byte still present in the data
    Live(u8),
    /// Absorbed into the following live slot by a substitution; dropped on output
    Tombstone,
}

impl Slot {
    /// The byte held by a live slot
    pub fn byte(self) -> Option<u8> {
        match self {
            Slot::Live(byte) => Some(byte),
            Slot::Tombstone => None,
        }
    }
}

/// Encoder state for one input buffer
#[derive(Debug)]
pub struct Encoder {
    /// Working buffer, one slot per input byte
    pub(crate) slots: Vec<Slot>,
    /// Byte values seen so far
    pub(crate) usage: UsageCounts,
    /// Substitutions made so far
    pub(crate) table: SubstitutionTable,
    /// Number of live slots
    pub(crate) live: usize,
    /// Last bigram counted by the pair scan; carried from one round into the next
    pub(crate) previous: Option<Bigram>,
    pub(crate) stats: EncodeStats,
    pub(crate) done: bool,
}

impl Encoder {
    /// Create encoder state for `input`
    ///
    /// Inputs shorter than [`MIN_INPUT_LEN`] produce an encoder that is already finished.
    pub fn new(input: &[u8]) -> Self {
        let too_short = input.len() < MIN_INPUT_LEN;
        Self {
            slots: input.iter().map(|&byte| Slot::Live(byte)).collect(),
            usage: UsageCounts::from_bytes(input),
            table: SubstitutionTable::new(),
            live: input.len(),
            previous: None,
            stats: EncodeStats {
                input_len: input.len(),
                output_len: input.len(),
                ..Default::default()
            },
            done: too_short,
        }
    }

    /// True once no further round can be made
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Current length of the encoded data
    pub fn len(&self) -> usize {
        self.live
    }

    /// True if the working buffer holds no live bytes
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Table built so far
    pub fn table(&self) -> &SubstitutionTable {
        &self.table
    }

    /// Statistics for the rounds run so far
    pub fn stats(&self) -> EncodeStats {
        self.stats.clone()
    }

    pub(crate) fn stop(&mut self, reason: StopReason) {
        self.done = true;
        self.stats.stop_reason = reason;
    }

    /// Iterate over the live bytes in order
    pub fn live_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.slots.iter().filter_map(|slot| slot.byte())
    }

    /// Compact the working buffer, dropping tombstones
    pub fn finish(self) -> (Vec<u8>, SubstitutionTable) {
        let mut output = Vec::with_capacity(self.live);
        output.extend(self.live_bytes());
        (output, self.table)
    }
}
