//! Byte-pair encoder
//!
//! Repeatedly replaces the most frequent pair of adjacent bytes with a byte value that does not
//! occur in the data, recording each replacement in a [`SubstitutionTable`]. Encoding stops when
//! no pair repeats or when every byte value is in use.

mod pairs;
mod state;
mod usage;

pub use state::{Encoder, Slot};
pub use usage::UsageCounts;

use crate::common::{EncodeStats, StopReason, TableEntry};
use crate::table::SubstitutionTable;

impl Encoder {
    /// Run one substitution round
    ///
    /// Returns the new table entry, or `None` once the encoder is finished.
    pub fn step(&mut self) -> Option<TableEntry> {
        if self.done {
            return None;
        }

        let Some((bigram, tally)) = self.most_frequent_pair() else {
            log::debug!(
                "No repeated pairs left after {} rounds ({} -> {} bytes)",
                self.table.len(),
                self.stats.input_len,
                self.live
            );
            self.stop(StopReason::FixedPoint);
            return None;
        };

        let Some(code) = self.usage.first_unused() else {
            log::debug!(
                "All byte values in use after {} rounds; leaving {:02x}{:02x} (x{}) unencoded",
                self.table.len(),
                bigram.first,
                bigram.second,
                tally
            );
            self.stop(StopReason::CodesExhausted);
            return None;
        };

        let entry = TableEntry { code, bigram };
        self.table.push(entry);

        let replaced = self.substitute(bigram, code);
        self.stats.rounds += 1;
        self.stats.substitutions += replaced;
        self.stats.output_len = self.live;

        log::debug!(
            "Round {}: {:02x}{:02x} -> {:02x} (counted {}, replaced {}, {} bytes left)",
            self.stats.rounds,
            bigram.first,
            bigram.second,
            code,
            tally,
            replaced,
            self.live
        );

        Some(entry)
    }

    /// Run rounds until the encoder is finished
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }
}

/// Encode `input`, returning the shortened data and the table needed to restore it
///
/// Inputs shorter than 4 bytes are returned unchanged with an empty table. The result is
/// deterministic and never longer than the input.
pub fn encode(input: &[u8]) -> (Vec<u8>, SubstitutionTable) {
    let (output, table, _) = encode_with_stats(input);
    (output, table)
}

/// Like [`encode`], also returning statistics for the call
pub fn encode_with_stats(input: &[u8]) -> (Vec<u8>, SubstitutionTable, EncodeStats) {
    let mut encoder = Encoder::new(input);
    if encoder.is_done() {
        log::trace!("Input of {} bytes too short to encode", input.len());
    } else {
        log::debug!(
            "Encoding {} bytes with {} free codes",
            input.len(),
            encoder.usage.unused_count()
        );
    }
    encoder.run();

    let stats = encoder.stats();
    let (output, table) = encoder.finish();
    (output, table, stats)
}
