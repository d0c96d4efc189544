//! Bigram counting and substitution over the working buffer
//!
//! Both passes walk consecutive live slots, skipping tombstones, so a pair the scan counts is
//! always a pair the rewrite can replace.

use super::state::{Encoder, Slot};
use crate::common::Bigram;
use rustc_hash::FxHashMap;

impl Encoder {
    /// Find the most frequent bigram among consecutive live slots
    ///
    /// Returns the bigram and its tally, or `None` when nothing occurs more than once.
    ///
    /// A bigram equal to the one counted immediately before it is skipped, and the tracker is
    /// cleared. In a run like `aaa` this counts `aa` once rather than twice. Ties go to the bigram
    /// that reached the winning tally first.
    ///
    /// The tracker is not reset between rounds: the last bigram of one scan can cause the first
    /// bigram of the next to be skipped. It is cleared when the buffer starts with a tombstone.
    pub fn most_frequent_pair(&mut self) -> Option<(Bigram, usize)> {
        let mut counts: FxHashMap<Bigram, usize> = FxHashMap::default();
        let mut best: Option<(Bigram, usize)> = None;

        let mut previous = self.previous;
        if self.slots.first() == Some(&Slot::Tombstone) {
            previous = None;
        }

        let mut bytes = self.slots.iter().filter_map(|slot| slot.byte());
        let Some(mut first) = bytes.next() else {
            self.previous = previous;
            return None;
        };

        for second in bytes {
            let bigram = Bigram::new(first, second);

            if previous == Some(bigram) {
                previous = None;
                continue;
            }
            previous = Some(bigram);
            first = second;

            let count = counts.entry(bigram).or_insert(0);
            *count += 1;

            let best_count = best.map_or(0, |(_, count)| count);
            if *count > 1 && *count > best_count {
                best = Some((bigram, *count));
            }
        }

        self.previous = previous;
        best
    }

    /// Replace every occurrence of `bigram` with `code`
    ///
    /// The first slot of each match becomes a tombstone and the second takes `code`. Returns the
    /// number of substitutions made.
    pub(crate) fn substitute(&mut self, bigram: Bigram, code: u8) -> usize {
        let mut replaced = 0;
        let mut previous: Option<usize> = None;

        for index in 0..self.slots.len() {
            let Slot::Live(second) = self.slots[index] else {
                continue;
            };

            if let Some(prev_index) = previous {
                if self.slots[prev_index] == Slot::Live(bigram.first) && second == bigram.second {
                    self.slots[prev_index] = Slot::Tombstone;
                    self.slots[index] = Slot::Live(code);
                    self.usage.record(code);
                    replaced += 1;
                }
            }
            previous = Some(index);
        }

        self.live -= replaced;
        replaced
    }
}
