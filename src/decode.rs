//! Byte-pair decoder
//!
//! Replays a [`SubstitutionTable`] backwards over encoded data.

use crate::table::SubstitutionTable;

/// Restore the original data from `input` and the table produced alongside it
///
/// Entries are applied from last to first: each occurrence of an entry's code expands into the
/// two bytes of its bigram.
///
/// # Precondition
///
/// `table` must be exactly the table returned by the [`encode`](crate::encode()) call that
/// produced `input`, unmodified and in its original order. This is not checked. A reordered,
/// edited or mismatched table yields wrong output, not an error.
pub fn decode(input: &[u8], table: &SubstitutionTable) -> Vec<u8> {
    let mut current = input.to_vec();

    for entry in table.entries().iter().rev() {
        let mut expanded = Vec::with_capacity(current.len() * 2);
        for &byte in &current {
            if byte == entry.code {
                expanded.push(entry.bigram.first);
                expanded.push(entry.bigram.second);
            } else {
                expanded.push(byte);
            }
        }
        current = expanded;
    }

    current
}
