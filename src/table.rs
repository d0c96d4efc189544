//! Substitution table and its byte serialization
//!
//! The table is the only thing besides the encoded payload a decoder needs. On disk it is a
//! bare run of 3-byte records in insertion order: the substitute code followed by the packed
//! bigram in big-endian order. There is no header, version or checksum.

use crate::common::{Bigram, BytePairError, Result, TableEntry, ALPHABET_SIZE, TABLE_RECORD_SIZE};
use std::io::{Read, Write};

/// Ordered record of the substitutions made by one encode call
///
/// Entries are kept in discovery order. Later entries may refer to codes introduced by earlier
/// ones, so decoding must replay them from last to first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<TableEntry>,
}

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no substitution was made
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }

    pub(crate) fn push(&mut self, entry: TableEntry) {
        self.entries.push(entry);
    }

    /// Look up the bigram a code stands for
    pub fn get(&self, code: u8) -> Option<Bigram> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.bigram)
    }

    /// Fully expand a code into the original bytes it replaced
    ///
    /// Returns `None` if `code` is not a key of this table. Nested codes are only expanded when
    /// they were introduced before `code`, which is the order the decoder would resolve them in.
    pub fn expand(&self, code: u8) -> Option<Vec<u8>> {
        let position = self.entries.iter().position(|entry| entry.code == code)?;
        let mut output = vec![code];
        for entry in self.entries[..=position].iter().rev() {
            output = output
                .iter()
                .flat_map(|&byte| {
                    if byte == entry.code {
                        vec![entry.bigram.first, entry.bigram.second]
                    } else {
                        vec![byte]
                    }
                })
                .collect();
        }
        Some(output)
    }

    /// Serialize to the 3-byte-per-record format
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.entries.len() * TABLE_RECORD_SIZE);
        for entry in &self.entries {
            output.push(entry.code);
            output.extend_from_slice(&entry.bigram.pack().to_be_bytes());
        }
        output
    }

    /// Parse a serialized table, preserving record order
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() % TABLE_RECORD_SIZE != 0 {
            return Err(BytePairError::TruncatedTable(data.len()));
        }

        let mut seen = [false; ALPHABET_SIZE];
        let mut entries = Vec::with_capacity(data.len() / TABLE_RECORD_SIZE);
        for record in data.chunks_exact(TABLE_RECORD_SIZE) {
            let code = record[0];
            if seen[code as usize] {
                return Err(BytePairError::DuplicateCode(code));
            }
            seen[code as usize] = true;

            let packed = u16::from_be_bytes([record[1], record[2]]);
            entries.push(TableEntry {
                code,
                bigram: Bigram::from_packed(packed),
            });
        }

        Ok(Self { entries })
    }

    /// Write the serialized table to `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read a serialized table from `reader` until EOF
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}

impl From<Vec<TableEntry>> for SubstitutionTable {
    fn from(entries: Vec<TableEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a SubstitutionTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
