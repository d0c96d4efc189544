//! Substitution table serialization tests
//!
//! A stored table must come back in exactly the order it was written, since decoding replays
//! entries in reverse insertion order.

use bytepair::{decode, encode, BytePairError, SubstitutionTable, TABLE_RECORD_SIZE};
use std::fs;
use tempfile::tempdir;

/// Test the on-disk layout against a known encoding
#[test]
fn test_known_layout() {
    let (_, table) = encode(b"aaabdaaabac");
    assert_eq!(hex::encode(table.to_bytes()), "006161010061020162");
}

/// Test that a table survives a trip through a file
#[test]
fn test_file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("data.table");

    let input = b"we were all going direct to Heaven, we were all going direct the other way";
    let (encoded, table) = encode(input);
    assert!(!table.is_empty());

    let mut file = fs::File::create(&path)?;
    table.write_to(&mut file)?;
    drop(file);

    assert_eq!(fs::metadata(&path)?.len() as usize, table.len() * TABLE_RECORD_SIZE);

    let mut file = fs::File::open(&path)?;
    let restored = SubstitutionTable::read_from(&mut file)?;
    assert_eq!(restored, table);
    assert_eq!(decode(&encoded, &restored), input);

    Ok(())
}

/// Test rejection of a table cut off mid-record
#[test]
fn test_truncated_table() {
    let (_, table) = encode(b"aaabdaaabac");
    let mut bytes = table.to_bytes();
    bytes.pop();

    let err = SubstitutionTable::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, BytePairError::TruncatedTable(8)));
    assert!(err.to_string().contains("8 bytes"));
}

/// Test rejection of a table that reuses a code
#[test]
fn test_duplicate_code() {
    let bytes = hex::decode("00616100aabb").unwrap();
    let err = SubstitutionTable::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, BytePairError::DuplicateCode(0x00)));
}

/// Test that swapping entries changes the decoded output without failing
#[test]
fn test_reordered_table_decodes_wrongly() {
    let input = b"aaabdaaabac";
    let (encoded, table) = encode(input);
    let mut bytes = table.to_bytes();

    // Swap the first and last records.
    let last = bytes.len() - TABLE_RECORD_SIZE;
    for i in 0..TABLE_RECORD_SIZE {
        bytes.swap(i, last + i);
    }
    let reordered = SubstitutionTable::from_bytes(&bytes).unwrap();

    assert_ne!(decode(&encoded, &reordered), input);
}
