//! Fixture record types and builders shared by ballast integration
//! tests and benches.
//!
//! The `unsafe impl` markers below are exactly what every ballast
//! consumer writes for its own record types: `#[repr(C)]`, header first,
//! relocatable fields throughout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ballast_block::{BlockBox, BlockHeader, Record, Relocatable};
use ballast_collections::{AssocMap, DenseVector, FixedArray, List, Str, WStr};

/// Contact-card record exercising every container type.
#[repr(C)]
pub struct Contact {
    /// Block header (mandatory first field).
    pub header: BlockHeader,
    /// Primary name.
    pub name: Str,
    /// Wide-character display name.
    pub display_name: WStr,
    /// Tag identifiers, in insertion order.
    pub tags: List<u32>,
    /// Score history.
    pub scores: DenseVector<f64>,
    /// String-keyed attributes.
    pub attrs: AssocMap<Str, u32>,
    /// Fixed-width digest bytes.
    pub digest: FixedArray<u8, 16>,
}

// SAFETY: repr(C); every field is relocatable and zero-valid.
unsafe impl Relocatable for Contact {}
// SAFETY: BlockHeader is the first field; instances only come from the
// block lifecycle functions.
unsafe impl Record for Contact {}

/// Version 1 of the schema-evolution fixture: one coordinate.
#[repr(C)]
pub struct PointV1 {
    /// Block header (mandatory first field).
    pub header: BlockHeader,
    /// Horizontal coordinate.
    pub x: i32,
}

// SAFETY: repr(C); relocatable zero-valid fields.
unsafe impl Relocatable for PointV1 {}
// SAFETY: BlockHeader first; block-lifecycle construction only.
unsafe impl Record for PointV1 {}

/// Version 2 of the schema-evolution fixture: adds a trailing field.
#[repr(C)]
pub struct PointV2 {
    /// Block header (mandatory first field).
    pub header: BlockHeader,
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate, absent from V1 blobs.
    pub y: i32,
}

// SAFETY: repr(C); relocatable zero-valid fields.
unsafe impl Relocatable for PointV2 {}
// SAFETY: BlockHeader first; block-lifecycle construction only.
unsafe impl Record for PointV2 {}

/// Build a contact block with representative content in every
/// container.
///
/// # Panics
///
/// Panics if `capacity` cannot hold the fixture content; 1 KiB is ample.
pub fn sample_contact(capacity: usize) -> BlockBox<Contact> {
    let mut block = BlockBox::<Contact>::new(capacity).expect("fixture capacity holds the record");
    let (record, alloc) = block.parts();
    record
        .name
        .assign(&alloc, "Amara Okafor")
        .expect("fixture content fits");
    record
        .display_name
        .assign(&alloc, "Amara ☆ Okafor")
        .expect("fixture content fits");
    for tag in [11, 22, 33] {
        record.tags.push(&alloc, tag).expect("fixture content fits");
    }
    let scores = record
        .scores
        .allocate(&alloc, 4)
        .expect("fixture content fits");
    scores.copy_from_slice(&[0.5, 1.25, -3.0, 8.125]);
    record
        .attrs
        .allocate(&alloc, 2)
        .expect("fixture content fits");
    let keys = ["height", "weight"];
    let values = [180, 75];
    for (i, pair) in record.attrs.entries_mut().iter_mut().enumerate() {
        pair.key.assign(&alloc, keys[i]).expect("fixture content fits");
        pair.value = values[i];
    }
    for (i, byte) in record.digest.iter_mut().enumerate() {
        *byte = i as u8;
    }
    block
}

/// Assert that `record` holds exactly the content written by
/// [`sample_contact`]. Works on any readable copy: the original block, a
/// byte-copied view, or a duplicate.
pub fn assert_sample_contact(record: &Contact) {
    assert_eq!(record.name.as_str(), "Amara Okafor");
    assert_eq!(record.display_name.to_string_lossy(), "Amara ☆ Okafor");
    assert_eq!(record.tags.len(), 3);
    assert_eq!(record.tags.iter().copied().collect::<Vec<_>>(), [11, 22, 33]);
    assert_eq!(record.scores.as_slice(), &[0.5, 1.25, -3.0, 8.125]);
    assert_eq!(record.attrs.get("height"), Some(&180));
    assert_eq!(record.attrs.get("weight"), Some(&75));
    assert!(record.attrs.get("missing").is_none());
    for (i, &byte) in record.digest.iter().enumerate() {
        assert_eq!(byte, i as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_contact_round_trips_through_its_checker() {
        let block = sample_contact(1024);
        assert_sample_contact(block.record());
        assert!(block.used_space() <= block.capacity());
    }

    #[test]
    fn point_versions_share_a_prefix() {
        assert!(std::mem::size_of::<PointV1>() < std::mem::size_of::<PointV2>());
    }
}
