//! The relocation and round-trip laws, checked over a record that uses
//! every container: byte-copying the used prefix of a block to any
//! other aligned base yields bit-identical reads, and `duplicate`
//! preserves used space plus every reachable field.

use ballast::prelude::*;
use ballast_test_utils::{assert_sample_contact, sample_contact, Contact};
use proptest::prelude::*;

#[repr(C, align(16))]
struct AlignedBuf([u8; 4096]);

impl AlignedBuf {
    fn zeroed() -> Box<AlignedBuf> {
        Box::new(AlignedBuf([0; 4096]))
    }
}

// ─── Relocation law ─────────────────────────────────────────────

#[test]
fn byte_copy_reads_identically() {
    let block = sample_contact(2048);
    let used = block.used_bytes();

    let mut buf = AlignedBuf::zeroed();
    buf.0[..used.len()].copy_from_slice(used);
    let relocated = view::<Contact>(&buf.0[..used.len()]).unwrap();

    assert_sample_contact(relocated);
    assert_eq!(relocated.used_space(), block.used_space());
}

#[test]
fn second_relocation_is_also_valid() {
    // Two hops: block → buffer A → buffer B. Offsets are rebased by
    // nothing — they are base-independent — so any chain of copies
    // works.
    let block = sample_contact(2048);
    let used = block.used_bytes();

    let mut a = AlignedBuf::zeroed();
    a.0[..used.len()].copy_from_slice(used);
    let mut b = AlignedBuf::zeroed();
    b.0[..used.len()].copy_from_slice(&a.0[..used.len()]);

    assert_sample_contact(view::<Contact>(&b.0[..used.len()]).unwrap());
}

#[test]
fn emplaced_block_is_relocatable_too() {
    let mut storage = AlignedBuf::zeroed();
    let used_len;
    {
        let mut block = emplace::<Contact>(&mut storage.0).unwrap();
        let (rec, alloc) = block.parts();
        rec.name.assign(&alloc, "in place").unwrap();
        rec.scores.allocate(&alloc, 2).unwrap().copy_from_slice(&[1.0, 2.0]);
        used_len = block.used_space();
    }

    let mut copy = AlignedBuf::zeroed();
    copy.0[..used_len].copy_from_slice(&storage.0[..used_len]);
    let relocated = view::<Contact>(&copy.0[..used_len]).unwrap();
    assert_eq!(relocated.name.as_str(), "in place");
    assert_eq!(relocated.scores.as_slice(), &[1.0, 2.0]);
}

// ─── Round-trip law ─────────────────────────────────────────────

#[test]
fn duplicate_preserves_used_space_and_fields() {
    let block = sample_contact(2048);
    let copy = BlockBox::duplicate(block.record()).unwrap();
    assert_eq!(copy.used_space(), block.used_space());
    assert_sample_contact(copy.record());
}

#[test]
fn duplicate_of_duplicate_is_stable() {
    let block = sample_contact(2048);
    let once = BlockBox::duplicate(block.record()).unwrap();
    let twice = BlockBox::duplicate(once.record()).unwrap();
    assert_eq!(twice.used_space(), block.used_space());
    assert_sample_contact(twice.record());
    // A duplicate is sized exactly to its content.
    assert_eq!(twice.capacity(), twice.used_space());
}

#[test]
fn from_bytes_restores_a_serialized_block() {
    let block = sample_contact(2048);
    let blob: Vec<u8> = block.used_bytes().to_vec();
    let restored = BlockBox::<Contact>::from_bytes(&blob).unwrap();
    assert_sample_contact(restored.record());
    assert_eq!(restored.used_space(), block.used_space());
}

#[test]
fn copy_from_keeps_destination_free_space_usable() {
    let block = sample_contact(1024);
    let mut dst = BlockBox::<Contact>::new(4096).unwrap();
    dst.copy_from(block.record()).unwrap();
    assert_sample_contact(dst.record());
    assert_eq!(dst.capacity(), 4096);

    // The destination can keep growing after the copy.
    let (rec, alloc) = dst.parts();
    rec.tags.push(&alloc, 44).unwrap();
    assert_eq!(rec.tags.len(), 4);
}

// ─── Property tests ─────────────────────────────────────────────

#[repr(C)]
struct Note {
    header: BlockHeader,
    title: Str,
    values: DenseVector<u32>,
    trail: List<u32>,
}

// SAFETY: repr(C); relocatable zero-valid fields.
unsafe impl Relocatable for Note {}
// SAFETY: BlockHeader first; block-lifecycle construction only.
unsafe impl Record for Note {}

fn build_note(title: &str, values: &[u32], trail: &[u32]) -> BlockBox<Note> {
    let capacity = 512 + title.len() + values.len() * 4 + trail.len() * 32;
    let mut block = BlockBox::<Note>::new(capacity).unwrap();
    let (rec, alloc) = block.parts();
    rec.title.assign(&alloc, title).unwrap();
    rec.values
        .allocate(&alloc, values.len())
        .unwrap()
        .copy_from_slice(values);
    for &v in trail {
        rec.trail.push(&alloc, v).unwrap();
    }
    block
}

proptest! {
    #[test]
    fn duplicate_round_trips_arbitrary_content(
        title in "[a-zA-Z0-9 _.-]{0,48}",
        values in proptest::collection::vec(any::<u32>(), 0..64),
        trail in proptest::collection::vec(any::<u32>(), 0..24),
    ) {
        let block = build_note(&title, &values, &trail);
        let copy = BlockBox::duplicate(block.record()).unwrap();

        prop_assert_eq!(copy.used_space(), block.used_space());
        prop_assert_eq!(copy.record().title.as_str(), title.as_str());
        prop_assert_eq!(copy.record().values.as_slice(), values.as_slice());
        let copied: Vec<u32> = copy.record().trail.iter().copied().collect();
        prop_assert_eq!(copied, trail);
    }

    #[test]
    fn relocated_view_matches_source(
        title in "[a-zA-Z0-9 _.-]{0,48}",
        values in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let block = build_note(&title, &values, &[]);
        let used = block.used_bytes();
        prop_assume!(used.len() <= 4096);

        let mut buf = AlignedBuf::zeroed();
        buf.0[..used.len()].copy_from_slice(used);
        let relocated = view::<Note>(&buf.0[..used.len()]).unwrap();

        prop_assert_eq!(relocated.title.as_str(), title.as_str());
        prop_assert_eq!(relocated.values.as_slice(), values.as_slice());
    }
}
