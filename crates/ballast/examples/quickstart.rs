//! Ballast quickstart — a complete record from scratch.
//!
//! Demonstrates:
//!   1. Declaring a relocatable record
//!   2. Building a block and filling every container kind
//!   3. Relocating by byte copy and reading the copy
//!   4. Schema-tolerant reads of an older blob
//!
//! Run with:
//!   cargo run --example quickstart

use ballast::prelude::*;

// ─── Record declaration ─────────────────────────────────────────

#[repr(C)]
struct Employee {
    header: BlockHeader,
    name: Str,
    badge: WStr,
    project_ids: List<u32>,
    ratings: DenseVector<f64>,
    office_by_year: AssocMap<u32, Str>,
    fingerprint: FixedArray<u8, 8>,
}

// SAFETY: repr(C); every field is relocatable and zero-valid.
unsafe impl Relocatable for Employee {}
// SAFETY: BlockHeader is the first field.
unsafe impl Record for Employee {}

fn main() {
    // ─── Build and fill ─────────────────────────────────────────
    let mut block = BlockBox::<Employee>::new(1024).expect("capacity holds the record");
    {
        let (rec, alloc) = block.parts();
        rec.name.assign(&alloc, "Mina Harker").unwrap();
        rec.badge.assign(&alloc, "№ 1897").unwrap();
        for id in [101, 204, 309] {
            rec.project_ids.push(&alloc, id).unwrap();
        }
        rec.ratings
            .allocate(&alloc, 3)
            .unwrap()
            .copy_from_slice(&[4.5, 4.8, 4.9]);
        rec.office_by_year.allocate(&alloc, 2).unwrap();
        let years = [2023u32, 2024];
        let offices = ["London", "Whitby"];
        for (i, pair) in rec.office_by_year.entries_mut().iter_mut().enumerate() {
            pair.key = years[i];
            pair.value.assign(&alloc, offices[i]).unwrap();
        }
        rec.fingerprint.as_mut_slice().copy_from_slice(b"deadbeef");
    }
    println!(
        "built block: {} of {} bytes used",
        block.used_space(),
        block.capacity()
    );

    // ─── Relocate by byte copy ──────────────────────────────────
    let copy = BlockBox::duplicate(block.record()).expect("sized to the source");
    let rec = copy.record();
    println!("relocated copy reads: {} / {}", rec.name, rec.badge.to_string_lossy());
    println!(
        "projects: {:?}, 2024 office: {}",
        rec.project_ids,
        rec.office_by_year[&2024]
    );

    // ─── Raw bytes round trip (disk / IPC) ──────────────────────
    let blob: Vec<u8> = copy.used_bytes().to_vec();
    let restored = BlockBox::<Employee>::from_bytes(&blob).expect("intact blob");
    assert_eq!(restored.record().name.as_str(), "Mina Harker");
    println!("restored from {} raw bytes", blob.len());

    // ─── Schema tolerance ───────────────────────────────────────
    // A reader whose record type grew a trailing field detects its
    // absence in old blobs via the recorded record size.
    let present = restored.record().has_member(&restored.record().name);
    println!("old blob has `name`: {present}");
}
