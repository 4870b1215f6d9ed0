//! Benchmark workloads and utilities for ballast.
//!
//! Provides deterministic, seeded input builders so bench runs are
//! reproducible:
//!
//! - [`word_list`]: pseudo-random ASCII words for string interning
//! - [`sample_values`]: pseudo-random `u32` payloads
//! - [`filled_directory`]: a directory block at a given entry count

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use ballast::prelude::*;
use ballast_test_utils::Contact;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `n` pseudo-random lowercase words of 3..=12 characters.
pub fn word_list(n: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..=12);
            (0..len)
                .map(|_| char::from(b'a' + rng.gen_range(0..26)))
                .collect()
        })
        .collect()
}

/// Generate `n` pseudo-random `u32` values.
pub fn sample_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

/// Build a contact block whose attribute map holds `entries`
/// seeded-random words, sized generously enough to never exhaust.
pub fn filled_directory(entries: usize, seed: u64) -> BlockBox<Contact> {
    let words = word_list(entries, seed);
    let capacity = 1024 + entries * 32;
    let mut block = BlockBox::<Contact>::new(capacity).expect("capacity covers the workload");
    let (rec, alloc) = block.parts();
    rec.attrs
        .allocate(&alloc, entries)
        .expect("capacity covers the workload");
    for (i, pair) in rec.attrs.entries_mut().iter_mut().enumerate() {
        pair.key
            .assign(&alloc, &words[i])
            .expect("capacity covers the workload");
        pair.value = i as u32;
    }
    block
}
