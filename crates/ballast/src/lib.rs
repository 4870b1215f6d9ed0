//! Ballast: relocatable, position-independent data blocks.
//!
//! A ballast *block* is one contiguous memory region holding a user
//! record plus every dynamically sized sub-object it owns — strings,
//! lists, vectors, maps — packed into the trailing free space by an
//! embedded bump allocator. All cross-references are self-relative
//! 32-bit offsets, so the block can be byte-copied, written to disk, or
//! mapped into another process at a different base address and read
//! immediately, with no relocation pass and no deserialization.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the ballast sub-crates. For most users, adding `ballast` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ballast::prelude::*;
//!
//! // A record: repr(C), BlockHeader first, relocatable fields.
//! #[repr(C)]
//! struct Note {
//!     header: BlockHeader,
//!     title: Str,
//!     words: List<u32>,
//! }
//! // SAFETY: repr(C); every field is relocatable and zero-valid.
//! unsafe impl Relocatable for Note {}
//! // SAFETY: BlockHeader is the first field.
//! unsafe impl Record for Note {}
//!
//! // Build a block with 256 bytes of total capacity.
//! let mut block = BlockBox::<Note>::new(256).unwrap();
//! let (note, alloc) = block.parts();
//! note.title.assign(&alloc, "hello").unwrap();
//! note.words.push(&alloc, 5).unwrap();
//!
//! // The used prefix is relocatable: a byte copy reads identically.
//! let copy = BlockBox::duplicate(block.record()).unwrap();
//! assert_eq!(copy.record().title.as_str(), "hello");
//! assert_eq!(copy.record().words[0], 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`block`] | `ballast-block` | `OffsetRef`, `Relocatable`, bump allocation, block lifecycle |
//! | [`collections`] | `ballast-collections` | `Str`, `WStr`, `FixedArray`, `List`, `DenseVector`, `AssocMap` |
//! | [`types`] | `ballast-core` | `Size`, limits, error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Self-relative references, bump allocation, and block lifecycle
/// (`ballast-block`).
///
/// Most users only need [`block::BlockBox`], [`block::emplace`], and
/// [`block::view`] from this module — they are also in the [`prelude`].
pub use ballast_block as block;

/// Relocatable containers (`ballast-collections`).
///
/// Container fields embed directly in records; their dynamic storage is
/// allocated from the owning block.
pub use ballast_collections as collections;

/// Core size primitives, limits, and error types (`ballast-core`).
pub use ballast_core as types;

/// Common imports for typical ballast usage.
///
/// ```rust
/// use ballast::prelude::*;
/// ```
pub mod prelude {
    // Block lifecycle and primitives
    pub use ballast_block::{
        emplace, view, BlockAlloc, BlockBox, BlockHeader, BlockMut, OffsetRef, Record, RecordExt,
        Relocatable,
    };

    // Containers
    pub use ballast_collections::{AssocMap, DenseVector, FixedArray, List, Pair, Str, WStr};

    // Errors and sizes
    pub use ballast_core::{AllocError, BlockError, Size};
}
