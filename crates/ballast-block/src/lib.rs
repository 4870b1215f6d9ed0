//! Relocatable memory blocks for ballast.
//!
//! A *block* is one contiguous byte region holding a user record at
//! offset zero and a bump allocator in the trailing free space. Every
//! cross-reference inside the block is an [`OffsetRef`]: a signed 32-bit
//! distance from the slot that stores it. Because no absolute address is
//! ever written into the block, the whole region can be byte-copied,
//! written to disk, or mapped at a different base and read immediately.
//!
//! This crate is one of the two that may contain `unsafe` code (along
//! with `ballast-collections`). Every unsafe block carries a mandatory
//! `// SAFETY:` comment.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod alloc;
pub mod block;
pub mod header;
pub mod offset;
pub mod relocatable;

pub use alloc::{BlockAlloc, BumpAllocator};
pub use block::{emplace, view, BlockBox, BlockMut};
pub use header::{BlockHeader, Record, RecordExt};
pub use offset::OffsetRef;
pub use relocatable::Relocatable;
