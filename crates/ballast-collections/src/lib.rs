//! Relocatable containers for ballast blocks.
//!
//! Each container is a plain `#[repr(C)]` value embedded in a record (or
//! allocated out-of-line from a block) whose dynamic storage lives in the
//! same block, referenced by self-relative offsets. The all-zero state is
//! always the valid empty container, so freshly allocated storage needs
//! no initialization call.
//!
//! Mutating operations take the block's [`BlockAlloc`] capability; the
//! handle must come from the block that physically contains the container
//! field, or relocation soundness is lost.
//!
//! This crate is one of the two that may contain `unsafe` code (along
//! with `ballast-block`). Every unsafe block carries a mandatory
//! `// SAFETY:` comment.
//!
//! [`BlockAlloc`]: ballast_block::BlockAlloc

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod list;
pub mod map;
pub mod text;
pub mod vector;

pub use array::FixedArray;
pub use list::{List, ListIter};
pub use map::{AssocMap, Pair};
pub use text::{Str, WStr};
pub use vector::DenseVector;
