//! Core types for the ballast relocatable-block library.
//!
//! This is the leaf crate with zero internal ballast dependencies. It
//! defines the size primitives, block-wide limits, and error types used
//! throughout the ballast workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod size;

// Re-export core types at crate root for convenience.
pub use error::{AllocError, BlockError};
pub use size::{Size, MAX_ALIGN, MAX_BLOCK_BYTES};
