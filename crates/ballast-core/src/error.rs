//! Error types for block construction and in-block allocation.
//!
//! Resource exhaustion is always reported as a value, never a panic.
//! Bounds faults on container accessors are the callers' programming
//! errors and surface as `None` or documented panics in the container
//! crates, not through these types.

use std::error::Error;
use std::fmt;

/// Errors from allocation inside a block's free space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The block's free space cannot satisfy the request.
    ///
    /// Nothing was mutated; the block's used space is unchanged.
    CapacityExceeded {
        /// Bytes requested, excluding alignment padding.
        requested: usize,
        /// Bytes still available in the bump region.
        available: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "block free space exceeded: requested {requested} bytes, {available} available"
                )
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from block lifecycle operations (construction, copy, viewing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockError {
    /// The requested capacity cannot hold the record itself.
    CapacityTooSmall {
        /// Capacity requested by the caller.
        requested: usize,
        /// Smallest capacity that can hold the record.
        minimum: usize,
    },
    /// The requested capacity exceeds the 4 GiB block ceiling.
    BlockTooLarge {
        /// Capacity requested by the caller.
        requested: usize,
    },
    /// A caller-supplied buffer is not aligned to `MAX_ALIGN`.
    Misaligned {
        /// Address of the rejected buffer.
        addr: usize,
    },
    /// The destination block cannot hold the source's used bytes.
    ///
    /// No partial copy occurs.
    CopyOverflow {
        /// Bytes the source occupies (its used space).
        needed: usize,
        /// Total capacity of the destination.
        capacity: usize,
    },
    /// A byte buffer is shorter than the block data it claims to hold.
    Truncated {
        /// Length of the supplied buffer.
        len: usize,
        /// Bytes the recorded block state requires.
        needed: usize,
    },
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooSmall { requested, minimum } => {
                write!(
                    f,
                    "capacity {requested} cannot hold the record (minimum {minimum})"
                )
            }
            Self::BlockTooLarge { requested } => {
                write!(f, "capacity {requested} exceeds the 4 GiB block ceiling")
            }
            Self::Misaligned { addr } => {
                write!(f, "buffer at {addr:#x} is not MAX_ALIGN-aligned")
            }
            Self::CopyOverflow { needed, capacity } => {
                write!(
                    f,
                    "copy rejected: source occupies {needed} bytes, destination capacity is {capacity}"
                )
            }
            Self::Truncated { len, needed } => {
                write!(f, "buffer holds {len} bytes but the block requires {needed}")
            }
        }
    }
}

impl Error for BlockError {}
