//! Size primitives and block-wide limits.

/// Count type used for every in-block size and capacity field.
///
/// All counts are 32-bit so that blobs are compact and identical across
/// 32- and 64-bit readers. A single block therefore cannot exceed 4 GiB.
pub type Size = u32;

/// Hard ceiling on a single block's byte size.
///
/// Sizes and offsets inside a block are 32-bit ([`Size`] and the signed
/// self-relative offsets), so a block never grows past this.
pub const MAX_BLOCK_BYTES: usize = Size::MAX as usize;

/// Strictest alignment an in-block type may require.
///
/// Block base addresses are always aligned to this, which makes
/// offset-relative alignment equal to absolute alignment: a sub-object
/// aligned within the block stays aligned after the block is byte-copied
/// to any other `MAX_ALIGN`-aligned base.
pub const MAX_ALIGN: usize = 16;
