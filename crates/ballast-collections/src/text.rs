//! NUL-terminated text stored through self-relative references.
//!
//! [`Str`] holds UTF-8 bytes, [`WStr`] holds 32-bit code units. Both wrap
//! a single [`OffsetRef`] to a terminated run in the block; the null
//! reference is the empty state and compares equal to the empty string.
//!
//! Reassignment and [`Str::clear`] only move the reference — the old
//! bytes stay occupied in the bump region. That is the core trade-off of
//! the whole design: simplicity over reclamation.

#![allow(unsafe_code)]

use std::fmt;
use std::slice;
use std::str;

use ballast_block::{BlockAlloc, OffsetRef, Relocatable};
use ballast_core::AllocError;

/// UTF-8 text stored via a self-relative reference, NUL-terminated.
#[repr(C)]
pub struct Str {
    data: OffsetRef<u8>,
}

// SAFETY: a single OffsetRef; zero (null) is the valid empty string.
unsafe impl Relocatable for Str {}

impl Str {
    /// Store `text` in the block and point this field at it.
    ///
    /// Allocates `text.len() + 1` bytes — content plus NUL terminator.
    /// On allocation failure the field keeps its previous value. Interior
    /// NUL characters truncate reads, as in any NUL-terminated encoding.
    ///
    /// `alloc` must be the capability of the block containing this field.
    pub fn assign(&mut self, alloc: &BlockAlloc<'_>, text: &str) -> Result<(), AllocError> {
        let bytes = alloc.alloc_slice::<u8>(text.len() + 1)?;
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        // The terminator is already zero from allocation.
        // SAFETY: the run was just bump-allocated inside the same block
        // as this field.
        unsafe { self.data.set(bytes.as_ptr()) };
        Ok(())
    }

    fn terminated(&self) -> &[u8] {
        match self.data.get() {
            None => &[],
            Some(first) => {
                let start = first as *const u8;
                let mut len = 0usize;
                // SAFETY: `assign` always writes a NUL-terminated run, so
                // the walk stops inside the original allocation.
                unsafe {
                    while *start.add(len) != 0 {
                        len += 1;
                    }
                    slice::from_raw_parts(start, len)
                }
            }
        }
    }

    /// The stored bytes, without the terminator. Empty when null.
    pub fn as_bytes(&self) -> &[u8] {
        self.terminated()
    }

    /// The stored text.
    ///
    /// Degrades to `""` when the reference is null or the bytes are not
    /// valid UTF-8 (a foreign or corrupted blob), mirroring the null
    /// case rather than faulting.
    pub fn as_str(&self) -> &str {
        str::from_utf8(self.terminated()).unwrap_or("")
    }

    /// Byte length of the stored text.
    pub fn len(&self) -> usize {
        self.terminated().len()
    }

    /// Whether the text is absent or zero-length.
    pub fn is_empty(&self) -> bool {
        self.terminated().is_empty()
    }

    /// Null the reference. The bytes stay occupied in the block.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Str {}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wide text: NUL-terminated 32-bit code units via a self-relative
/// reference.
#[repr(C)]
pub struct WStr {
    data: OffsetRef<u32>,
}

// SAFETY: a single OffsetRef; zero (null) is the valid empty string.
unsafe impl Relocatable for WStr {}

impl WStr {
    /// Encode `text` as 32-bit units in the block and point this field
    /// at it. Allocates `chars + 1` units.
    ///
    /// `alloc` must be the capability of the block containing this field.
    pub fn assign(&mut self, alloc: &BlockAlloc<'_>, text: &str) -> Result<(), AllocError> {
        let count = text.chars().count();
        let units = alloc.alloc_slice::<u32>(count + 1)?;
        for (slot, ch) in units.iter_mut().zip(text.chars()) {
            *slot = ch as u32;
        }
        // SAFETY: the run was just bump-allocated inside the same block
        // as this field.
        unsafe { self.data.set(units.as_ptr()) };
        Ok(())
    }

    fn units(&self) -> &[u32] {
        match self.data.get() {
            None => &[],
            Some(first) => {
                let start = first as *const u32;
                let mut len = 0usize;
                // SAFETY: `assign` always writes a NUL-terminated run, so
                // the walk stops inside the original allocation.
                unsafe {
                    while *start.add(len) != 0 {
                        len += 1;
                    }
                    slice::from_raw_parts(start, len)
                }
            }
        }
    }

    /// The stored code units, without the terminator.
    pub fn as_units(&self) -> &[u32] {
        self.units()
    }

    /// Decode the stored units; invalid units become U+FFFD.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.units()
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Decode into an owned `String`; invalid units become U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.chars().collect()
    }

    /// Number of stored code units.
    pub fn len(&self) -> usize {
        self.units().len()
    }

    /// Whether the text is absent or zero-length.
    pub fn is_empty(&self) -> bool {
        self.units().is_empty()
    }

    /// Null the reference. The units stay occupied in the block.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl PartialEq<str> for WStr {
    fn eq(&self, other: &str) -> bool {
        let units = self.units();
        units.len() == other.chars().count()
            && units.iter().zip(other.chars()).all(|(&u, c)| u == c as u32)
    }
}

impl PartialEq for WStr {
    fn eq(&self, other: &WStr) -> bool {
        self.units() == other.units()
    }
}

impl Eq for WStr {}

impl fmt::Debug for WStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn zeroed_str_is_empty() {
        let block = testing::block::<Str>(128);
        let s = &block.record().payload;
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.as_str(), "");
        assert!(*s == "");
    }

    #[test]
    fn assign_then_read() {
        let mut block = testing::block::<Str>(128);
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "hello").unwrap();
        assert_eq!(record.payload.as_str(), "hello");
        assert_eq!(record.payload.len(), 5);
        assert!(!record.payload.is_empty());
    }

    #[test]
    fn assign_consumes_len_plus_one_bytes() {
        let mut block = testing::block::<Str>(128);
        let before = block.used_space();
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "hello").unwrap();
        assert_eq!(block.used_space(), before + 6);
    }

    #[test]
    fn clear_leaves_bytes_occupied() {
        let mut block = testing::block::<Str>(128);
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "hello").unwrap();
        let used = block.used_space();
        block.record_mut().payload.clear();
        assert!(block.record().payload.is_empty());
        assert_eq!(block.used_space(), used);
    }

    #[test]
    fn failed_assign_keeps_previous_value() {
        let mut block = testing::block::<Str>(64);
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "keep").unwrap();
        let huge = "x".repeat(1024);
        assert!(record.payload.assign(&alloc, &huge).is_err());
        assert_eq!(record.payload.as_str(), "keep");
    }

    #[test]
    fn equality_null_and_empty_agree() {
        let mut block = testing::block::<Str>(128);
        let (record, alloc) = block.parts();
        // payload starts null; assign "" to a second run for comparison.
        let mut other = testing::block::<Str>(128);
        let (orec, oalloc) = other.parts();
        orec.payload.assign(&oalloc, "").unwrap();
        assert!(record.payload == orec.payload);
        record.payload.assign(&alloc, "x").unwrap();
        assert!(record.payload != orec.payload);
    }

    #[test]
    fn empty_assignment_is_terminator_only() {
        let mut block = testing::block::<Str>(128);
        let before = block.used_space();
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "").unwrap();
        assert_eq!(block.used_space(), before + 1);
        assert!(block.record().payload.is_empty());
    }

    #[test]
    fn display_and_debug() {
        let mut block = testing::block::<Str>(128);
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "hi").unwrap();
        assert_eq!(format!("{}", record.payload), "hi");
        assert_eq!(format!("{:?}", record.payload), "\"hi\"");
    }

    #[test]
    fn wstr_round_trips_non_ascii() {
        let mut block = testing::block::<WStr>(256);
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "héllo ☃").unwrap();
        assert_eq!(record.payload.to_string_lossy(), "héllo ☃");
        assert_eq!(record.payload.len(), 7);
        assert!(record.payload == *"héllo ☃");
    }

    #[test]
    fn wstr_zeroed_is_empty() {
        let block = testing::block::<WStr>(64);
        assert!(block.record().payload.is_empty());
        assert_eq!(block.record().payload.to_string_lossy(), "");
    }

    #[test]
    fn wstr_unit_count_consumed() {
        let mut block = testing::block::<WStr>(256);
        let before = block.used_space();
        let (record, alloc) = block.parts();
        record.payload.assign(&alloc, "ab").unwrap();
        assert_eq!(block.used_space(), before + 12);
    }
}
