//! Marker trait for types that may live inside a relocatable block.

#![allow(unsafe_code)]

use crate::offset::OffsetRef;

/// Types that may be stored inside a relocatable block.
///
/// # Safety
///
/// Implementors must guarantee all of the following:
///
/// - the all-zero bit pattern is a valid (empty) value, so freshly
///   bump-allocated storage needs no further initialization;
/// - the layout is defined (`#[repr(C)]` or a primitive) and identical
///   across every process that will read the blob;
/// - no field holds an absolute address — cross-references must be
///   [`OffsetRef`]s;
/// - the type has no drop glue (block teardown never runs destructors);
/// - alignment does not exceed [`MAX_ALIGN`](ballast_core::MAX_ALIGN).
pub unsafe trait Relocatable: Sized {
    /// The zeroed (empty) value.
    fn zeroed() -> Self {
        // SAFETY: the trait contract requires the all-zero pattern to be
        // a valid value of Self.
        unsafe { std::mem::zeroed() }
    }
}

macro_rules! relocatable_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: fixed-layout primitive; zero is a valid value; no
            // addresses, no drop glue.
            unsafe impl Relocatable for $ty {}
        )*
    };
}

relocatable_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, bool);

// SAFETY: arrays of relocatable elements inherit every guarantee
// elementwise; `[T; N]` has no padding beyond `T`'s own.
unsafe impl<T: Relocatable, const N: usize> Relocatable for [T; N] {}

// SAFETY: an OffsetRef is a bare i32 whose zero value is the valid null
// state, and the stored offset is self-relative, never absolute.
unsafe impl<T> Relocatable for OffsetRef<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_scalars() {
        assert_eq!(u32::zeroed(), 0);
        assert_eq!(i64::zeroed(), 0);
        assert_eq!(f64::zeroed(), 0.0);
        assert!(!bool::zeroed());
    }

    #[test]
    fn zeroed_array() {
        let a = <[u16; 8]>::zeroed();
        assert_eq!(a, [0u16; 8]);
    }

    #[test]
    fn zeroed_offset_ref_is_null() {
        let r = OffsetRef::<u32>::zeroed();
        assert!(r.is_null());
    }
}
