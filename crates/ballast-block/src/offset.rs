//! The self-relative reference primitive.
//!
//! An [`OffsetRef`] stores the distance from its own storage to its
//! target instead of the target's address. Resolution adds the stored
//! offset to the slot's current address, so a byte-copy of slot and
//! target together leaves the reference valid at any new base.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

/// A position-independent reference to a `T` in the same block.
///
/// The raw value is a signed 32-bit byte distance from the slot itself;
/// zero denotes null, which is why a slot can never reference its own
/// storage. The all-zero (null) state is the valid empty state, so
/// zero-initialized memory contains valid null references.
///
/// `OffsetRef` is deliberately neither `Clone` nor `Copy`: a raw offset
/// is only meaningful relative to the slot holding it, and copying it
/// into a slot at a different address would re-point the copy at
/// unrelated bytes. Use [`OffsetRef::assign`] to copy between slots by
/// resolve-then-store.
#[repr(transparent)]
pub struct OffsetRef<T> {
    raw: i32,
    _marker: PhantomData<*const T>,
}

// SAFETY: an `OffsetRef` is an inert integer until resolved; resolving
// through `&self` yields `&T` and through `&mut self` yields `&mut T`,
// so the reference follows the same cross-thread rules as `&T`/`&mut T`.
unsafe impl<T: Sync> Sync for OffsetRef<T> {}
// SAFETY: as above; moving the slot only moves the integer.
unsafe impl<T: Send> Send for OffsetRef<T> {}

impl<T> OffsetRef<T> {
    /// A null reference. Identical to the zero-initialized state.
    pub const fn null() -> Self {
        Self {
            raw: 0,
            _marker: PhantomData,
        }
    }

    /// Whether the reference is null.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.raw == 0
    }

    /// The stored byte distance. Zero means null.
    #[inline]
    pub fn raw_offset(&self) -> i32 {
        self.raw
    }

    /// Resolve to a raw pointer; null when the stored offset is zero.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        if self.raw == 0 {
            ptr::null()
        } else {
            (self as *const Self as *const u8).wrapping_offset(self.raw as isize) as *const T
        }
    }

    /// Resolve to a raw mutable pointer; null when the stored offset is zero.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        if self.raw == 0 {
            ptr::null_mut()
        } else {
            (self as *mut Self as *mut u8).wrapping_offset(self.raw as isize) as *mut T
        }
    }

    /// Resolve to a shared reference to the target.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.raw == 0 {
            None
        } else {
            // SAFETY: a non-zero offset is only ever produced by
            // `set`/`assign`, whose contract places the target inside the
            // same live block as this slot, aligned and initialized.
            Some(unsafe { &*self.as_ptr() })
        }
    }

    /// Resolve to an exclusive reference to the target.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.raw == 0 {
            None
        } else {
            // SAFETY: as for `get`; exclusivity follows from `&mut self`
            // because the target belongs to the same block.
            Some(unsafe { &mut *self.as_mut_ptr() })
        }
    }

    /// Null the reference.
    ///
    /// The previously referenced bytes stay occupied in the block's bump
    /// region; there is no reclamation.
    #[inline]
    pub fn clear(&mut self) {
        self.raw = 0;
    }

    /// Point this slot at `target`. A null pointer stores null.
    ///
    /// # Safety
    ///
    /// A non-null `target` must lie within the same block as this slot
    /// and remain valid for as long as the slot may be resolved.
    ///
    /// # Panics
    ///
    /// Panics if a non-null `target` coincides with the slot itself
    /// (offset zero is reserved for null), or lies outside the ±2 GiB
    /// range of a 32-bit offset.
    pub unsafe fn set(&mut self, target: *const T) {
        if target.is_null() {
            self.raw = 0;
            return;
        }
        let delta = (target as *const u8 as isize).wrapping_sub(self as *mut Self as isize);
        assert!(delta != 0, "OffsetRef target coincides with its own slot");
        self.raw = i32::try_from(delta)
            .expect("OffsetRef target outside the 32-bit self-relative range");
    }

    /// Copy by rebasing: resolve `other`, then store the result here.
    ///
    /// The two slots sit at different addresses, so the stored raw
    /// offsets will differ even though both resolve to the same target.
    ///
    /// # Safety
    ///
    /// As for [`OffsetRef::set`]: `other`'s target must be inside the
    /// same block as this slot.
    pub unsafe fn assign(&mut self, other: &OffsetRef<T>) {
        // SAFETY: contract forwarded to `set`.
        unsafe { self.set(other.as_ptr()) }
    }
}

impl<T> fmt::Debug for OffsetRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw == 0 {
            write!(f, "OffsetRef(null)")
        } else {
            write!(f, "OffsetRef({:+})", self.raw)
        }
    }
}
