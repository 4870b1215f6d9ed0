//! Linear-probe key/value lookup over a dense pair vector.

#![allow(unsafe_code)]

use std::fmt;
use std::ops::Index;
use std::slice;

use ballast_block::{BlockAlloc, Relocatable};
use ballast_core::AllocError;

use crate::vector::DenseVector;

/// One key/value entry of an [`AssocMap`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair<K, V> {
    /// Lookup key.
    pub key: K,
    /// Stored value.
    pub value: V,
}

// SAFETY: repr(C) product of relocatable fields; zero-valid elementwise;
// no addresses beyond what the fields themselves guarantee.
unsafe impl<K: Relocatable, V: Relocatable> Relocatable for Pair<K, V> {}

/// An associative map stored as a dense vector of [`Pair`]s.
///
/// Lookup is a linear scan returning the first match; neither key
/// uniqueness nor ordering is enforced — both are the caller's
/// responsibility. Entries are allocated in one step and filled in
/// place.
#[repr(C)]
pub struct AssocMap<K, V> {
    entries: DenseVector<Pair<K, V>>,
}

// SAFETY: transparent wrapper around a relocatable vector.
unsafe impl<K: Relocatable, V: Relocatable> Relocatable for AssocMap<K, V> {}

impl<K: Relocatable, V: Relocatable> AssocMap<K, V> {
    /// Allocate `len` zeroed entries and bind the map to them, returning
    /// the fresh entries for initialization.
    ///
    /// As with [`DenseVector::allocate`]: previously bound entries stay
    /// occupied, and entries carrying self-relative references must be
    /// initialized in place through the returned slice.
    ///
    /// `alloc` must be the capability of the block containing this field.
    pub fn allocate(
        &mut self,
        alloc: &BlockAlloc<'_>,
        len: usize,
    ) -> Result<&mut [Pair<K, V>], AllocError> {
        self.entries.allocate(alloc, len)
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries as a slice.
    pub fn entries(&self) -> &[Pair<K, V>] {
        self.entries.as_slice()
    }

    /// All entries as a mutable slice, for in-place initialization.
    pub fn entries_mut(&mut self) -> &mut [Pair<K, V>] {
        self.entries.as_mut_slice()
    }

    /// Iterate over the entries in storage order.
    pub fn iter(&self) -> slice::Iter<'_, Pair<K, V>> {
        self.entries.iter()
    }

    /// The first entry whose key equals `key`, or `None`.
    pub fn find<Q>(&self, key: &Q) -> Option<&Pair<K, V>>
    where
        Q: ?Sized,
        K: PartialEq<Q>,
    {
        self.entries().iter().find(|pair| pair.key == *key)
    }

    /// The first entry whose key equals `key`, mutably, or `None`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Pair<K, V>>
    where
        Q: ?Sized,
        K: PartialEq<Q>,
    {
        self.entries_mut().iter_mut().find(|pair| pair.key == *key)
    }

    /// The value stored under `key`, or `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: PartialEq<Q>,
    {
        self.find(key).map(|pair| &pair.value)
    }

    /// The value stored under `key`, mutably, or `None`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: PartialEq<Q>,
    {
        self.find_mut(key).map(|pair| &mut pair.value)
    }

    /// Whether any entry's key equals `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: PartialEq<Q>,
    {
        self.find(key).is_some()
    }

    /// Unbind the entries. Their bytes stay occupied in the block.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V, Q> Index<&Q> for AssocMap<K, V>
where
    K: Relocatable + PartialEq<Q>,
    V: Relocatable,
    Q: ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if no entry has this key.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key in AssocMap")
    }
}

impl<K, V> PartialEq for AssocMap<K, V>
where
    K: Relocatable + PartialEq,
    V: Relocatable + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> fmt::Debug for AssocMap<K, V>
where
    K: Relocatable + fmt::Debug,
    V: Relocatable + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

impl<'a, K: Relocatable, V: Relocatable> IntoIterator for &'a AssocMap<K, V> {
    type Item = &'a Pair<K, V>;
    type IntoIter = slice::Iter<'a, Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
