//! Associative merge policies used while folding into maps.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A type with an associative combine operation.
pub trait Semigroup: Sized {
    /// Combines `other` (seen later) into `self` (seen earlier).
    fn combine_in_place(&mut self, other: Self);

    /// Combines `self` (seen earlier) with `other` (seen later).
    fn combine(mut self, other: Self) -> Self {
        self.combine_in_place(other);
        self
    }
}

/// Keeps the earlier of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct First<T>(pub T);

impl<T> First<T> {
    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Semigroup for First<T> {
    fn combine_in_place(&mut self, _other: Self) {}
}

/// Keeps the later of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Last<T>(pub T);

impl<T> Last<T> {
    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Semigroup for Last<T> {
    fn combine_in_place(&mut self, other: Self) {
        *self = other;
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine_in_place(&mut self, other: Self) {
        self.extend(other);
    }
}

impl Semigroup for String {
    fn combine_in_place(&mut self, other: Self) {
        self.push_str(&other);
    }
}

/// A map that merges values for repeated keys with their semigroup.
pub trait SemigroupMap<K, V: Semigroup>: Default {
    /// Inserts `value`, combining it after any value already under `key`.
    fn insert_combine(&mut self, key: K, value: V);
}

impl<K: Ord, V: Semigroup> SemigroupMap<K, V> for BTreeMap<K, V> {
    fn insert_combine(&mut self, key: K, value: V) {
        match self.entry(key) {
            btree_map::Entry::Occupied(mut slot) => slot.get_mut().combine_in_place(value),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

impl<K, V, S> SemigroupMap<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Semigroup,
    S: BuildHasher + Default,
{
    fn insert_combine(&mut self, key: K, value: V) {
        match self.entry(key) {
            hash_map::Entry::Occupied(mut slot) => slot.get_mut().combine_in_place(value),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}
