//! Non-empty sequences.

use std::ops::{Deref, Index};

use crate::error::NonEmptyError;

/// The `{ head, tail }` record a [`NonEmptyVec`] is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HeadTail<T> {
    /// The first element.
    pub head: T,
    /// The remaining elements, possibly none.
    pub tail: Vec<T>,
}

/// A vector that always holds at least one element.
///
/// Dereferences to a slice, so the usual read-only slice methods apply.
/// [`head`](Self::head) and [`last`](Self::last) return plain references
/// since they can never be absent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyVec<T> {
    // Invariant: never empty.
    items: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Creates a sequence from a head and a tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        Self { items }
    }

    /// Creates a one-element sequence.
    pub fn singleton(head: T) -> Self {
        Self { items: vec![head] }
    }

    /// Takes ownership of a vector, failing if it is empty.
    pub fn from_vec(items: Vec<T>) -> Result<Self, NonEmptyError> {
        if items.is_empty() {
            return Err(NonEmptyError::Empty { context: "Vec" });
        }
        Ok(Self { items })
    }

    /// Returns the first element.
    pub fn head(&self) -> &T {
        &self.items[0]
    }

    /// Returns every element after the first.
    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    /// Returns the last element.
    pub fn last(&self) -> &T {
        &self.items[self.items.len() - 1]
    }

    /// Returns the number of elements (at least 1).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present so the type reads like other collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the last element, unless it is the only one left.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.len() == 1 {
            None
        } else {
            self.items.pop()
        }
    }

    /// Maps every element, preserving non-emptiness.
    pub fn map<U, F>(self, f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Splits the sequence back into its head and tail.
    pub fn into_head_tail(self) -> HeadTail<T> {
        let mut tail = self.items;
        let head = tail.remove(0);
        HeadTail { head, tail }
    }
}

/// Builds a non-empty sequence from a `{ head, tail }` record.
///
/// ```rust
/// use rowkit::{non_empty_vec, HeadTail};
///
/// let xs = non_empty_vec(HeadTail { head: 1, tail: vec![2, 3] });
/// assert_eq!(xs.as_slice(), &[1, 2, 3]);
/// ```
pub fn non_empty_vec<T>(parts: HeadTail<T>) -> NonEmptyVec<T> {
    NonEmptyVec::new(parts.head, parts.tail)
}

impl<T> From<HeadTail<T>> for NonEmptyVec<T> {
    fn from(parts: HeadTail<T>) -> Self {
        non_empty_vec(parts)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = NonEmptyError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(items: NonEmptyVec<T>) -> Self {
        items.into_vec()
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> Extend<T> for NonEmptyVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_tail_construction() {
        let xs = non_empty_vec(HeadTail {
            head: 1,
            tail: vec![2, 3],
        });
        assert_eq!(xs.as_slice(), &[1, 2, 3]);
        assert_eq!(*xs.head(), 1);
        assert_eq!(xs.tail(), &[2, 3]);
        assert_eq!(*xs.last(), 3);
        assert_eq!(xs.len(), 3);
    }

    #[test]
    fn test_singleton() {
        let xs = NonEmptyVec::singleton("only");
        assert_eq!(xs.head(), xs.last());
        assert!(xs.tail().is_empty());
        assert!(!xs.is_empty());
    }

    #[test]
    fn test_from_empty_vec_fails() {
        let result = NonEmptyVec::<u8>::from_vec(Vec::new());
        assert_eq!(result, Err(NonEmptyError::Empty { context: "Vec" }));

        let ok: NonEmptyVec<u8> = vec![7].try_into().unwrap();
        assert_eq!(*ok.head(), 7);
    }

    #[test]
    fn test_pop_keeps_last_element() {
        let mut xs = NonEmptyVec::new(1, vec![2]);
        assert_eq!(xs.pop(), Some(2));
        assert_eq!(xs.pop(), None);
        assert_eq!(xs.as_slice(), &[1]);

        xs.push(5);
        xs.extend([6, 7]);
        assert_eq!(xs.into_vec(), vec![1, 5, 6, 7]);
    }

    #[test]
    fn test_map_and_split() {
        let xs = NonEmptyVec::new(1, vec![2, 3]).map(|n| n * 10);
        assert_eq!(xs[2], 30);
        assert_eq!(xs.iter().sum::<i32>(), 60);

        let parts = xs.into_head_tail();
        assert_eq!(parts.head, 10);
        assert_eq!(parts.tail, vec![20, 30]);
    }
}
