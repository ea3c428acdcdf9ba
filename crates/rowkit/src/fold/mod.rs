//! Folding sequences into keyed maps.
//!
//! Each element is mapped to zero or more `(key, value)` pairs and the pairs
//! are merged into a map. [`fold_map`] merges repeated keys with the value's
//! [`Semigroup`]; the `_first` helpers wrap values in [`First`] while folding,
//! so for a repeated key the value met first in traversal order wins, then
//! strip the wrapper from the result.

pub mod semigroup;

use std::collections::BTreeMap;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

pub use semigroup::{First, Last, Semigroup, SemigroupMap};

/// Folds `items` into a map, merging repeated keys with their semigroup.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use rowkit::fold_map;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial: BTreeMap<char, Vec<&str>> =
///     fold_map(words, |w| w.chars().next().map(|c| (c, vec![w])));
///
/// assert_eq!(by_initial[&'a'], vec!["apple", "avocado"]);
/// ```
pub fn fold_map<M, I, F, E, K, V>(items: I, mut f: F) -> M
where
    I: IntoIterator,
    F: FnMut(I::Item) -> E,
    E: IntoIterator<Item = (K, V)>,
    V: Semigroup,
    M: SemigroupMap<K, V>,
{
    let mut map = M::default();
    for item in items {
        for (key, value) in f(item) {
            map.insert_combine(key, value);
        }
    }
    map
}

/// Folds `items` into an ordered map where the first value seen for a key wins.
///
/// ```rust
/// use rowkit::fold_map_first;
///
/// let map = fold_map_first([("k", "a"), ("k", "b")], |pair| [pair]);
/// assert_eq!(map["k"], "a");
/// ```
pub fn fold_map_first<I, F, E, K, V>(items: I, f: F) -> BTreeMap<K, V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> E,
    E: IntoIterator<Item = (K, V)>,
    K: Ord,
{
    let wrapped: BTreeMap<K, First<V>> = fold_keep_first(items, f);
    wrapped.into_iter().map(|(key, First(value))| (key, value)).collect()
}

/// Like [`fold_map_first`], with `f` also receiving each element's index.
pub fn fold_map_with_index_first<I, F, E, K, V>(items: I, mut f: F) -> BTreeMap<K, V>
where
    I: IntoIterator,
    F: FnMut(usize, I::Item) -> E,
    E: IntoIterator<Item = (K, V)>,
    K: Ord,
{
    fold_map_first(items.into_iter().enumerate(), |(index, item)| f(index, item))
}

/// Like [`fold_map_first`], into a hash map for when key order is irrelevant.
pub fn fold_map_first_unordered<I, F, E, K, V>(items: I, f: F) -> FxHashMap<K, V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> E,
    E: IntoIterator<Item = (K, V)>,
    K: Hash + Eq,
{
    let wrapped: FxHashMap<K, First<V>> = fold_keep_first(items, f);
    wrapped.into_iter().map(|(key, First(value))| (key, value)).collect()
}

fn fold_keep_first<M, I, F, E, K, V>(items: I, mut f: F) -> M
where
    I: IntoIterator,
    F: FnMut(I::Item) -> E,
    E: IntoIterator<Item = (K, V)>,
    M: SemigroupMap<K, First<V>> + MapLen,
{
    let mut map = M::default();
    let mut seen = 0usize;
    for item in items {
        for (key, value) in f(item) {
            seen += 1;
            map.insert_combine(key, First(value));
        }
    }
    let entries = map.map_len();
    trace!(entries, discarded = seen - entries, "keep-first fold complete");
    map
}

/// Entry count, for fold diagnostics.
trait MapLen {
    fn map_len(&self) -> usize;
}

impl<K, V> MapLen for BTreeMap<K, V> {
    fn map_len(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> MapLen for std::collections::HashMap<K, V, S> {
    fn map_len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_first_wins() {
        let map = fold_map_first(vec![("k", "a"), ("k", "b")], Some);
        assert_eq!(map.len(), 1);
        assert_eq!(map["k"], "a");
    }

    #[test]
    fn test_last_wins_with_last_semigroup() {
        let map: BTreeMap<&str, Last<&str>> =
            fold_map(vec![("k", "a"), ("k", "b")], |(k, v)| Some((k, Last(v))));
        assert_eq!(map["k"], Last("b"));
    }

    #[test]
    fn test_multiple_pairs_per_element() {
        // Every word contributes one entry per letter; the first word with a
        // letter claims it.
        let map = fold_map_first(["tab", "bat", "cat"], |word| {
            word.chars().map(move |c| (c, word)).collect::<Vec<_>>()
        });
        assert_eq!(map[&'t'], "tab");
        assert_eq!(map[&'b'], "tab");
        assert_eq!(map[&'c'], "cat");
        assert_eq!(map.keys().collect::<String>(), "abct");
    }

    #[test]
    fn test_with_index() {
        let map = fold_map_with_index_first(["x", "y", "x"], |index, key| [(key, index)]);
        assert_eq!(map["x"], 0);
        assert_eq!(map["y"], 1);
    }

    #[test]
    fn test_empty_input() {
        let map = fold_map_first(Vec::<(u8, u8)>::new(), Some);
        assert!(map.is_empty());
    }

    #[test]
    fn test_unordered_first_wins() {
        let map = fold_map_first_unordered([(1, "one"), (2, "two"), (1, "uno")], Some);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "one");
        assert_eq!(map[&2], "two");
    }

    proptest! {
        #[test]
        fn prop_first_occurrence_wins(pairs in proptest::collection::vec((0u8..16, any::<u32>()), 0..64)) {
            let mut expected: HashMap<u8, u32> = HashMap::new();
            for (k, v) in &pairs {
                expected.entry(*k).or_insert(*v);
            }

            let ordered = fold_map_first(pairs.clone(), Some);
            let unordered = fold_map_first_unordered(pairs, Some);

            prop_assert_eq!(ordered.len(), expected.len());
            prop_assert_eq!(unordered.len(), expected.len());
            for (k, v) in &expected {
                prop_assert_eq!(ordered.get(k), Some(v));
                prop_assert_eq!(unordered.get(k), Some(v));
            }
        }
    }
}
