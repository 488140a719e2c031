//! Grouping of sequence elements by a derived key.

use std::hash::Hash;

use indexmap::IndexMap;
use tracing::trace;

use crate::sequence::QueryableSequence;

/// Elements grouped by key, in first-occurrence order of each key.
///
/// Each group keeps the relative order its elements had in the source
/// sequence.
pub type Grouping<K, T> = IndexMap<K, QueryableSequence<T>>;

impl<T: Clone> QueryableSequence<T> {
    /// Groups elements by a derived key.
    ///
    /// Keys iterate in the order they were first produced.
    ///
    /// ```
    /// use standout_sequence::QueryableSequence;
    ///
    /// let words = QueryableSequence::from(vec!["apple", "bob", "avocado"]);
    /// let groups = words.group_by(|w| w.len() > 3);
    ///
    /// assert_eq!(groups[&true].to_array(), vec!["apple", "avocado"]);
    /// assert_eq!(groups[&false].to_array(), vec!["bob"]);
    /// ```
    pub fn group_by<K, F>(&self, key: F) -> Grouping<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut groups: Grouping<K, T> = IndexMap::new();
        for item in self {
            groups.entry(key(item)).or_default().add(item.clone());
        }
        trace!(len = self.len(), groups = groups.len(), "grouped sequence");
        groups
    }
}
