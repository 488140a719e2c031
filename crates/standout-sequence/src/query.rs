//! Query operations on [`QueryableSequence`].
//!
//! Projection, filtering, deduplication, sorting, searching and slicing.
//! Grouping lives in the `grouping` module.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::error::{Result, SequenceError};
use crate::ordering::{compare_by_key, Dir};
use crate::sequence::QueryableSequence;

impl<T> QueryableSequence<T> {
    // ========================================================================
    // Projection
    // ========================================================================

    /// Projects each element into a new sequence, keeping order and length.
    pub fn select<K, F>(&self, project: F) -> QueryableSequence<K>
    where
        F: Fn(&T) -> K,
    {
        self.iter().map(project).collect()
    }

    /// Projects each element into a sequence and flattens the results one level.
    ///
    /// ```
    /// use standout_sequence::QueryableSequence;
    ///
    /// let counts = QueryableSequence::from(vec![1usize, 2]);
    /// let repeated = counts.select_many(|&n| vec![n; n]);
    /// assert_eq!(repeated.to_array(), vec![1, 2, 2]);
    /// ```
    pub fn select_many<K, I, F>(&self, project: F) -> QueryableSequence<K>
    where
        F: Fn(&T) -> I,
        I: IntoIterator<Item = K>,
    {
        self.iter().flat_map(project).collect()
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sorts the sequence in place, ascending by the derived key.
    ///
    /// Returns the receiver for chaining. The sort is stable: elements with
    /// equal keys keep their relative order.
    pub fn order_by<K, F>(&mut self, key: F) -> &mut Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        self.order_by_dir(key, Dir::Asc)
    }

    /// Sorts the sequence in place, descending by the derived key.
    pub fn order_by_descending<K, F>(&mut self, key: F) -> &mut Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        self.order_by_dir(key, Dir::Desc)
    }

    /// Sorts the sequence in place by the derived key in the given direction.
    pub fn order_by_dir<K, F>(&mut self, key: F, dir: Dir) -> &mut Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        trace!(len = self.len(), %dir, "sorting sequence");
        self.items_mut()
            .sort_by(|a, b| compare_by_key(a, b, &key, dir));
        self
    }

    // ========================================================================
    // Searching
    // ========================================================================

    /// Returns the first element.
    ///
    /// Fails with [`SequenceError::NotFound`] if the sequence is empty.
    pub fn first(&self) -> Result<&T> {
        self.first_where(|_| true)
    }

    /// Returns the first element satisfying the predicate.
    ///
    /// Fails with [`SequenceError::NotFound`] if no element matches.
    pub fn first_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.first_or_default_where(predicate).ok_or_else(|| {
            debug!(len = self.len(), "first: no element matched");
            SequenceError::NotFound
        })
    }

    /// Returns the first element, or `None` if the sequence is empty.
    pub fn first_or_default(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Returns the first element satisfying the predicate, or `None`.
    pub fn first_or_default_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().find(|&item| predicate(item))
    }

    /// Returns the last element.
    ///
    /// Fails with [`SequenceError::NotFound`] if the sequence is empty.
    pub fn last(&self) -> Result<&T> {
        self.last_where(|_| true)
    }

    /// Returns the last element satisfying the predicate.
    pub fn last_where<P>(&self, predicate: P) -> Result<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.last_or_default_where(predicate).ok_or_else(|| {
            debug!(len = self.len(), "last: no element matched");
            SequenceError::NotFound
        })
    }

    /// Returns the last element, or `None` if the sequence is empty.
    pub fn last_or_default(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Returns the last element satisfying the predicate, or `None`.
    pub fn last_or_default_where<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().rev().find(|&item| predicate(item))
    }

    /// Returns the index of the first element satisfying the predicate.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&T) -> bool,
    {
        self.iter().position(|item| predicate(item))
    }

    /// Returns `true` if the sequence holds any element.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if at least one element satisfies the predicate.
    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    /// Returns `true` if every element satisfies the predicate.
    ///
    /// An empty sequence satisfies any predicate.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.iter().all(|item| predicate(item))
    }

    // ========================================================================
    // Counting
    // ========================================================================

    /// Returns the number of elements currently held.
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Counts the elements satisfying the predicate.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.iter().filter(|&item| predicate(item)).count()
    }
}

impl<T: Clone> QueryableSequence<T> {
    // ========================================================================
    // Filtering
    // ========================================================================

    /// Returns the elements satisfying the predicate, in their original order.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool,
    {
        self.iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect()
    }

    /// Returns the first occurrence of each distinct value, in first-occurrence order.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let unique: IndexSet<&T> = self.iter().collect();
        unique.into_iter().cloned().collect()
    }

    /// Deduplicates by a derived key.
    ///
    /// For each key the LAST element carrying it is kept, placed where the
    /// key was first seen.
    ///
    /// ```
    /// use standout_sequence::QueryableSequence;
    ///
    /// let pairs = QueryableSequence::from(vec![("a", 1), ("b", 2), ("a", 3)]);
    /// let unique = pairs.distinct_by(|(name, _)| *name);
    /// assert_eq!(unique.to_array(), vec![("a", 3), ("b", 2)]);
    /// ```
    pub fn distinct_by<K, F>(&self, key: F) -> Self
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let mut latest: IndexMap<K, &T> = IndexMap::with_capacity(self.len());
        for item in self {
            latest.insert(key(item), item);
        }
        latest.into_values().cloned().collect()
    }

    // ========================================================================
    // Sorting (copying)
    // ========================================================================

    /// Returns a sorted copy, leaving the receiver untouched.
    pub fn sorted_by<K, F>(&self, key: F, dir: Dir) -> Self
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        let mut sorted = self.clone();
        sorted.order_by_dir(key, dir);
        sorted
    }

    // ========================================================================
    // Slicing
    // ========================================================================

    /// Returns the first `min(n, len)` elements.
    pub fn take(&self, n: usize) -> Self {
        self.iter().take(n).cloned().collect()
    }

    /// Returns the elements remaining after skipping `min(n, len)` from the start.
    pub fn skip(&self, n: usize) -> Self {
        self.iter().skip(n).cloned().collect()
    }

    /// Skips `offset` elements, then takes at most `limit`.
    pub fn page(&self, offset: usize, limit: usize) -> Self {
        self.iter().skip(offset).take(limit).cloned().collect()
    }

    /// Returns a snapshot copy of the elements as a plain vector.
    pub fn to_array(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}
