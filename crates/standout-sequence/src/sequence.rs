//! The [`QueryableSequence`] container.
//!
//! A thin wrapper around `Vec<T>` that keeps the basic container surface
//! (indexing, iteration, extension) and carries the query methods defined in
//! the `query` and `grouping` modules.

use std::ops::{Index, IndexMut};

/// An ordered, mutable, indexable sequence that supports chainable queries.
///
/// Elements keep insertion order until a sort reorders them. Only
/// [`add`](Self::add), [`add_range`](Self::add_range) and the `order_by`
/// family mutate the receiver; every other query returns a new, independent
/// sequence.
///
/// # Example
///
/// ```
/// use standout_sequence::QueryableSequence;
///
/// let mut numbers = QueryableSequence::new();
/// numbers.add(3);
/// numbers.add_range([1, 2]);
///
/// let evens = numbers.filter(|n| n % 2 == 0);
/// assert_eq!(evens.to_array(), vec![2]);
/// assert_eq!(numbers.count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct QueryableSequence<T> {
    items: Vec<T>,
}

/// Copies a slice into a new [`QueryableSequence`].
///
/// The source is left untouched. Use [`QueryableSequence::from`] with a
/// `Vec<T>` to take ownership without copying.
///
/// ```
/// use standout_sequence::wrap;
///
/// let source = vec!["a", "b"];
/// let seq = wrap(&source);
/// assert_eq!(seq.count(), 2);
/// assert_eq!(source.len(), 2);
/// ```
pub fn wrap<T: Clone>(items: &[T]) -> QueryableSequence<T> {
    QueryableSequence::from(items.to_vec())
}

impl<T> QueryableSequence<T> {
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        QueryableSequence { items: Vec::new() }
    }

    /// Creates a new empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        QueryableSequence {
            items: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Appends an item at the end.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends all items, in order, at the end.
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the elements in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Borrows the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence, returning the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }
}

impl<T> Default for QueryableSequence<T> {
    fn default() -> Self {
        QueryableSequence::new()
    }
}

impl<T> From<Vec<T>> for QueryableSequence<T> {
    fn from(items: Vec<T>) -> Self {
        QueryableSequence { items }
    }
}

impl<T: Clone> From<&[T]> for QueryableSequence<T> {
    fn from(items: &[T]) -> Self {
        wrap(items)
    }
}

impl<T, const N: usize> From<[T; N]> for QueryableSequence<T> {
    fn from(items: [T; N]) -> Self {
        QueryableSequence {
            items: Vec::from(items),
        }
    }
}

impl<T> From<QueryableSequence<T>> for Vec<T> {
    fn from(seq: QueryableSequence<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for QueryableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        QueryableSequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for QueryableSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_range(iter);
    }
}

impl<T> IntoIterator for QueryableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a QueryableSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut QueryableSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> AsRef<[T]> for QueryableSequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for QueryableSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for QueryableSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}
