//! Sequence - Queryable ordered collections.
//!
//! Sequence wraps a `Vec<T>` in a [`QueryableSequence`] that exposes
//! declarative, chainable queries over its elements:
//!
//! - Projection: [`select`](QueryableSequence::select),
//!   [`select_many`](QueryableSequence::select_many)
//! - Filtering and searching: [`filter`](QueryableSequence::filter),
//!   [`first`](QueryableSequence::first), [`any`](QueryableSequence::any)
//! - Grouping and deduplication: [`group_by`](QueryableSequence::group_by),
//!   [`distinct`](QueryableSequence::distinct),
//!   [`distinct_by`](QueryableSequence::distinct_by)
//! - Sorting by derived keys, ascending or descending
//! - Slicing with [`take`](QueryableSequence::take) and
//!   [`skip`](QueryableSequence::skip)
//!
//! # Quick Start
//!
//! ```rust
//! use standout_sequence::{wrap, SequenceError};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Task {
//!     name: String,
//!     priority: i32,
//!     archived: bool,
//! }
//!
//! let tasks = vec![
//!     Task { name: "Write docs".into(), priority: 3, archived: false },
//!     Task { name: "Fix bug".into(), priority: 5, archived: false },
//!     Task { name: "Old task".into(), priority: 1, archived: true },
//! ];
//!
//! let mut active = wrap(&tasks).filter(|t| !t.archived);
//! active.order_by_descending(|t| t.priority);
//!
//! let names = active.select(|t| t.name.clone());
//! assert_eq!(names.to_array(), vec!["Fix bug", "Write docs"]);
//!
//! assert_eq!(active.first_where(|t| t.priority > 10), Err(SequenceError::NotFound));
//! assert!(active.first_or_default_where(|t| t.priority > 10).is_none());
//! ```
//!
//! # Mutation
//!
//! Only [`add`](QueryableSequence::add), [`add_range`](QueryableSequence::add_range)
//! and the `order_by` family change the receiver. Every other query returns a
//! new, independent sequence; element-copying queries require `T: Clone`.
//!
//! # Keys
//!
//! | Query | Key bound |
//! |-------|-----------|
//! | `group_by`, `distinct_by` | `Eq + Hash` |
//! | `distinct` | element is `Eq + Hash` |
//! | `order_by`, `order_by_descending` | `PartialOrd` |
//!
//! Sorting is stable. A key that is not equal to itself (`NaN`) sorts after
//! every other key when ascending, and before them when descending.
//!
//! # Features
//!
//! - `serde`: serializes a [`QueryableSequence`] as a plain sequence and
//!   [`Dir`] as `"asc"` / `"desc"`.

mod error;
mod grouping;
mod ordering;
mod query;
mod sequence;

// Re-export public API
pub use error::{Result, SequenceError};
pub use grouping::Grouping;
pub use ordering::{compare_keys, Dir};
pub use sequence::{wrap, QueryableSequence};
