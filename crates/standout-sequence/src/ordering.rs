//! Ordering types for sequence sorting.
//!
//! Provides [`Dir`] for sort direction and the key comparison used by the
//! `order_by` family.

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two sort keys.
///
/// A key that does not compare equal to itself (a `NaN` float, for one) is
/// unordered: it sorts after every ordered key, and two unordered keys
/// compare `Equal`. This keeps the comparison a total order for floats.
///
/// ```
/// use std::cmp::Ordering;
/// use standout_sequence::compare_keys;
///
/// assert_eq!(compare_keys(&f64::NAN, &1.0), Ordering::Greater);
/// assert_eq!(compare_keys(&1.0, &2.0), Ordering::Less);
/// ```
pub fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => is_unordered(a).cmp(&is_unordered(b)),
    }
}

fn is_unordered<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_none()
}

/// Compares two items by a derived key in the given direction.
pub(crate) fn compare_by_key<T, K, F>(a: &T, b: &T, key: &F, dir: Dir) -> Ordering
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    dir.apply(compare_keys(&key(a), &key(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Greater), Ordering::Greater);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);

        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Greater), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
    }

    #[test]
    fn dir_default_is_asc() {
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn compare_strings() {
        assert_eq!(compare_keys(&"apple", &"banana"), Ordering::Less);
        assert_eq!(compare_keys(&"banana", &"apple"), Ordering::Greater);
        assert_eq!(compare_keys(&"apple", &"apple"), Ordering::Equal);
    }

    #[test]
    fn compare_nan_sorts_after_numbers() {
        assert_eq!(compare_keys(&f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(compare_keys(&1.0, &f64::NAN), Ordering::Less);
        assert_eq!(compare_keys(&f64::NAN, &f64::NAN), Ordering::Equal);
        assert_eq!(
            compare_keys(&f64::NEG_INFINITY, &f64::NAN),
            Ordering::Less
        );
    }

    #[test]
    fn compare_nan_is_transitive() {
        let keys = [1.0, f64::NAN, 2.0];
        for a in &keys {
            for b in &keys {
                for c in &keys {
                    if compare_keys(a, b).is_le() && compare_keys(b, c).is_le() {
                        assert!(compare_keys(a, c).is_le(), "{a} <= {b} <= {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn compare_by_key_direction() {
        let len = |s: &&str| s.len();

        assert_eq!(compare_by_key(&"ab", &"abc", &len, Dir::Asc), Ordering::Less);
        assert_eq!(
            compare_by_key(&"ab", &"abc", &len, Dir::Desc),
            Ordering::Greater
        );
    }
}
