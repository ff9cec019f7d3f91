//! Three-way comparators used to order keys.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: `compare(a, b)` must return the reverse of
/// `compare(b, a)`, and the relation must be transitive. Collections that are combined with set
/// operations must use equivalent comparators.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so closures and function pointers can be used
/// directly.
///
/// # Examples
///
/// ```
/// use red_black_collections::compare::{Compare, Natural};
/// use std::cmp::Ordering;
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let reverse = |a: &u32, b: &u32| b.cmp(a);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Comparator that orders values by their `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Case-insensitive comparator for strings. Characters are compared after Unicode lowercasing.
///
/// # Examples
///
/// ```
/// use red_black_collections::compare::{CaseInsensitive, Compare};
/// use std::cmp::Ordering;
///
/// assert_eq!(CaseInsensitive.compare("Spam", "sPAM"), Ordering::Equal);
/// assert_eq!(CaseInsensitive.compare("apple", "Banana"), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CaseInsensitive;

impl Compare<str> for CaseInsensitive {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        let left_chars = left.chars().flat_map(char::to_lowercase);
        let right_chars = right.chars().flat_map(char::to_lowercase);
        left_chars.cmp(right_chars)
    }
}

impl Compare<String> for CaseInsensitive {
    fn compare(&self, left: &String, right: &String) -> Ordering {
        Compare::<str>::compare(self, left, right)
    }
}
