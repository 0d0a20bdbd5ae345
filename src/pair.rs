//! Two-element tuple value type
//!
//! [`Pair`] is the building block for map entries and multi-value returns.
//! Ordering is lexicographic: first field, then second.

use std::fmt;

/// A 2-tuple value type with named fields.
///
/// # Examples
///
/// ```rust
/// use holdall::Pair;
///
/// let p = Pair::new("width", 640);
/// assert_eq!(p.first, "width");
/// assert_eq!(p.second, 640);
///
/// let flipped = p.swap();
/// assert_eq!(flipped.first, 640);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// The first contained value
    pub first: A,
    /// The second contained value
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Create a pair from two values
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Return a new pair with the fields exchanged
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    /// Borrow both fields as a tuple of references
    #[inline]
    pub fn as_refs(&self) -> (&A, &B) {
        (&self.first, &self.second)
    }

    /// Map the first field, leaving the second in place
    #[inline]
    pub fn map_first<C>(self, f: impl FnOnce(A) -> C) -> Pair<C, B> {
        Pair {
            first: f(self.first),
            second: self.second,
        }
    }

    /// Map the second field, leaving the first in place
    #[inline]
    pub fn map_second<C>(self, f: impl FnOnce(B) -> C) -> Pair<A, C> {
        Pair {
            first: self.first,
            second: f(self.second),
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pair")
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}
