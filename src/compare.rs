//! Comparison rules that decide which of two items has the higher priority.
use std::cmp::Ordering;
use std::fmt;

/// A total order over items of type `T`.
///
/// Containers never look inside their items; this is the only way they learn how two items
/// relate. Implementations must be a consistent total order, or extraction order is unspecified
/// (though no item will be lost or duplicated).
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order items by their own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Order items by a key projected out of each one, e.g. a task's priority field.
///
/// ```rust
/// # use priority_ordering::*;
/// let by_len = ByKey::new(|s: &&str| s.len());
/// assert!(by_len.compare(&"ab", &"abc").is_lt());
/// ```
#[derive(Clone, Copy, Default)]
pub struct ByKey<F>(F);

impl<F> ByKey<F> {
    pub fn new<T, K>(key: F) -> Self
    where
        F: Fn(&T) -> K,
        K: Ord,
    {
        Self(key)
    }
}

impl<T, K, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByKey")
    }
}

/// Order items with an arbitrary comparison callback.
#[derive(Clone, Copy, Default)]
pub struct FromFn<F>(F);

impl<F> FromFn<F> {
    pub fn new<T>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        Self(compare)
    }
}

impl<T, F> Compare<T> for FromFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn")
    }
}

/// Flip another comparison rule around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
