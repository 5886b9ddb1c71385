//! Priority-ordered containers.
//!
//! See documentation for [`PriorityOrdering`].
//!
//! Two implementations are provided:
//!
//! -   [`heap::Queue`], an indexed binary heap with logarithmic insertion and extraction. This is
//!     the one you want.
//! -   [`naive::Queue`], a sorted vector with linear insertion. It is kept around as a reference
//!     model to test and benchmark the heap against.
//!
//! ## Usage
//!
//! ```rust
//! # use priority_ordering::*;
//! #[derive(Debug)]
//! struct Task {
//!     name: &'static str,
//!     priority: u32,
//! }
//!
//! let mut queue = heap::Queue::min_first(ByKey::new(|t: &Task| t.priority));
//! queue.insert(Task { name: "eating", priority: 3 });
//! queue.insert(Task { name: "wokeup", priority: 1 });
//! queue.insert(Task { name: "brushing", priority: 2 });
//!
//! assert_eq!(queue.extract().unwrap().name, "wokeup");
//! assert_eq!(queue.peek().unwrap().name, "brushing");
//! assert_eq!(queue.len(), 2);
//! ```
mod compare;
mod config;
mod error;
pub mod heap;
mod internal;
pub mod naive;

pub use compare::{ByKey, Compare, FromFn, Natural, Reversed};
pub use config::{Config, Direction, ParseConfigError, TieBreak};
pub use error::{Error, Result};
pub use internal::Handle;

/// A container that hands back its items in priority order.
///
/// Items are opaque to the container; they are only ever compared through the [`Compare`] rule
/// `C` supplied at construction. The [`Config`] decides whether the smallest or largest item
/// comes out first ([`Direction`]), and what happens when two items compare equal
/// ([`TieBreak`]).
///
/// Every inserted item is handed back exactly once, by [`extract()`](Self::extract),
/// [`remove()`](Self::remove), or [`clear()`](Self::clear) (which drops it), unless the
/// container itself is dropped first.
pub trait PriorityOrdering<T, C: Compare<T>>: Sized {
    /// Construct an empty container.
    fn with_config(compare: C, config: Config) -> Self;

    /// Construct an empty, ascending, FIFO tie-breaking container.
    fn new(compare: C) -> Self {
        Self::with_config(compare, Config::default())
    }

    /// Add an item; returns a handle that can later be used to [`remove()`](Self::remove) it.
    fn insert(&mut self, item: T) -> Handle;

    /// Remove and return the item that comes first in priority order.
    ///
    /// This is "extract-min" for [`Direction::Ascending`] and "extract-max" for
    /// [`Direction::Descending`]. Fails with [`Error::EmptyContainer`] if there is nothing to
    /// extract.
    fn extract(&mut self) -> Result<T>;

    /// The item that the next [`extract()`](Self::extract) would return, without removing it.
    fn peek(&self) -> Result<&T>;

    /// Remove a specific item, wherever it is in priority order.
    ///
    /// Returns `None` if that item has already left the container.
    fn remove(&mut self, handle: Handle) -> Option<T>;

    /// Whether the item named by `handle` is still in the container.
    fn contains(&self, handle: Handle) -> bool;

    /// Number of items currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every item currently held.
    fn clear(&mut self);

    /// The configuration this container was built with.
    fn config(&self) -> &Config;
}
