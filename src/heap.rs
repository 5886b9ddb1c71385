//! Binary-heap priority queue.
//!
//! See documentation for [`Queue`].
use crate::internal::Arena;
pub use crate::PriorityOrdering;
use crate::{Compare, Config, Error, Handle, Natural, Result};
use log::{debug, trace};
use std::iter::FusedIterator;

/// A priority queue backed by an indexed binary heap.
///
/// Amongst `n` items, [`insert()`], [`extract()`] and [`remove()`] take `log(n)` time, while
/// [`peek()`] and [`len()`] take constant time.
///
/// ## Usage
///
/// ```rust
/// # use priority_ordering::*;
/// # use priority_ordering::heap::Queue;
/// let mut q = Queue::max_first(Natural);
/// q.insert(3);
/// let two = q.insert(2);
/// q.insert(5);
///
/// assert_eq!(q.remove(two), Some(2));
/// assert_eq!(q.extract(), Ok(5));
/// assert_eq!(q.extract(), Ok(3));
/// assert_eq!(q.extract(), Err(Error::EmptyContainer));
/// ```
///
/// ## Representation
///
/// Items live in a slab-allocated arena; the heap itself is a vector of arena keys. Each arena
/// entry remembers its index in the heap, which is what lets [`remove()`] find an item from its
/// [`Handle`] and sift it out from the middle.
///
/// [`insert()`]: PriorityOrdering::insert
/// [`extract()`]: PriorityOrdering::extract
/// [`remove()`]: PriorityOrdering::remove
/// [`peek()`]: PriorityOrdering::peek
/// [`len()`]: PriorityOrdering::len
#[derive(Debug)]
pub struct Queue<T, C = Natural> {
    arena: Arena<T>,

    /// Arena keys, in heap order.
    heap: Vec<usize>,

    compare: C,
    config: Config,
}

impl<T, C: Compare<T>> Queue<T, C> {
    /// Construct an empty queue that extracts its smallest item first.
    pub fn min_first(compare: C) -> Self {
        Self::with_config(compare, Config::default().ascending())
    }

    /// Construct an empty queue that extracts its largest item first.
    pub fn max_first(compare: C) -> Self {
        Self::with_config(compare, Config::default().descending())
    }

    /// Iterate over held items, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.arena.iter()
    }

    /// Remove all items, yielding them in priority order.
    ///
    /// Items not consumed before the iterator is dropped are dropped along with it.
    pub fn drain(&mut self) -> Drain<'_, T, C> {
        Drain { queue: self }
    }

    /// Consume the queue, collecting its items in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain().collect()
    }

    /// Whether the item at heap index `i` should come out before the item at `j`.
    fn precedes(&self, i: usize, j: usize) -> bool {
        self.arena
            .rank(&self.compare, &self.config, self.heap[i], self.heap[j])
            .is_lt()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.arena.set_pos(self.heap[i], i);
        self.arena.set_pos(self.heap[j], j);
    }

    /// Move the item at `pos` towards the root until its parent precedes it; returns where it
    /// ended up.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Move the item at `pos` towards the leaves until it precedes both children.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }

    /// Take the item at heap index `pos` out of the queue, restoring the heap property.
    fn remove_at(&mut self, pos: usize) -> T {
        let key = self.heap.swap_remove(pos);
        let item = self.arena.remove(key);

        // The former last element now sits at `pos`, and may belong above or below it.
        if pos < self.heap.len() {
            self.arena.set_pos(self.heap[pos], pos);
            let pos = self.sift_up(pos);
            self.sift_down(pos);
        }
        item
    }
}

impl<T, C: Compare<T>> PriorityOrdering<T, C> for Queue<T, C> {
    fn with_config(compare: C, config: Config) -> Self {
        debug!(
            "new heap queue: direction={} tie_break={} capacity={}",
            config.direction, config.tie_break, config.capacity
        );
        Self {
            arena: Arena::with_capacity(config.capacity),
            heap: Vec::with_capacity(config.capacity),
            compare,
            config,
        }
    }

    fn insert(&mut self, item: T) -> Handle {
        let pos = self.heap.len();
        let handle = self.arena.insert(item, pos);
        self.heap.push(handle.key());
        self.sift_up(pos);
        trace!("insert {:?}: len={}", handle, self.heap.len());
        handle
    }

    fn extract(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            debug!("extract from empty heap queue");
            return Err(Error::EmptyContainer);
        }
        let item = self.remove_at(0);
        trace!("extract: len={}", self.heap.len());
        Ok(item)
    }

    fn peek(&self) -> Result<&T> {
        match self.heap.first() {
            Some(&key) => Ok(&self.arena.get(key).item),
            None => {
                debug!("peek at empty heap queue");
                Err(Error::EmptyContainer)
            }
        }
    }

    fn remove(&mut self, handle: Handle) -> Option<T> {
        self.arena.lookup(handle)?;
        let item = self.remove_at(self.arena.pos(handle.key()));
        trace!("remove {:?}: len={}", handle, self.heap.len());
        Some(item)
    }

    fn contains(&self, handle: Handle) -> bool {
        self.arena.lookup(handle).is_some()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        debug!("clear heap queue: dropping {} items", self.heap.len());
        self.heap.clear();
        self.arena.clear();
    }

    fn config(&self) -> &Config {
        &self.config
    }
}

impl<T, C: Compare<T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for Queue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Queue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::default();
        q.extend(iter);
        q
    }
}

impl<T, C: Compare<T> + Default, const N: usize> From<[T; N]> for Queue<T, C> {
    fn from(arr: [T; N]) -> Self {
        let mut q = Self::with_config(C::default(), Config::default().capacity(N));
        q.extend(arr);
        q
    }
}

impl<T, C: Compare<T>> IntoIterator for Queue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T, C>;

    /// Consume the queue, yielding its items in priority order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Draining iterator over a [`Queue`], in priority order. See [`Queue::drain()`].
#[derive(Debug)]
pub struct Drain<'a, T, C: Compare<T>> {
    queue: &'a mut Queue<T, C>,
}

impl<T, C: Compare<T>> Iterator for Drain<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for Drain<'_, T, C> {}
impl<T, C: Compare<T>> FusedIterator for Drain<'_, T, C> {}

impl<T, C: Compare<T>> Drop for Drain<'_, T, C> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}

/// Owning iterator over a [`Queue`], in priority order.
#[derive(Debug)]
pub struct IntoIter<T, C> {
    queue: Queue<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIter<T, C> {}
impl<T, C: Compare<T>> FusedIterator for IntoIter<T, C> {}
