//! Sorted-vector priority queue.
//!
//! Insertion takes linear time, so this is only useful as a reference to check [`heap::Queue`]
//! against, and as a baseline for benchmarks.
//!
//! [`heap::Queue`]: crate::heap::Queue
pub use crate::PriorityOrdering;
use crate::internal::Arena;
use crate::{Compare, Config, Error, Handle, Natural, Result};
use log::{debug, trace};
use std::cmp::Ordering;

/// A priority queue that keeps its items fully sorted at all times.
///
/// ```rust
/// # use priority_ordering::*;
/// let mut q = naive::Queue::new(Natural);
/// q.insert(2);
/// q.insert(1);
/// assert_eq!(q.extract(), Ok(1));
/// ```
#[derive(Debug)]
pub struct Queue<T, C = Natural> {
    arena: Arena<T>,

    /// Arena keys, sorted so that the next item to extract is last.
    order: Vec<usize>,

    compare: C,
    config: Config,
}

impl<T, C: Compare<T>> Queue<T, C> {
    fn rank(&self, a: usize, b: usize) -> Ordering {
        self.arena.rank(&self.compare, &self.config, a, b)
    }

    /// Rewrite recorded positions from `from` onwards, after `order` has shifted.
    fn reindex(&mut self, from: usize) {
        for pos in from..self.order.len() {
            self.arena.set_pos(self.order[pos], pos);
        }
    }
}

impl<T, C: Compare<T>> PriorityOrdering<T, C> for Queue<T, C> {
    fn with_config(compare: C, config: Config) -> Self {
        debug!(
            "new naive queue: direction={} tie_break={} capacity={}",
            config.direction, config.tie_break, config.capacity
        );
        Self {
            arena: Arena::with_capacity(config.capacity),
            order: Vec::with_capacity(config.capacity),
            compare,
            config,
        }
    }

    fn insert(&mut self, item: T) -> Handle {
        let handle = self.arena.insert(item, 0);
        let key = handle.key();
        // Everything that comes out strictly later stays in front.
        let pos = self
            .order
            .partition_point(|&other| self.rank(other, key) == Ordering::Greater);
        self.order.insert(pos, key);
        self.reindex(pos);
        trace!("insert {:?}: len={}", handle, self.order.len());
        handle
    }

    fn extract(&mut self) -> Result<T> {
        match self.order.pop() {
            Some(key) => {
                trace!("extract: len={}", self.order.len());
                Ok(self.arena.remove(key))
            }
            None => {
                debug!("extract from empty naive queue");
                Err(Error::EmptyContainer)
            }
        }
    }

    fn peek(&self) -> Result<&T> {
        match self.order.last() {
            Some(&key) => Ok(&self.arena.get(key).item),
            None => {
                debug!("peek at empty naive queue");
                Err(Error::EmptyContainer)
            }
        }
    }

    fn remove(&mut self, handle: Handle) -> Option<T> {
        self.arena.lookup(handle)?;
        let pos = self.arena.pos(handle.key());
        self.order.remove(pos);
        self.reindex(pos);
        trace!("remove {:?}: len={}", handle, self.order.len());
        Some(self.arena.remove(handle.key()))
    }

    fn contains(&self, handle: Handle) -> bool {
        self.arena.lookup(handle).is_some()
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn clear(&mut self) {
        debug!("clear naive queue: dropping {} items", self.order.len());
        self.order.clear();
        self.arena.clear();
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
