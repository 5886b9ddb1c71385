//! Internal storage and ranking of items, shared by all container implementations.

use crate::{Compare, Config, Direction, TieBreak};
use slab::Slab;
use std::cmp::Ordering;

/// Names one item inserted into a container.
///
/// Handles are never reused for a different item over the lifetime of a container, so holding on
/// to a handle after its item has left is harmless: [`contains()`] just answers `false`.
///
/// [`contains()`]: crate::PriorityOrdering::contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    /// Slot in the arena; may be recycled once the item is gone.
    key: usize,
    /// Insertion sequence number; never recycled.
    seq: u64,
}

impl Handle {
    pub(crate) fn key(&self) -> usize {
        self.key
    }
}

/// An item, plus the bookkeeping the containers need to find and order it.
#[derive(Debug)]
pub(crate) struct Entry<T> {
    pub(crate) item: T,

    /// Insertion sequence number; used for FIFO tie-breaking and to detect stale handles.
    seq: u64,

    /// Index of this entry in the container's ordering structure.
    pos: usize,
}

/// Store of items held by a container, indexed by [`Handle`].
#[derive(Debug)]
pub(crate) struct Arena<T> {
    entries: Slab<Entry<T>>,

    /// Sequence number handed to the next inserted item.
    next_seq: u64,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Slab::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Store a new item at ordering position `pos`.
    pub(crate) fn insert(&mut self, item: T, pos: usize) -> Handle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let key = self.entries.insert(Entry { item, seq, pos });
        Handle { key, seq }
    }

    /// Look up the entry named by a handle, if it is still live.
    pub(crate) fn lookup(&self, handle: Handle) -> Option<&Entry<T>> {
        self.entries
            .get(handle.key)
            .filter(|entry| entry.seq == handle.seq)
    }

    /// Retrieve an entry by key.
    ///
    /// Keys held in a container's ordering structure always refer to live entries.
    pub(crate) fn get(&self, key: usize) -> &Entry<T> {
        &self.entries[key]
    }

    pub(crate) fn pos(&self, key: usize) -> usize {
        self.entries[key].pos
    }

    pub(crate) fn set_pos(&mut self, key: usize, pos: usize) {
        self.entries[key].pos = pos;
    }

    pub(crate) fn remove(&mut self, key: usize) -> T {
        self.entries.remove(key).item
    }

    pub(crate) fn clear(&mut self) {
        // Sequence numbers keep counting so that old handles stay stale.
        self.entries.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, entry)| &entry.item)
    }

    /// Compare two entries in extraction order: `Less` means `a` comes out before `b`.
    pub(crate) fn rank<C: Compare<T>>(
        &self,
        compare: &C,
        config: &Config,
        a: usize,
        b: usize,
    ) -> Ordering {
        let (a, b) = (self.get(a), self.get(b));
        let ord = match config.direction {
            Direction::Ascending => compare.compare(&a.item, &b.item),
            Direction::Descending => compare.compare(&b.item, &a.item),
        };
        match (ord, config.tie_break) {
            (Ordering::Equal, TieBreak::Fifo) => a.seq.cmp(&b.seq),
            (ord, _) => ord,
        }
    }
}
