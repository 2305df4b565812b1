use crossbeam_queue::{ArrayQueue, SegQueue};
use std::fmt;

/// A concurrency-safe store of interchangeable idle items.
///
/// This is the free list every pool in this crate is built on. An
/// implementation hands back any idle item it holds, or fabricates one with
/// the supplied factory when it has none. It may discard released items at
/// will; callers never observe which item they get back.
pub trait Cache<T> {
    /// Takes an idle item out of the cache, or runs `factory` when the cache
    /// is empty.
    fn acquire<F: FnOnce() -> T>(&self, factory: F) -> T;

    /// Makes `item` eligible for a future [`Cache::acquire`].
    fn release(&self, item: T);

    /// Number of idle items currently held. Advisory only under concurrency.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no idle items.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An unbounded lock-free free list.
///
/// Every released item is kept until it is acquired again.
pub struct FreeList<T> {
    storage: SegQueue<T>,
}

impl<T> FreeList<T> {
    /// Creates an empty free list.
    pub const fn new() -> Self {
        FreeList {
            storage: SegQueue::new(),
        }
    }
}

impl<T> Default for FreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FreeList")
            .field("len", &self.storage.len())
            .finish()
    }
}

impl<T> Cache<T> for FreeList<T> {
    #[inline]
    fn acquire<F: FnOnce() -> T>(&self, factory: F) -> T {
        self.storage.pop().unwrap_or_else(factory)
    }

    #[inline]
    fn release(&self, item: T) {
        self.storage.push(item);
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }
}

/// A lock-free free list with a fixed number of slots.
///
/// Releasing an item into a full list drops the item instead of storing it.
pub struct BoundedFreeList<T> {
    storage: ArrayQueue<T>,
}

impl<T> BoundedFreeList<T> {
    /// Creates an empty free list that keeps at most `slots` idle items.
    ///
    /// A `slots` value of zero is treated as one.
    pub fn new(slots: usize) -> Self {
        BoundedFreeList {
            storage: ArrayQueue::new(slots.max(1)),
        }
    }

    /// Maximum number of idle items this list keeps.
    pub fn slots(&self) -> usize {
        self.storage.capacity()
    }
}

impl<T> fmt::Debug for BoundedFreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedFreeList")
            .field("len", &self.storage.len())
            .field("slots", &self.storage.capacity())
            .finish()
    }
}

impl<T> Cache<T> for BoundedFreeList<T> {
    #[inline]
    fn acquire<F: FnOnce() -> T>(&self, factory: F) -> T {
        self.storage.pop().unwrap_or_else(factory)
    }

    #[inline]
    fn release(&self, item: T) {
        if self.storage.push(item).is_err() {
            tracing::trace!(slots = self.storage.capacity(), "recycle.cache.discard");
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.storage.len()
    }
}
