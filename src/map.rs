use crate::{Cache, CountingPool, FreeList, Pooled, Recycler};
use core::fmt;
use std::collections::HashMap;

/// A string-keyed map as lent out by [`MapPool`].
pub type Map<V> = HashMap<String, V>;

/// A pool of string-keyed maps that are empty whenever they are borrowed.
///
/// Clearing happens at [`borrow`](Self::borrow) time, not at recycle time, so
/// a recycled map keeps its stale entries while it sits idle in the pool.
/// Clearing keeps the map's allocated buckets.
pub struct MapPool<V, F, C = FreeList<Map<V>>> {
    pool: CountingPool<Map<V>, F, C>,
}

impl<V, F> MapPool<V, F>
where
    F: Fn() -> Map<V>,
{
    /// Creates a map pool backed by an unbounded free list.
    pub fn new(factory: F) -> Self {
        MapPool {
            pool: CountingPool::new(factory),
        }
    }
}

impl<V, F, C> MapPool<V, F, C>
where
    F: Fn() -> Map<V>,
    C: Cache<Map<V>>,
{
    /// Creates a map pool on top of the given cache.
    pub fn with_cache(factory: F, cache: C) -> Self {
        MapPool {
            pool: CountingPool::with_cache(factory, cache),
        }
    }

    /// Borrows a map with no entries.
    #[inline]
    pub fn borrow(&self) -> Map<V> {
        let mut map = self.pool.acquire();
        map.clear();
        map
    }

    /// Borrows a map that is recycled automatically when dropped.
    pub fn borrow_pooled(&self) -> Pooled<'_, Self> {
        Pooled::new(self.borrow(), self)
    }

    /// Returns a map to the pool with its entries still in place.
    #[inline]
    pub fn recycle(&self, map: Map<V>) {
        self.pool.release(map);
    }

    /// Number of maps the factory has fabricated.
    pub fn fabricated(&self) -> u64 {
        self.pool.fabricated()
    }

    /// Number of idle maps waiting to be borrowed.
    pub fn available(&self) -> usize {
        self.pool.available()
    }
}

impl<V, F, C> Recycler for MapPool<V, F, C>
where
    F: Fn() -> Map<V>,
    C: Cache<Map<V>>,
{
    type Item = Map<V>;

    fn recycle(&self, item: Map<V>) {
        MapPool::recycle(self, item);
    }
}

impl<V, F, C: fmt::Debug> fmt::Debug for MapPool<V, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapPool").field("pool", &self.pool).finish()
    }
}
