use crate::{Cache, FreeList};
use core::{
    any::type_name,
    fmt,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// A pool that draws items from a [`Cache`] and counts how often its factory
/// had to fabricate a new one.
///
/// Apart from the counter this is a pure pass-through: items are neither
/// reset on acquire nor on release. The typed pools built on top decide how
/// a reused item is reshaped.
pub struct CountingPool<T, F, C = FreeList<T>> {
    factory: F,
    cache: C,
    fabricated: AtomicU64,
    _item: PhantomData<fn() -> T>,
}

impl<T, F> CountingPool<T, F>
where
    F: Fn() -> T,
{
    /// Creates a pool backed by an unbounded [`FreeList`].
    pub fn new(factory: F) -> Self {
        Self::with_cache(factory, FreeList::new())
    }
}

impl<T, F, C> CountingPool<T, F, C>
where
    F: Fn() -> T,
    C: Cache<T>,
{
    /// Creates a pool on top of the given cache.
    pub fn with_cache(factory: F, cache: C) -> Self {
        CountingPool {
            factory,
            cache,
            fabricated: AtomicU64::new(0),
            _item: PhantomData,
        }
    }

    /// Takes an idle item from the cache, fabricating one on a miss.
    #[inline]
    pub fn acquire(&self) -> T {
        self.cache.acquire(|| {
            let fabricated = self.fabricated.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::trace!(item = type_name::<T>(), fabricated, "recycle.pool.fabricate");
            (self.factory)()
        })
    }

    /// Hands `item` back to the cache as-is.
    #[inline]
    pub fn release(&self, item: T) {
        self.cache.release(item);
    }

    /// Number of items the factory has produced so far.
    ///
    /// Diagnostic only: reads are not synchronized with in-flight acquires.
    pub fn fabricated(&self) -> u64 {
        self.fabricated.load(Ordering::Relaxed)
    }

    /// Number of idle items waiting in the cache.
    pub fn available(&self) -> usize {
        self.cache.len()
    }

    /// The cache this pool draws from.
    pub fn cache(&self) -> &C {
        &self.cache
    }
}

impl<T, F, C: fmt::Debug> fmt::Debug for CountingPool<T, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPool")
            .field("item", &type_name::<T>())
            .field("cache", &self.cache)
            .field("fabricated", &self.fabricated.load(Ordering::Relaxed))
            .finish()
    }
}
