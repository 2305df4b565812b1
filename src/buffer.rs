use crate::{Cache, CountingPool, FreeList, Pooled, Recycler};
use core::fmt;

/// A pool of byte buffers that always lends them out at full capacity.
///
/// The factory decides the size of freshly fabricated buffers. On every
/// [`borrow`](Self::borrow) the buffer's length is stretched back to its
/// capacity, undoing any truncation a previous borrower left behind.
/// Contents are not cleared: treat borrowed bytes as leftovers and overwrite
/// them before reading.
///
/// The pool only restores what the recycled buffer still has. A buffer whose
/// capacity was shrunk before recycling comes back with the smaller
/// capacity.
pub struct BufferPool<F, C = FreeList<Vec<u8>>> {
    pool: CountingPool<Vec<u8>, F, C>,
}

impl<F> BufferPool<F>
where
    F: Fn() -> Vec<u8>,
{
    /// Creates a buffer pool backed by an unbounded free list.
    pub fn new(factory: F) -> Self {
        BufferPool {
            pool: CountingPool::new(factory),
        }
    }
}

impl<F, C> BufferPool<F, C>
where
    F: Fn() -> Vec<u8>,
    C: Cache<Vec<u8>>,
{
    /// Creates a buffer pool on top of the given cache.
    pub fn with_cache(factory: F, cache: C) -> Self {
        BufferPool {
            pool: CountingPool::with_cache(factory, cache),
        }
    }

    /// Borrows a buffer whose length equals its capacity.
    ///
    /// Bytes past the previous borrower's length are zero-filled; bytes
    /// before it keep whatever was written last.
    #[inline]
    pub fn borrow(&self) -> Vec<u8> {
        let mut buf = self.pool.acquire();
        let cap = buf.capacity();
        buf.resize(cap, 0);
        buf
    }

    /// Borrows a buffer that is recycled automatically when dropped.
    pub fn borrow_pooled(&self) -> Pooled<'_, Self> {
        Pooled::new(self.borrow(), self)
    }

    /// Returns a buffer to the pool. Nothing is truncated or zeroed.
    #[inline]
    pub fn recycle(&self, buf: Vec<u8>) {
        self.pool.release(buf);
    }

    /// Number of buffers the factory has fabricated.
    pub fn fabricated(&self) -> u64 {
        self.pool.fabricated()
    }

    /// Number of idle buffers waiting to be borrowed.
    pub fn available(&self) -> usize {
        self.pool.available()
    }
}

impl<F, C> Recycler for BufferPool<F, C>
where
    F: Fn() -> Vec<u8>,
    C: Cache<Vec<u8>>,
{
    type Item = Vec<u8>;

    fn recycle(&self, item: Vec<u8>) {
        BufferPool::recycle(self, item);
    }
}

impl<F, C: fmt::Debug> fmt::Debug for BufferPool<F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool").field("pool", &self.pool).finish()
    }
}
