use core::{
    fmt,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
};

/// A pool that takes borrowed items back.
///
/// Implemented by every typed pool so [`Pooled`] can return its item on drop.
pub trait Recycler {
    /// The kind of item this pool lends out.
    type Item;

    /// Returns a previously borrowed item to the pool.
    fn recycle(&self, item: Self::Item);
}

/// A borrowed item that goes back to its pool when dropped.
pub struct Pooled<'a, P: Recycler> {
    item: ManuallyDrop<P::Item>,
    pool: &'a P,
}

impl<'a, P: Recycler> Pooled<'a, P> {
    pub(crate) fn new(item: P::Item, pool: &'a P) -> Self {
        Pooled {
            item: ManuallyDrop::new(item),
            pool,
        }
    }

    /// Consumes the guard and returns the item without recycling it.
    pub fn into_inner(self) -> P::Item {
        let mut this = ManuallyDrop::new(self);
        // Safety: `this` is never dropped, so the item is taken exactly once.
        unsafe { ManuallyDrop::take(&mut this.item) }
    }
}

impl<P: Recycler> Deref for Pooled<'_, P> {
    type Target = P::Item;
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl<P: Recycler> DerefMut for Pooled<'_, P> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.item
    }
}

impl<P: Recycler> Drop for Pooled<'_, P> {
    fn drop(&mut self) {
        // Safety: drop runs once and the item is not touched afterwards.
        let item = unsafe { ManuallyDrop::take(&mut self.item) };
        self.pool.recycle(item);
    }
}

impl<P: Recycler> fmt::Debug for Pooled<'_, P>
where
    P::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<P: Recycler> PartialEq<P::Item> for Pooled<'_, P>
where
    P::Item: PartialEq,
{
    #[inline]
    fn eq(&self, other: &P::Item) -> bool {
        (**self).eq(other)
    }
}

impl<P: Recycler> AsRef<P::Item> for Pooled<'_, P> {
    #[inline(always)]
    fn as_ref(&self) -> &P::Item {
        self
    }
}

impl<P: Recycler> AsMut<P::Item> for Pooled<'_, P> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut P::Item {
        self
    }
}
