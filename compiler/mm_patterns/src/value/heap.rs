//! Shared, immutable heap storage for values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted storage for heap-backed `Value` variants.
///
/// The constructor is `pub(super)`: only `Value` factory methods create heap
/// values.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Mutable access when this is the only handle.
    #[inline]
    pub(super) fn get_mut(this: &mut Self) -> Option<&mut T> {
        Arc::get_mut(&mut this.0)
    }

    /// Whether two handles share one allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        Heap::ptr_eq(self, other) || *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_clone_shares_allocation() {
        let h1 = Heap::new(vec![1, 2, 3]);
        let h2 = h1.clone();
        assert!(Heap::ptr_eq(&h1, &h2));
        assert_eq!(*h1, *h2);
    }

    #[test]
    fn test_heap_eq_compares_contents() {
        let h1 = Heap::new("hello".to_string());
        let h2 = Heap::new("hello".to_string());
        let h3 = Heap::new("world".to_string());
        assert!(!Heap::ptr_eq(&h1, &h2));
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }
}
