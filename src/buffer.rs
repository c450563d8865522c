//! Shared flat storage backing matrix entities
//!
//! `Buffer` wraps a contiguous element block with reference counting, so
//! zero-copy views (the O(1) logical transpose, shared transposed caches)
//! can share one allocation. Once a buffer is constructed its elements are
//! never mutated; sharing is therefore safe without further synchronization.

use crate::element::Element;
use std::sync::Arc;

/// Reference-counted contiguous block of elements
///
/// Cloning is O(1) and shares the allocation. Sub-ranges are read through
/// `as_slice()`; standard slice indexing gives the O(1) slicing the matrix
/// core relies on.
#[derive(Clone)]
pub struct Buffer<T> {
    data: Arc<[T]>,
}

impl<T: Element> Buffer<T> {
    /// Create a buffer taking ownership of a vector
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data: data.into() }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Read a single element
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.data[index]
    }

    /// Copy the elements into a fresh vector
    pub fn to_vec(&self) -> Vec<T> {
        self.data.to_vec()
    }

    /// Check whether two buffers share the same allocation
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl<T: Element> std::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.data.len())
            .field("refs", &Arc::strong_count(&self.data))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_allocation() {
        let a = Buffer::from_vec(vec![1.0f64, 2.0, 3.0]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(b.as_slice(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_get_and_len() {
        let buf = Buffer::from_vec(vec![7i64, 8, 9]);
        assert_eq!(buf.len(), 3);
        assert!(!buf.is_empty());
        assert_eq!(buf.get(1), 8);
        assert_eq!(buf.to_vec(), vec![7, 8, 9]);
    }
}
