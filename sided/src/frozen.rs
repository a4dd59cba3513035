//! An immutable, fixed-size, cheaply clonable sequence that remembers
//! whether it was ever allocated.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::classify::{Defaultness, Strategy};

/// An immutable homogeneous sequence backed by a shared allocation.
///
/// A `FrozenSlice` in its default state was *never allocated*, which is a
/// different thing from holding zero elements:
///
/// ```rust
/// use sided::FrozenSlice;
///
/// let never: FrozenSlice<u8> = FrozenSlice::default();
/// let empty: FrozenSlice<u8> = FrozenSlice::empty();
///
/// assert!(never.is_unallocated());
/// assert!(!empty.is_unallocated());
/// assert!(never.is_empty() && empty.is_empty());
/// assert_ne!(never, empty);
/// ```
///
/// Cloning bumps a reference count; the elements are never copied.
pub struct FrozenSlice<T> {
    inner: Option<Arc<[T]>>,
}

impl<T> FrozenSlice<T> {
    /// The never-allocated state. Same as `FrozenSlice::default()`.
    pub fn unallocated() -> Self {
        FrozenSlice { inner: None }
    }

    /// An allocated sequence of zero elements.
    pub fn empty() -> Self {
        FrozenSlice {
            inner: Some(Vec::new().into()),
        }
    }

    /// Allocates a sequence holding clones of `values`.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        FrozenSlice {
            inner: Some(values.into()),
        }
    }

    /// True iff this is the never-allocated state.
    pub fn is_unallocated(&self) -> bool {
        self.inner.is_none()
    }

    /// The elements, or the empty slice when never allocated.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True when there are no elements to observe, whether because the
    /// sequence is allocated-but-empty or was never allocated at all.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Default for FrozenSlice<T> {
    fn default() -> Self {
        FrozenSlice::unallocated()
    }
}

impl<T> Clone for FrozenSlice<T> {
    fn clone(&self) -> Self {
        FrozenSlice {
            inner: self.inner.clone(),
        }
    }
}

impl<T> From<Vec<T>> for FrozenSlice<T> {
    fn from(values: Vec<T>) -> Self {
        FrozenSlice {
            inner: Some(values.into()),
        }
    }
}

impl<T> FromIterator<T> for FrozenSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FrozenSlice {
            inner: Some(iter.into_iter().collect()),
        }
    }
}

impl<'a, T> IntoIterator for &'a FrozenSlice<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Unallocated compares unequal to allocated-but-empty; Hash agrees.
impl<T: PartialEq> PartialEq for FrozenSlice<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for FrozenSlice<T> {}

impl<T: Hash> Hash for FrozenSlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.is_some().hash(state);
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            None => f.write_str("FrozenSlice(unallocated)"),
            Some(values) => f.debug_list().entries(values.iter()).finish(),
        }
    }
}

impl<T> Defaultness for FrozenSlice<T> {
    const STRATEGY: Strategy = Strategy::AskContainer;

    fn is_default_value(&self) -> bool {
        self.is_unallocated()
    }
}
