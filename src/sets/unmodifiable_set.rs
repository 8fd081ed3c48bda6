//! Read-only insertion-ordered unique set.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::ordered_set::{OrderedSet, OrderedSetIterator};
use crate::ReferenceCounter;
use crate::error::{CollectionError, trace_rejection};
use crate::mutation::SetMutation;

const CONTAINER_NAME: &str = "UnmodifiableSet";

/// A read-only set that iterates in first-insertion order.
///
/// Wraps an [`OrderedSet`] that nobody else can reach. Cloning shares the
/// wrapped set. Mutation is only reachable through [`SetMutation`], which
/// always reports [`CollectionError::UnsupportedOperation`].
///
/// # Examples
///
/// ```rust
/// use collecta::sets::UnmodifiableSet;
/// use collecta::{ErrorKind, SetMutation};
///
/// let mut set = UnmodifiableSet::from(["a", "b", "a"]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.try_insert("c").unwrap_err().kind(), ErrorKind::UnsupportedOperation);
/// assert!(!set.contains("c"));
/// ```
pub struct UnmodifiableSet<T> {
    inner: ReferenceCounter<OrderedSet<T>>,
}

static_assertions::assert_not_impl_any!(UnmodifiableSet<i32>: std::ops::DerefMut, Extend<i32>);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(UnmodifiableSet<String>: Send, Sync);

impl<T: Eq + Hash> UnmodifiableSet<T> {
    /// Creates an empty read-only set.
    #[must_use]
    pub fn new() -> Self {
        Self::from(OrderedSet::new())
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set contains `element`.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Returns the position of `element` in insertion order.
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.index_of(element)
    }

    /// Returns the element at `position` in insertion order.
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<&T> {
        self.inner.get_index(position)
    }

    /// Returns the earliest inserted element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the most recently inserted element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns the elements in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Returns an iterator over the elements in insertion order.
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        self.inner.iter()
    }

    /// Copies the elements into a new, independent mutable set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::sets::UnmodifiableSet;
    ///
    /// let set = UnmodifiableSet::from([1, 2]);
    /// let mut copy = set.to_ordered_set();
    /// copy.insert(3);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(copy.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_ordered_set(&self) -> OrderedSet<T>
    where
        T: Clone,
    {
        (*self.inner).clone()
    }

    fn refuse<R>(operation: &'static str) -> Result<R, CollectionError> {
        let error = CollectionError::unsupported(CONTAINER_NAME, operation);
        trace_rejection(&error);
        Err(error)
    }
}

impl<T> Clone for UnmodifiableSet<T> {
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: Eq + Hash> Default for UnmodifiableSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for UnmodifiableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.inner == *other.inner
    }
}

impl<T: Eq + Hash> Eq for UnmodifiableSet<T> {}

impl<T: Eq + Hash + fmt::Debug> fmt::Debug for UnmodifiableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for UnmodifiableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}

impl<T: Eq + Hash> From<OrderedSet<T>> for UnmodifiableSet<T> {
    fn from(set: OrderedSet<T>) -> Self {
        Self {
            inner: ReferenceCounter::new(set),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for UnmodifiableSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(OrderedSet::from(elements))
    }
}

impl<T: Eq + Hash> FromIterator<T> for UnmodifiableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<OrderedSet<T>>())
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a UnmodifiableSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> SetMutation<T> for UnmodifiableSet<T> {
    fn try_insert(&mut self, _element: T) -> Result<bool, CollectionError> {
        Self::refuse("try_insert")
    }

    fn try_remove(&mut self, _element: &T) -> Result<bool, CollectionError> {
        Self::refuse("try_remove")
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        Self::refuse("try_clear")
    }

    fn try_extend<I>(&mut self, _elements: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::refuse("try_extend")
    }
}
