//! Read-only ordered sequence.
//!
//! [`UnmodifiableList`] owns its elements behind a reference counter and
//! exposes them only as a shared slice. Cloning a list shares the backing
//! storage; nothing can write to it once the list is built.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `get`          | O(1)       |
//! | `len`          | O(1)       |
//! | `contains`     | O(n)       |
//! | `clone`        | O(1)       |
//! | `to_vec`       | O(n)       |

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::ReferenceCounter;
use crate::error::{CollectionError, trace_rejection};
use crate::mutation::ListMutation;

const CONTAINER_NAME: &str = "UnmodifiableList";

/// A read-only, index-addressable sequence.
///
/// Dereferences to `[T]`, so every non-mutating slice method is available.
/// Mutation is only reachable through [`ListMutation`], which always
/// reports [`CollectionError::UnsupportedOperation`].
///
/// # Examples
///
/// ```rust
/// use collecta::lists::UnmodifiableList;
///
/// let list: UnmodifiableList<i32> = (1..=3).collect();
/// assert_eq!(list.first(), Some(&1));
/// assert_eq!(list[2], 3);
/// assert!(list.contains(&2));
/// ```
pub struct UnmodifiableList<T> {
    elements: ReferenceCounter<[T]>,
}

static_assertions::assert_not_impl_any!(UnmodifiableList<i32>: std::ops::DerefMut, std::ops::IndexMut<usize>, Extend<i32>);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(UnmodifiableList<String>: Send, Sync);

impl<T> UnmodifiableList<T> {
    /// Creates an empty read-only list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::lists::UnmodifiableList;
    ///
    /// let list: UnmodifiableList<i32> = UnmodifiableList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a shared slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Copies the elements into a new, independent mutable list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::lists::UnmodifiableList;
    ///
    /// let list = UnmodifiableList::from(["a", "b"]);
    /// let mut copy = list.to_vec();
    /// copy.push("c");
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(copy.len(), 3);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.to_vec()
    }

    fn refuse<R>(operation: &'static str) -> Result<R, CollectionError> {
        let error = CollectionError::unsupported(CONTAINER_NAME, operation);
        trace_rejection(&error);
        Err(error)
    }
}

impl<T> Deref for UnmodifiableList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for UnmodifiableList<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> Clone for UnmodifiableList<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for UnmodifiableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for UnmodifiableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for UnmodifiableList<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for UnmodifiableList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.elements[..] == other[..]
    }
}

impl<T: std::hash::Hash> std::hash::Hash for UnmodifiableList<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.elements[..].hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for UnmodifiableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UnmodifiableList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> From<Vec<T>> for UnmodifiableList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for UnmodifiableList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for UnmodifiableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a UnmodifiableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over an [`UnmodifiableList`].
///
/// The storage may be shared with other clones, so elements are cloned out
/// one at a time.
pub struct UnmodifiableListIntoIterator<T> {
    elements: ReferenceCounter<[T]>,
    front: usize,
    back: usize,
}

impl<T: Clone> Iterator for UnmodifiableListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let element = self.elements[self.front].clone();
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for UnmodifiableListIntoIterator<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.elements[self.back].clone())
    }
}

impl<T: Clone> ExactSizeIterator for UnmodifiableListIntoIterator<T> {}

impl<T: Clone> FusedIterator for UnmodifiableListIntoIterator<T> {}

impl<T: Clone> IntoIterator for UnmodifiableList<T> {
    type Item = T;
    type IntoIter = UnmodifiableListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.elements.len();
        UnmodifiableListIntoIterator {
            elements: self.elements,
            front: 0,
            back,
        }
    }
}

impl<T> ListMutation<T> for UnmodifiableList<T> {
    fn try_push(&mut self, _element: T) -> Result<(), CollectionError> {
        Self::refuse("try_push")
    }

    fn try_insert(&mut self, _index: usize, _element: T) -> Result<(), CollectionError> {
        Self::refuse("try_insert")
    }

    fn try_set(&mut self, _index: usize, _element: T) -> Result<T, CollectionError> {
        Self::refuse("try_set")
    }

    fn try_remove_at(&mut self, _index: usize) -> Result<T, CollectionError> {
        Self::refuse("try_remove_at")
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clone_shares_storage() {
        let list = UnmodifiableList::from(vec![1, 2, 3]);
        let clone = list.clone();
        assert!(ReferenceCounter::ptr_eq(&list.elements, &clone.elements));
    }

    #[rstest]
    fn test_owned_iterator_from_both_ends() {
        let list = UnmodifiableList::from([1, 2, 3, 4]);
        let mut iterator = list.into_iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.next_back(), Some(4));
        assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[rstest]
    fn test_owned_iterator_leaves_clones_intact() {
        let list = UnmodifiableList::from([String::from("a"), String::from("b")]);
        let kept = list.clone();
        let drained: Vec<String> = list.into_iter().collect();
        assert_eq!(drained, kept.to_vec());
        assert_eq!(kept.len(), 2);
    }

    #[rstest]
    fn test_refusal_names_operation() {
        let mut list = UnmodifiableList::from([1]);
        assert_eq!(
            list.try_remove_at(0),
            Err(CollectionError::UnsupportedOperation {
                container: "UnmodifiableList",
                operation: "try_remove_at",
            })
        );
    }
}
