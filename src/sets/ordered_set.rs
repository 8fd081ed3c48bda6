//! Insertion-ordered unique set with automatic state transitions.
//!
//! This module provides [`OrderedSet`], the mutable set returned by the
//! [`sets`](crate::sets) factories. Elements iterate in the order they were
//! first inserted; inserting an element that is already present changes
//! nothing, including its position.
//!
//! # Overview
//!
//! `OrderedSet` switches between two representations:
//! - Inline storage (`SmallVec`) for small sets (up to 8 elements), with
//!   membership checked by a linear scan
//! - A `Vec` plus a hash index from element hash to positions once the set
//!   grows past 8 elements
//!
//! Both representations keep the elements contiguous and in insertion
//! order, so [`OrderedSet::as_slice`] is always available.
//!
//! # Time Complexity
//!
//! | Operation      | Small (n <= 8)    | Large (n > 8)       |
//! |----------------|-------------------|---------------------|
//! | `insert`       | O(n)              | O(1) average        |
//! | `remove`       | O(n)              | O(n)                |
//! | `contains`     | O(n)              | O(1) average        |
//! | `index_of`     | O(n)              | O(1) average        |
//! | `get_index`    | O(1)              | O(1)                |
//! | `len`          | O(1)              | O(1)                |
//! | `iter`         | O(1) + O(n)       | O(1) + O(n)         |
//!
//! Removal from a large set shifts later elements left and re-indexes
//! them, which keeps iteration order intact.
//!
//! # Examples
//!
//! ```rust
//! use collecta::sets::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! assert!(set.insert("b"));
//! assert!(set.insert("a"));
//! assert!(!set.insert("b"));
//!
//! assert_eq!(set.as_slice(), &["b", "a"]);
//! assert!(set.remove("b"));
//! assert_eq!(set.first(), Some(&"a"));
//! ```
//!
//! # State Transitions
//!
//! ```text
//!                 insert (n == 8, new element)
//!     Small ─────────────────────────────────► Large
//!       ▲                                        │
//!       └────────────────────────────────────────┘
//!                 remove (n drops to 8)
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::error::CollectionError;
use crate::mutation::SetMutation;

/// The threshold for transitioning between Small and Large states.
/// Sets with more than this many elements carry a hash index.
const SMALL_THRESHOLD: usize = 8;

#[cfg(feature = "fxhash")]
type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type IndexHasher = std::collections::hash_map::RandomState;

/// Positions of the elements sharing one hash value. Collisions are rare,
/// so a single inline slot covers almost every bucket.
type Bucket = SmallVec<[usize; 1]>;

/// Elements in insertion order plus a hash index into them.
#[derive(Clone)]
struct IndexedVec<T> {
    elements: Vec<T>,
    index: HashMap<u64, Bucket, IndexHasher>,
}

impl<T: Eq + Hash> IndexedVec<T> {
    fn from_unique(elements: Vec<T>) -> Self {
        let mut indexed = Self {
            elements,
            index: HashMap::default(),
        };
        indexed.rebuild_index();
        indexed
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        self.index.reserve(self.elements.len());
        for (position, element) in self.elements.iter().enumerate() {
            let hash = BuildHasher::hash_one(self.index.hasher(), element);
            self.index.entry(hash).or_default().push(position);
        }
    }

    fn position_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = BuildHasher::hash_one(self.index.hasher(), element);
        self.index
            .get(&hash)?
            .iter()
            .copied()
            .find(|&position| self.elements[position].borrow() == element)
    }

    fn insert(&mut self, element: T) -> bool {
        if self.position_of(&element).is_some() {
            return false;
        }
        let hash = BuildHasher::hash_one(self.index.hasher(), &element);
        self.index.entry(hash).or_default().push(self.elements.len());
        self.elements.push(element);
        true
    }
}

/// Internal representation of the set state.
#[derive(Clone)]
enum OrderedSetInner<T> {
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(IndexedVec<T>),
}

/// A mutable set that iterates in first-insertion order.
///
/// This set automatically transitions between two states based on size:
/// - Small: Up to 8 elements stored inline in a `SmallVec`
/// - Large: More than 8 elements stored in a `Vec` with a hash index
///
/// Equality is set equality: two sets are equal when they hold the same
/// elements, whatever their order.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Eq` and `Hash`.
///
/// # Examples
///
/// ```rust
/// use collecta::sets::OrderedSet;
///
/// let set: OrderedSet<i32> = [3, 1, 3, 2].into_iter().collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    inner: OrderedSetInner<T>,
}

impl<T: Eq + Hash> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::sets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: OrderedSetInner::Small(SmallVec::new()),
        }
    }

    /// Creates an empty set with room for `capacity` elements.
    ///
    /// A capacity above the inline threshold starts the set in the large
    /// state.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        if capacity <= SMALL_THRESHOLD {
            Self::new()
        } else {
            Self {
                inner: OrderedSetInner::Large(IndexedVec {
                    elements: Vec::with_capacity(capacity),
                    index: HashMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
                }),
            }
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            OrderedSetInner::Small(elements) => elements.as_slice(),
            OrderedSetInner::Large(indexed) => indexed.elements.as_slice(),
        }
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.as_slice().iter(),
        }
    }

    /// Returns the position of `element` in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::sets::OrderedSet;
    ///
    /// let set = OrderedSet::from(["x", "y"]);
    /// assert_eq!(set.index_of("y"), Some(1));
    /// assert_eq!(set.index_of("z"), None);
    /// ```
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.inner {
            OrderedSetInner::Small(elements) => elements
                .iter()
                .position(|candidate| candidate.borrow() == element),
            OrderedSetInner::Large(indexed) => indexed.position_of(element),
        }
    }

    /// Returns `true` if the set contains `element`.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index_of(element).is_some()
    }

    /// Returns the element at `position` in insertion order.
    #[inline]
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<&T> {
        self.as_slice().get(position)
    }

    /// Returns the earliest inserted element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the most recently inserted element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Inserts `element` at the end unless an equal element is present.
    ///
    /// Returns `true` if the element was new. A duplicate leaves the set,
    /// including the position of the existing element, unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::sets::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.insert(2));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.as_slice(), &[1, 2]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match &mut self.inner {
            OrderedSetInner::Large(indexed) => indexed.insert(element),
            OrderedSetInner::Small(elements) => {
                if elements.contains(&element) {
                    return false;
                }
                if elements.len() < SMALL_THRESHOLD {
                    elements.push(element);
                } else {
                    let mut promoted = Vec::with_capacity(SMALL_THRESHOLD * 2);
                    promoted.extend(elements.drain(..));
                    promoted.push(element);
                    self.inner = OrderedSetInner::Large(IndexedVec::from_unique(promoted));
                }
                true
            }
        }
    }

    /// Removes `element`, returning `true` if it was present.
    ///
    /// Later elements move up one position; their relative order is kept.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(position) = self.index_of(element) else {
            return false;
        };
        match &mut self.inner {
            OrderedSetInner::Small(elements) => {
                elements.remove(position);
            }
            OrderedSetInner::Large(indexed) => {
                indexed.elements.remove(position);
                if indexed.elements.len() <= SMALL_THRESHOLD {
                    let demoted = SmallVec::from_vec(std::mem::take(&mut indexed.elements));
                    self.inner = OrderedSetInner::Small(demoted);
                } else {
                    indexed.rebuild_index();
                }
            }
        }
        true
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collecta::sets::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=20).collect();
    /// set.retain(|value| value % 5 == 0);
    /// assert_eq!(set.as_slice(), &[5, 10, 15, 20]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        match &mut self.inner {
            OrderedSetInner::Small(elements) => elements.retain(|element| predicate(element)),
            OrderedSetInner::Large(indexed) => {
                let before = indexed.elements.len();
                indexed.elements.retain(|element| predicate(element));
                if indexed.elements.len() <= SMALL_THRESHOLD {
                    let demoted = SmallVec::from_vec(std::mem::take(&mut indexed.elements));
                    self.inner = OrderedSetInner::Small(demoted);
                } else if indexed.elements.len() != before {
                    indexed.rebuild_index();
                }
            }
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.inner = OrderedSetInner::Small(SmallVec::new());
    }

    /// Consumes the set, returning its elements in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self.inner {
            OrderedSetInner::Small(elements) => elements.into_vec(),
            OrderedSetInner::Large(indexed) => indexed.elements,
        }
    }
}

impl<T: Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Eq + Hash + fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash> From<Vec<T>> for OrderedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> SetMutation<T> for OrderedSet<T> {
    fn try_insert(&mut self, element: T) -> Result<bool, CollectionError> {
        Ok(self.insert(element))
    }

    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError> {
        Ok(self.remove(element))
    }

    fn try_clear(&mut self) -> Result<(), CollectionError> {
        self.clear();
        Ok(())
    }

    fn try_extend<I>(&mut self, elements: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(elements);
        Ok(())
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over an [`OrderedSet`] in insertion order.
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {}

impl<T> std::iter::FusedIterator for OrderedSetIterator<'_, T> {}

/// An owning iterator over an [`OrderedSet`] in insertion order.
pub struct OrderedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

impl<T> std::iter::FusedIterator for OrderedSetIntoIterator<T> {}

impl<'a, T: Eq + Hash> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.into_vec().into_iter(),
        }
    }
}
