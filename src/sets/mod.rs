//! Factories for insertion-ordered unique sets.
//!
//! Mutable results are [`OrderedSet<T>`]. Read-only results are
//! [`UnmodifiableSet<T>`]. Both iterate in the order in which each distinct
//! element was first supplied; later duplicates are dropped without error.
//!
//! | Input                          | Mutable                  | Read-only                    |
//! |--------------------------------|--------------------------|------------------------------|
//! | nothing                        | [`empty_ordered_set`]    | [`UnmodifiableSet::new`]     |
//! | one `Option<T>`                | [`ordered_set_of_one`]   | [`unmodifiable_set_of_one`]  |
//! | owned aggregate of `Option<T>` | [`ordered_set_of`]       | [`unmodifiable_set_of`]      |
//! | borrowed collection            | [`ordered_set_from`]     | [`unmodifiable_set_from`]    |
//!
//! The absent-value rules are the same as for [`lists`](crate::lists).
//!
//! # Examples
//!
//! ```rust
//! use collecta::sets::{ordered_set_from, ordered_set_of};
//!
//! let set = ordered_set_of(Some([Some("a"), Some("b"), Some("a"), Some("c")])).unwrap();
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.as_slice(), &["a", "b", "c"]);
//!
//! let source = vec![Some(2), Some(1), Some(2)];
//! let set = ordered_set_from(Some(&source)).unwrap();
//! assert_eq!(set.as_slice(), &[2, 1]);
//! ```

mod ordered_set;
mod unmodifiable_set;

pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
pub use unmodifiable_set::UnmodifiableSet;

use std::hash::Hash;

use crate::error::CollectionError;
use crate::validation::{require_no_absent_elements, require_no_absent_references, require_present};

/// Creates an empty mutable ordered set.
///
/// # Examples
///
/// ```rust
/// use collecta::sets::empty_ordered_set;
///
/// let mut set = empty_ordered_set();
/// set.insert("one");
/// assert_eq!(set.len(), 1);
/// ```
#[inline]
#[must_use]
pub fn empty_ordered_set<T: Eq + Hash>() -> OrderedSet<T> {
    OrderedSet::new()
}

/// Creates a mutable ordered set holding exactly `element`.
///
/// # Errors
///
/// Returns [`CollectionError::AbsentArgument`] if `element` is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::sets::ordered_set_of_one;
///
/// let set = ordered_set_of_one(Some(42)).unwrap();
/// assert!(set.contains(&42));
/// assert!(ordered_set_of_one::<i32>(None).is_err());
/// ```
pub fn ordered_set_of_one<T: Eq + Hash>(element: Option<T>) -> Result<OrderedSet<T>, CollectionError> {
    let element = require_present(element, "element")?;
    let mut set = OrderedSet::new();
    set.insert(element);
    Ok(set)
}

/// Creates a mutable ordered set from an owned aggregate.
///
/// Each distinct element keeps the position of its first occurrence.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `elements` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::sets::ordered_set_of;
/// use collecta::ErrorKind;
///
/// let set = ordered_set_of(Some([Some(3), Some(1), Some(3)])).unwrap();
/// assert_eq!(set.as_slice(), &[3, 1]);
///
/// let error = ordered_set_of::<i32, _>(Some([Some(1), None])).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn ordered_set_of<T, I>(elements: Option<I>) -> Result<OrderedSet<T>, CollectionError>
where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    require_no_absent_elements(elements, "elements").map(OrderedSet::from)
}

/// Creates a mutable ordered set by copying a borrowed collection.
///
/// The collection is neither retained nor mutated.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `collection` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
pub fn ordered_set_from<'a, T, C>(collection: Option<&'a C>) -> Result<OrderedSet<T>, CollectionError>
where
    T: Eq + Hash + Clone + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    require_no_absent_references(collection, "collection").map(OrderedSet::from)
}

/// Creates a read-only ordered set holding exactly `element`.
///
/// # Errors
///
/// Returns [`CollectionError::AbsentArgument`] if `element` is `None`.
pub fn unmodifiable_set_of_one<T: Eq + Hash>(
    element: Option<T>,
) -> Result<UnmodifiableSet<T>, CollectionError> {
    ordered_set_of_one(element).map(UnmodifiableSet::from)
}

/// Creates a read-only ordered set from an owned aggregate.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `elements` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::sets::unmodifiable_set_of;
/// use collecta::{ErrorKind, SetMutation};
///
/// let mut set = unmodifiable_set_of(Some([Some("x"), Some("y")])).unwrap();
/// let error = set.try_remove(&"x").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
/// assert_eq!(set.len(), 2);
/// ```
pub fn unmodifiable_set_of<T, I>(elements: Option<I>) -> Result<UnmodifiableSet<T>, CollectionError>
where
    T: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    ordered_set_of(elements).map(UnmodifiableSet::from)
}

/// Creates a read-only ordered set by copying a borrowed collection.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `collection` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
pub fn unmodifiable_set_from<'a, T, C>(
    collection: Option<&'a C>,
) -> Result<UnmodifiableSet<T>, CollectionError>
where
    T: Eq + Hash + Clone + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    ordered_set_from(collection).map(UnmodifiableSet::from)
}
