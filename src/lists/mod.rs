//! Factories for ordered sequences.
//!
//! Mutable results are plain `Vec<T>`. Read-only results are
//! [`UnmodifiableList<T>`], which only exposes non-mutating operations.
//!
//! Each shape comes in three arities:
//!
//! | Input                        | Mutable          | Read-only                       |
//! |------------------------------|------------------|---------------------------------|
//! | nothing                      | [`empty_list`]   | [`UnmodifiableList::new`]       |
//! | one `Option<T>`              | [`list_of_one`]  | [`unmodifiable_list_of_one`]    |
//! | owned aggregate of `Option<T>` | [`list_of`]    | [`unmodifiable_list_of`]        |
//! | borrowed collection          | [`list_from`]    | [`unmodifiable_list_from`]      |
//!
//! Input order and duplicates are preserved exactly.
//!
//! # Examples
//!
//! ```rust
//! use collecta::lists::{empty_list, list_from, list_of};
//!
//! let mut list = empty_list();
//! list.push("one");
//! assert_eq!(list.len(), 1);
//!
//! let mut list = list_of(Some([Some("one"), Some("two"), Some("three")])).unwrap();
//! list.push("four");
//! assert_eq!(list, vec!["one", "two", "three", "four"]);
//!
//! // The source collection is only borrowed
//! let source = vec![Some(1), Some(1), Some(2)];
//! let copy = list_from(Some(&source)).unwrap();
//! assert_eq!(copy, vec![1, 1, 2]);
//! assert_eq!(source.len(), 3);
//! ```

mod unmodifiable_list;

pub use unmodifiable_list::UnmodifiableList;
pub use unmodifiable_list::UnmodifiableListIntoIterator;

use crate::error::CollectionError;
use crate::validation::{require_no_absent_elements, require_no_absent_references, require_present};

/// Creates an empty mutable list.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::empty_list;
///
/// let list: Vec<String> = empty_list();
/// assert!(list.is_empty());
/// ```
#[inline]
pub const fn empty_list<T>() -> Vec<T> {
    Vec::new()
}

/// Creates a mutable list holding exactly `element`.
///
/// # Errors
///
/// Returns [`CollectionError::AbsentArgument`] if `element` is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::list_of_one;
///
/// assert_eq!(list_of_one(Some("one")).unwrap(), vec!["one"]);
/// assert!(list_of_one::<&str>(None).is_err());
/// ```
pub fn list_of_one<T>(element: Option<T>) -> Result<Vec<T>, CollectionError> {
    let element = require_present(element, "element")?;
    let mut list = Vec::with_capacity(1);
    list.push(element);
    Ok(list)
}

/// Creates a mutable list from an owned aggregate, keeping its order.
///
/// This is the variadic form: pass an array (or any owned iterable) of
/// `Option<T>`. An empty aggregate yields an empty list.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `elements` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::list_of;
/// use collecta::ErrorKind;
///
/// let list = list_of(Some([Some(3), Some(1), Some(3)])).unwrap();
/// assert_eq!(list, vec![3, 1, 3]);
///
/// let error = list_of::<i32, _>(Some([None, None])).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn list_of<T, I>(elements: Option<I>) -> Result<Vec<T>, CollectionError>
where
    I: IntoIterator<Item = Option<T>>,
{
    require_no_absent_elements(elements, "elements")
}

/// Creates a mutable list by copying a borrowed collection in iteration order.
///
/// The collection is neither retained nor mutated.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `collection` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::list_from;
///
/// let source = [Some("a"), Some("b")];
/// let mut copy = list_from(Some(&source[..])).unwrap();
/// copy.push("c");
/// assert_eq!(copy, vec!["a", "b", "c"]);
/// assert_eq!(source.len(), 2);
/// ```
pub fn list_from<'a, T, C>(collection: Option<&'a C>) -> Result<Vec<T>, CollectionError>
where
    T: Clone + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    require_no_absent_references(collection, "collection")
}

/// Creates a read-only list holding exactly `element`.
///
/// # Errors
///
/// Returns [`CollectionError::AbsentArgument`] if `element` is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::unmodifiable_list_of_one;
///
/// let list = unmodifiable_list_of_one(Some("one")).unwrap();
/// assert_eq!(list.as_slice(), &["one"]);
/// ```
pub fn unmodifiable_list_of_one<T>(element: Option<T>) -> Result<UnmodifiableList<T>, CollectionError> {
    list_of_one(element).map(UnmodifiableList::from)
}

/// Creates a read-only list from an owned aggregate, keeping its order.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `elements` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::unmodifiable_list_of;
/// use collecta::{ErrorKind, ListMutation};
///
/// let mut list = unmodifiable_list_of(Some([Some("one"), Some("two")])).unwrap();
/// assert_eq!(list.len(), 2);
///
/// let error = list.try_push("three").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
/// ```
pub fn unmodifiable_list_of<T, I>(elements: Option<I>) -> Result<UnmodifiableList<T>, CollectionError>
where
    I: IntoIterator<Item = Option<T>>,
{
    list_of(elements).map(UnmodifiableList::from)
}

/// Creates a read-only list by copying a borrowed collection.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `collection` is `None`.
/// - [`CollectionError::InvalidArgument`] if any element is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::lists::unmodifiable_list_from;
///
/// let mut source = vec![Some(1), Some(2)];
/// let list = unmodifiable_list_from(Some(&source)).unwrap();
/// source.push(Some(3));
/// assert_eq!(list.len(), 2);
/// ```
pub fn unmodifiable_list_from<'a, T, C>(
    collection: Option<&'a C>,
) -> Result<UnmodifiableList<T>, CollectionError>
where
    T: Clone + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    list_from(collection).map(UnmodifiableList::from)
}
