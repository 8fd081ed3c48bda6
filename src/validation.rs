//! Absent-value checks shared by every factory.
//!
//! The absent value is `None`. A factory hands its raw arguments to one of
//! the helpers below and only builds a container from what they return, so
//! a rejected call never exposes a partially filled container.
//!
//! | Helper                           | Absent aggregate   | Absent element      |
//! |----------------------------------|--------------------|---------------------|
//! | [`require_present`]              | `AbsentArgument`   | n/a                 |
//! | [`require_no_absent_elements`]   | `AbsentArgument`   | `InvalidArgument`   |
//! | [`require_no_absent_references`] | `AbsentArgument`   | `InvalidArgument`   |

use crate::error::{CollectionError, trace_rejection};

/// Unwraps a single required argument.
///
/// # Errors
///
/// Returns [`CollectionError::AbsentArgument`] if `value` is `None`.
///
/// # Examples
///
/// ```rust
/// use collecta::validation::require_present;
///
/// assert_eq!(require_present(Some(7), "element"), Ok(7));
/// assert!(require_present::<i32>(None, "element").is_err());
/// ```
pub fn require_present<T>(value: Option<T>, parameter: &'static str) -> Result<T, CollectionError> {
    value.ok_or_else(|| absent(parameter))
}

/// Unwraps an owned aggregate and every element in it.
///
/// The aggregate is consumed in iteration order. Elements are moved into
/// the returned `Vec`, which is dropped if an absent element turns up.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `elements` is `None`.
/// - [`CollectionError::InvalidArgument`] carrying the index of the first
///   `None` element.
///
/// # Examples
///
/// ```rust
/// use collecta::validation::require_no_absent_elements;
/// use collecta::ErrorKind;
///
/// let values = require_no_absent_elements(Some([Some(1), Some(2)]), "elements");
/// assert_eq!(values, Ok(vec![1, 2]));
///
/// let error = require_no_absent_elements(Some([Some(1), None]), "elements").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidArgument);
/// ```
pub fn require_no_absent_elements<T, I>(
    elements: Option<I>,
    parameter: &'static str,
) -> Result<Vec<T>, CollectionError>
where
    I: IntoIterator<Item = Option<T>>,
{
    let elements = require_present(elements, parameter)?.into_iter();
    let mut present = Vec::with_capacity(elements.size_hint().0);
    for (index, element) in elements.enumerate() {
        match element {
            Some(value) => present.push(value),
            None => return Err(invalid(parameter, index)),
        }
    }
    Ok(present)
}

/// Checks a borrowed collection and clones its elements out.
///
/// The whole collection is scanned before anything is cloned. The
/// collection itself is never retained.
///
/// # Errors
///
/// - [`CollectionError::AbsentArgument`] if `collection` is `None`.
/// - [`CollectionError::InvalidArgument`] carrying the index of the first
///   `None` element.
///
/// # Examples
///
/// ```rust
/// use collecta::validation::require_no_absent_references;
///
/// let source = vec![Some("a".to_string()), Some("b".to_string())];
/// let copied = require_no_absent_references(Some(&source), "collection").unwrap();
/// assert_eq!(copied, vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(source.len(), 2);
/// ```
pub fn require_no_absent_references<'a, T, C>(
    collection: Option<&'a C>,
    parameter: &'static str,
) -> Result<Vec<T>, CollectionError>
where
    T: Clone + 'a,
    C: ?Sized,
    &'a C: IntoIterator<Item = &'a Option<T>>,
{
    let collection = require_present(collection, parameter)?;
    if let Some(index) = collection.into_iter().position(Option::is_none) {
        return Err(invalid(parameter, index));
    }
    Ok(collection.into_iter().flatten().cloned().collect())
}

fn absent(parameter: &'static str) -> CollectionError {
    let error = CollectionError::AbsentArgument { parameter };
    trace_rejection(&error);
    error
}

fn invalid(parameter: &'static str, index: usize) -> CollectionError {
    let error = CollectionError::InvalidArgument { parameter, index };
    trace_rejection(&error);
    error
}
