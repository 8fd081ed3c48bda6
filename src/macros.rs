//! Construction macros for callers that only hold present values.
//!
//! The macro arguments are plain `T` expressions, so there is nothing to
//! validate and the macros return containers directly rather than a
//! `Result`. Use `vec![...]` for a mutable list.

/// Builds an [`OrderedSet`](crate::sets::OrderedSet) from its arguments,
/// keeping the first occurrence of each distinct element.
///
/// # Examples
///
/// ```rust
/// use collecta::ordered_set_of;
/// use collecta::sets::OrderedSet;
///
/// let set = ordered_set_of!["a", "b", "a", "c"];
/// assert_eq!(set.as_slice(), &["a", "b", "c"]);
///
/// let empty: OrderedSet<i32> = ordered_set_of![];
/// assert!(empty.is_empty());
/// ```
#[cfg(feature = "sets")]
#[macro_export]
macro_rules! ordered_set_of {
    () => {
        $crate::sets::OrderedSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sets::OrderedSet::from([$($element),+])
    };
}

/// Builds an [`UnmodifiableList`](crate::lists::UnmodifiableList) from its
/// arguments, in order.
///
/// # Examples
///
/// ```rust
/// use collecta::unmodifiable_list_of;
///
/// let list = unmodifiable_list_of![1, 2, 2];
/// assert_eq!(list.as_slice(), &[1, 2, 2]);
/// ```
#[cfg(feature = "lists")]
#[macro_export]
macro_rules! unmodifiable_list_of {
    () => {
        $crate::lists::UnmodifiableList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::lists::UnmodifiableList::from([$($element),+])
    };
}

/// Builds an [`UnmodifiableSet`](crate::sets::UnmodifiableSet) from its
/// arguments, keeping the first occurrence of each distinct element.
///
/// # Examples
///
/// ```rust
/// use collecta::unmodifiable_set_of;
///
/// let set = unmodifiable_set_of!['x', 'y', 'x'];
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.first(), Some(&'x'));
/// ```
#[cfg(feature = "sets")]
#[macro_export]
macro_rules! unmodifiable_set_of {
    () => {
        $crate::sets::UnmodifiableSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sets::UnmodifiableSet::from([$($element),+])
    };
}
