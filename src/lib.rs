//! # collecta
//!
//! Validated one-line factories for lists and insertion-ordered sets,
//! with read-only variants.
//!
//! ## Overview
//!
//! Every factory takes its input in `Option`-shaped form, rejects absent
//! values up front and hands back a freshly allocated container that the
//! caller owns outright:
//!
//! - **Lists**: [`lists::list_of`] and friends return a `Vec<T>` or an
//!   [`UnmodifiableList`](lists::UnmodifiableList)
//! - **Sets**: [`sets::ordered_set_of`] and friends return an
//!   [`OrderedSet`](sets::OrderedSet) that remembers first-insertion order,
//!   or an [`UnmodifiableSet`](sets::UnmodifiableSet)
//! - **Validation**: the shared absent-value checks in [`validation`]
//! - **Checked mutation**: [`ListMutation`] and [`SetMutation`] give mutable
//!   and read-only containers one fallible mutation surface
//!
//! ## Feature Flags
//!
//! - `lists`: list factories and [`UnmodifiableList`](lists::UnmodifiableList)
//! - `sets`: set factories, [`OrderedSet`](sets::OrderedSet) and
//!   [`UnmodifiableSet`](sets::UnmodifiableSet)
//! - `arc`: read-only containers share their storage through `Arc`
//! - `fxhash` / `ahash`: faster hashing for the `OrderedSet` index
//! - `tracing`: emit a `debug` event for every rejected call
//! - `full`: enable everything except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "lists", feature = "sets"))]
//! # {
//! use collecta::prelude::*;
//!
//! let names = list_of(Some([Some("one"), Some("two"), Some("three")])).unwrap();
//! assert_eq!(names, vec!["one", "two", "three"]);
//!
//! let letters = ordered_set_of(Some([Some('a'), Some('b'), Some('a'), Some('c')])).unwrap();
//! assert_eq!(letters.as_slice(), &['a', 'b', 'c']);
//!
//! let error = list_of(Some([Some(1), None])).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the factories, container types, error types and checked
/// mutation traits.
///
/// # Usage
///
/// ```rust
/// use collecta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CollectionError, ErrorKind};
    pub use crate::mutation::*;

    #[cfg(feature = "lists")]
    pub use crate::lists::*;

    #[cfg(feature = "sets")]
    pub use crate::sets::*;
}

/// Reference-counted smart pointer type backing the read-only containers.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod macros;
mod mutation;
pub mod validation;

#[cfg(feature = "lists")]
pub mod lists;

#[cfg(feature = "sets")]
pub mod sets;

pub use error::{CollectionError, ErrorKind};
pub use mutation::{ListMutation, SetMutation};

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_shares_slice() {
        let shared: ReferenceCounter<[i32]> = ReferenceCounter::from(vec![1, 2, 3]);
        let clone = ReferenceCounter::clone(&shared);
        assert!(ReferenceCounter::ptr_eq(&shared, &clone));
        assert_eq!(ReferenceCounter::strong_count(&shared), 2);
    }
}
