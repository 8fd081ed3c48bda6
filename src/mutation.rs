//! Checked mutation interface shared by mutable and read-only containers.
//!
//! The read-only containers have no mutating inherent methods at all. Code
//! that is generic over "some list" or "some set" can still be written
//! against [`ListMutation`] and [`SetMutation`]: the mutable containers
//! apply the change, the read-only ones refuse it with
//! [`CollectionError::UnsupportedOperation`] and stay untouched.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "lists")]
//! # {
//! use collecta::lists::{list_of, unmodifiable_list_of};
//! use collecta::{ErrorKind, ListMutation};
//!
//! fn append_marker<L: ListMutation<&'static str>>(list: &mut L) -> Result<(), collecta::CollectionError> {
//!     list.try_push("marker")
//! }
//!
//! let mut mutable = list_of(Some([Some("one")])).unwrap();
//! assert!(append_marker(&mut mutable).is_ok());
//! assert_eq!(mutable, vec!["one", "marker"]);
//!
//! let mut read_only = unmodifiable_list_of(Some([Some("one")])).unwrap();
//! let error = append_marker(&mut read_only).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::UnsupportedOperation);
//! assert_eq!(read_only.len(), 1);
//! # }
//! ```

use crate::error::CollectionError;

/// Fallible mutation of an index-addressable sequence.
pub trait ListMutation<T> {
    /// Appends `element` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only list.
    fn try_push(&mut self, element: T) -> Result<(), CollectionError>;

    /// Inserts `element` at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::UnsupportedOperation`] on a read-only list.
    /// - [`CollectionError::IndexOutOfBounds`] if `index > len`.
    fn try_insert(&mut self, index: usize, element: T) -> Result<(), CollectionError>;

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::UnsupportedOperation`] on a read-only list.
    /// - [`CollectionError::IndexOutOfBounds`] if `index >= len`.
    fn try_set(&mut self, index: usize, element: T) -> Result<T, CollectionError>;

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Errors
    ///
    /// - [`CollectionError::UnsupportedOperation`] on a read-only list.
    /// - [`CollectionError::IndexOutOfBounds`] if `index >= len`.
    fn try_remove_at(&mut self, index: usize) -> Result<T, CollectionError>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only list.
    fn try_clear(&mut self) -> Result<(), CollectionError>;

    /// Appends every element of `elements` in order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only list.
    fn try_extend<I>(&mut self, elements: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>;
}

/// Fallible mutation of an insertion-ordered unique set.
pub trait SetMutation<T> {
    /// Inserts `element`, returning `true` if it was not already present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only set.
    fn try_insert(&mut self, element: T) -> Result<bool, CollectionError>;

    /// Removes `element`, returning `true` if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only set.
    fn try_remove(&mut self, element: &T) -> Result<bool, CollectionError>;

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only set.
    fn try_clear(&mut self) -> Result<(), CollectionError>;

    /// Inserts every element of `elements` in order, skipping duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::UnsupportedOperation`] on a read-only set.
    fn try_extend<I>(&mut self, elements: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>;
}

const fn check_index(index: usize, length: usize) -> Result<(), CollectionError> {
    if index < length {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfBounds { index, length })
    }
}

impl<T> ListMutation<T> for Vec<T> {
    fn try_push(&mut self, element: T) -> Result<(), CollectionError> {
        self.push(element);
        Ok(())
    }

    fn try_insert(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        // Inserting at `len` appends.
        if index > self.len() {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                length: self.len(),
            });
        }
        self.insert(index, element);
        Ok(())
    }

    fn try_set(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        check_index(index, self.len())?;
        Ok(std::mem::replace(&mut self[index], element))
    }

    fn try_remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        check_index(index, self.len())?;
        Ok(self.remove(index))
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
