//! Error types for the collection factories.
//!
//! Every factory in [`lists`](crate::lists) and [`sets`](crate::sets)
//! reports rejected input through [`CollectionError`], and the checked
//! mutation interface ([`ListMutation`](crate::ListMutation),
//! [`SetMutation`](crate::SetMutation)) reports refused mutations through
//! the same type.

use std::fmt;

/// The category of a [`CollectionError`], without its payload.
///
/// Useful when a caller only cares about which contract was violated.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "lists")]
/// # {
/// use collecta::lists::list_of_one;
/// use collecta::ErrorKind;
///
/// let error = list_of_one::<&str>(None).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::AbsentArgument);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The top-level argument was absent.
    AbsentArgument,
    /// The argument was present but one of its elements was absent.
    InvalidArgument,
    /// A mutation was attempted on a read-only container.
    UnsupportedOperation,
    /// An index-based mutation addressed a slot past the end.
    IndexOutOfBounds,
}

/// Represents every failure the factories and checked mutations can report.
///
/// # Examples
///
/// ```rust
/// use collecta::CollectionError;
///
/// let error = CollectionError::InvalidArgument {
///     parameter: "elements",
///     index: 2,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "elements: element at index 2 is absent"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The top-level argument was `None`.
    AbsentArgument {
        /// The name of the rejected parameter.
        parameter: &'static str,
    },
    /// The aggregate argument was present but held a `None` element.
    InvalidArgument {
        /// The name of the rejected parameter.
        parameter: &'static str,
        /// Position of the first absent element.
        index: usize,
    },
    /// A mutating operation was invoked on a read-only container.
    UnsupportedOperation {
        /// The read-only container type.
        container: &'static str,
        /// The refused operation.
        operation: &'static str,
    },
    /// An index-based mutation addressed a slot past the end of a list.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
}

impl CollectionError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AbsentArgument { .. } => ErrorKind::AbsentArgument,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }

    pub(crate) const fn unsupported(container: &'static str, operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            container,
            operation,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentArgument { parameter } => {
                write!(formatter, "{parameter}: argument must not be absent")
            }
            Self::InvalidArgument { parameter, index } => {
                write!(formatter, "{parameter}: element at index {index} is absent")
            }
            Self::UnsupportedOperation {
                container,
                operation,
            } => write!(
                formatter,
                "{container}::{operation}: the container is read-only"
            ),
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Records a refused call when the `tracing` feature is enabled.
#[inline]
pub(crate) fn trace_rejection(error: &CollectionError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(kind = ?error.kind(), %error, "collection call rejected");
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}
