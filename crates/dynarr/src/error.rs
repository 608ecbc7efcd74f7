//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the checked access paths of
/// [`DynArray`](crate::DynArray).
///
/// Only the checked accessors produce recoverable errors. Out-of-range
/// indexing through `Index`, or an out-of-range position passed to
/// `insert`/`remove`, is a precondition violation and panics instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested index is at or past the array's logical length.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The array's logical length at the time of the request.
        len: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = ArrayError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for array of length 3"
        );
    }
}
