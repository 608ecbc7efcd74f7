//! Minimal growable array container built on an exclusive-ownership buffer.
//!
//! [`DynArray`] is a cut-down resizable sequence: size/capacity bookkeeping
//! over exactly one [`dynarr_core::OwnedBuf`], doubling growth, and in-place
//! element shifting for positional insert/remove. It exists for callers who
//! want the container's storage discipline to be auditable: every slot is
//! always a valid value, every allocation is a whole-buffer swap, and the
//! buffer is never shared.
//!
//! # Error tiers
//!
//! - [`DynArray::at`] returns [`ArrayError::OutOfRange`] — recoverable.
//! - `Index`, `insert`, and `remove` panic on out-of-range positions —
//!   precondition violations.
//! - Allocation failure aborts; the container does not handle it.
//!
//! # Example
//!
//! ```
//! use dynarr::dynarr;
//!
//! let mut a = dynarr![1, 2, 3, 4];
//! a.insert(2, 42);
//! assert_eq!(a, dynarr![1, 2, 42, 3, 4]);
//! a.remove(2);
//! assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod array;
mod error;

pub use array::DynArray;
pub use error::ArrayError;

/// Construct a [`DynArray`] from a literal list or a repeated value,
/// mirroring `vec!`.
///
/// - `dynarr![]` — empty array, capacity 0.
/// - `dynarr![v; n]` — `n` clones of `v`.
/// - `dynarr![a, b, c]` — elements in list order, `len == capacity == 3`.
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::DynArray::from_elem($value, $len)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::DynArray::from([$($value),+])
    };
}
