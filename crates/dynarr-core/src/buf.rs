//! The move-only owning buffer.
//!
//! An [`OwnedBuf`] is the unique owner of one heap block of `T` slots.
//! Ownership transfer is a Rust move; the borrow checker forbids
//! use-after-move statically, and [`OwnedBuf::release`] or
//! [`std::mem::take`] drain a buffer in place when the handle itself must
//! stay usable. Copying is not implemented: at most one live owner per
//! block.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

/// Unique owner of a contiguous, fixed-length block of initialized slots.
///
/// The block is allocated once, at construction, and freed when the buffer
/// is dropped (unless drained first via [`release`](Self::release)). Every
/// slot holds a valid `T` at all times — default-constructed at allocation,
/// possibly moved-from later. The buffer does not track which slots its
/// creator considers live.
pub struct OwnedBuf<T> {
    slots: Box<[T]>,
}

impl<T> OwnedBuf<T> {
    /// Create a buffer that owns nothing. No allocation.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Allocate a block of `len` default-valued slots.
    ///
    /// `len == 0` produces a buffer that owns nothing. Allocation failure
    /// aborts via the global allocation handler; there is no recoverable
    /// error path.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        Self {
            slots: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }

    /// Adopt an externally allocated block, possibly empty.
    ///
    /// The buffer becomes the block's sole owner and frees it on drop.
    pub fn from_boxed(slots: Box<[T]>) -> Self {
        Self { slots }
    }

    /// Transfer the owned block out, leaving this buffer empty.
    ///
    /// The caller becomes responsible for the block; dropping the buffer
    /// afterwards is a no-op.
    pub fn release(&mut self) -> Box<[T]> {
        mem::take(&mut self.slots)
    }

    /// Number of slots in the owned block (0 if the buffer owns nothing).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer currently owns a block.
    pub fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    /// View of the whole block. Every slot is a valid `T`.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of the whole block.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Unchecked access to slot `index`. The low-level primitive behind the
    /// container's checked paths; prefer indexing unless the bound has
    /// already been established.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees index < self.slots.len().
        unsafe { self.slots.get_unchecked(index) }
    }

    /// Unchecked mutable access to slot `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: the caller guarantees index < self.slots.len().
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    /// Exchange owned blocks with `other`. O(1), no allocation, never
    /// panics. Swapping a buffer with itself is a no-op.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.slots, &mut other.slots);
    }
}

impl<T> Default for OwnedBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwnedBuf<T> {
    fn from(slots: Box<[T]>) -> Self {
        Self::from_boxed(slots)
    }
}

/// Checked slot access. Panics if `index >= len` — out-of-range indexing of
/// the raw block is a precondition violation, not a recoverable error.
impl<T> Index<usize> for OwnedBuf<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuf<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuf")
            .field("len", &self.slots.len())
            .finish()
    }
}
