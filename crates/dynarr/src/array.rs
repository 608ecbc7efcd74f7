//! The growable array container.
//!
//! A [`DynArray`] pairs one [`OwnedBuf`] with a logical length. Slots
//! `[0, len)` are the live elements; slots `[len, capacity)` are allocated
//! but hold unspecified (default or moved-from) values. Growth allocates a
//! fresh buffer, moves the live prefix across, and swaps it in — the
//! container never touches storage except through the buffer.
//!
//! Growth doubles capacity to amortize appends to O(1); the zero-capacity
//! case promotes to 1 so doubling has somewhere to start.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use dynarr_core::OwnedBuf;

use crate::error::ArrayError;

/// A minimal growable array over an exclusive-ownership buffer.
///
/// The contract mirrors a cut-down `Vec`: O(1) accessors, amortized-O(1)
/// append, O(n) positional insert/remove via in-place element shifting.
/// Elements must be `Default` for the operations that grow or vacate slots,
/// because every allocated slot always holds a valid value.
///
/// # Address stability
///
/// Any operation that reallocates (`reserve` past capacity, `push`/`insert`
/// when full, `resize` past capacity) moves every element. `insert` and
/// `remove` without reallocation disturb addresses at or after the mutation
/// point only. `clear`, `swap`, and a no-op `reserve` never move elements.
pub struct DynArray<T> {
    buf: OwnedBuf<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array. No allocation; capacity is 0.
    pub fn new() -> Self {
        Self {
            buf: OwnedBuf::new(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots. Always at least [`len`](Self::len).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buf.as_slice()[..self.len]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf.as_mut_slice()[..self.len]
    }

    /// Checked access: a reference to element `index`, or
    /// [`ArrayError::OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len: self.len })
    }

    /// Checked mutable access, same contract as [`at`](Self::at).
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Unchecked access to element `index`. Escape hatch mirroring the
    /// buffer's primitive; distinct from the checked `Index` path and from
    /// the error-returning [`at`](Self::at).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees index < self.len <= buffer slots.
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Unchecked mutable access to element `index`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees index < self.len <= buffer slots.
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Drop all elements logically: `len` becomes 0. Capacity and slot
    /// contents are untouched.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchange contents with `other`: buffer ownership, length, and
    /// capacity all swap. O(1), no allocation, never panics. Element
    /// addresses travel with their buffer.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }
}

impl<T: Default> DynArray<T> {
    /// Create an array of `len` default-valued elements
    /// (`len == capacity == n`).
    pub fn with_len(len: usize) -> Self {
        Self {
            buf: OwnedBuf::with_len(len),
            len,
        }
    }

    /// Create an empty array with `capacity` slots pre-allocated.
    ///
    /// A hint of 0 keeps capacity at 0; the zero-to-one promotion belongs
    /// to [`reserve`](Self::reserve) alone.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: OwnedBuf::with_len(capacity),
            len: 0,
        }
    }

    /// Take the contents out, leaving this array empty
    /// (`len == capacity == 0`).
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Ensure capacity is at least `capacity`, never shrinking.
    ///
    /// A request of 0 is treated as 1 — that is what lets the growth paths
    /// call `reserve(2 * capacity)` from a zero-capacity array. A request
    /// at or below the current capacity is a strict no-op: no reallocation,
    /// element addresses unchanged. Otherwise a buffer of exactly
    /// `capacity` slots is allocated, the live prefix is moved across, and
    /// the trailing slots are left default-valued.
    pub fn reserve(&mut self, capacity: usize) {
        let want = capacity.max(1);
        if want <= self.capacity() {
            return;
        }
        self.grow_to(want);
    }

    /// Append `value`, growing by the doubling rule when full
    /// (capacity 0 → 1, else ×2). Amortized O(1).
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.reserve(self.capacity() * 2);
        }
        self.buf[self.len] = value;
        self.len += 1;
    }

    /// Remove and return the last element, or `None` if the array is
    /// empty. The vacated slot is left default-valued.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(mem::take(&mut self.buf[self.len]))
    }

    /// Insert `value` at position `index`, shifting `[index, len)` one slot
    /// tailward by move. Grows exactly like [`push`](Self::push) when full.
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. Inserting at `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        assert!(
            index <= self.len,
            "insert index {index} out of range for length {}",
            self.len
        );
        if self.len == self.capacity() {
            self.reserve(self.capacity() * 2);
        }
        let len = self.len;
        let slots = self.buf.as_mut_slice();
        // The slot at `len` holds a default/moved-from value; it rotates to
        // `index` and is immediately overwritten.
        slots[index..=len].rotate_right(1);
        slots[index] = value;
        self.len += 1;
        &mut self.buf[index]
    }

    /// Remove and return the element at position `index`, shifting
    /// `[index + 1, len)` one slot headward by move. The element that
    /// followed the removed one ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "remove index {index} out of range for length {}",
            self.len
        );
        let len = self.len;
        let slots = self.buf.as_mut_slice();
        slots[index..len].rotate_left(1);
        self.len -= 1;
        mem::take(&mut slots[len - 1])
    }

    /// Set the logical length to `new_len`.
    ///
    /// Three independent cases:
    /// - `new_len == len`: no-op.
    /// - `new_len < len`: truncate; capacity and slot contents untouched.
    /// - `new_len > len`: grow capacity to `max(2 * capacity, new_len)` if
    ///   needed, then overwrite `[len, new_len)` with fresh defaults. The
    ///   overwrite is unconditional so values stranded by an earlier
    ///   truncation never resurface.
    pub fn resize(&mut self, new_len: usize) {
        match new_len.cmp(&self.len) {
            Ordering::Equal => {}
            Ordering::Less => self.len = new_len,
            Ordering::Greater => {
                if new_len > self.capacity() {
                    let doubled = self.capacity() * 2;
                    self.grow_to(doubled.max(new_len));
                }
                for slot in &mut self.buf.as_mut_slice()[self.len..new_len] {
                    *slot = T::default();
                }
                self.len = new_len;
            }
        }
    }

    /// Allocate a buffer of exactly `new_cap` slots and move the live
    /// prefix into it. Trailing slots keep their fresh default values.
    fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.capacity());
        let mut next = OwnedBuf::with_len(new_cap);
        next.as_mut_slice()[..self.len]
            .swap_with_slice(&mut self.buf.as_mut_slice()[..self.len]);
        self.buf = next;
    }
}

impl<T: Clone> DynArray<T> {
    /// Create an array of `len` clones of `value`
    /// (`len == capacity == n`).
    pub fn from_elem(value: T, len: usize) -> Self {
        vec![value; len].into()
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy owns an independent buffer sized to the source's
/// length — capacity is deliberately not preserved.
impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let slots: Box<[T]> = self.as_slice().to_vec().into_boxed_slice();
        let len = slots.len();
        Self {
            buf: OwnedBuf::from_boxed(slots),
            len,
        }
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(values: Vec<T>) -> Self {
        let slots = values.into_boxed_slice();
        let len = slots.len();
        Self {
            buf: OwnedBuf::from_boxed(slots),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynArray<T> {
    fn from(values: [T; N]) -> Self {
        let slots: Box<[T]> = Box::new(values);
        Self {
            buf: OwnedBuf::from_boxed(slots),
            len: N,
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T: Default> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Checked fast-path access. Panics if `index >= len` — the
/// precondition-violation tier; use [`DynArray::at`] for the recoverable
/// one.
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len;
        let mut values = self.buf.release().into_vec();
        values.truncate(len);
        values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Element-wise equality over the live prefix; capacity is ignored.
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// Lexicographic order over the live prefix, by the element's order.
impl<T: PartialOrd> PartialOrd for DynArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
