//! Benchmark workloads for the dynarr container.
//!
//! Provides deterministic fixture builders shared by the bench targets:
//!
//! - [`sequential_array`]: `0..n` pushed one at a time (exercises growth)
//! - [`prereserved_array`]: same contents, single up-front reservation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArray;

/// Build an array of `n` sequential values via bare `push`, taking the
/// amortized-doubling path from capacity 0.
pub fn sequential_array(n: usize) -> DynArray<u64> {
    let mut a = DynArray::new();
    for i in 0..n as u64 {
        a.push(i);
    }
    a
}

/// Build the same array with one up-front reservation, so no push
/// reallocates.
pub fn prereserved_array(n: usize) -> DynArray<u64> {
    let mut a = DynArray::with_capacity(n);
    for i in 0..n as u64 {
        a.push(i);
    }
    a
}
