//! End-to-end replay of the container's public contract: every constructor
//! form, every mutator, comparison semantics, growth behavior, and
//! move/ownership checks — the scenarios an external consumer relies on.

use dynarr::{dynarr, ArrayError, DynArray};
use std::ptr;

#[test]
fn constructor_forms() {
    let default: DynArray<i32> = DynArray::new();
    assert_eq!(default.len(), 0);
    assert_eq!(default.capacity(), 0);
    assert!(default.is_empty());

    let sized: DynArray<i32> = DynArray::with_len(5);
    assert_eq!(sized.len(), 5);
    assert_eq!(sized.capacity(), 5);
    assert!(!sized.is_empty());
    assert!(sized.iter().all(|&v| v == 0));

    let filled = dynarr![42; 3];
    assert_eq!(filled.len(), 3);
    assert_eq!(filled.capacity(), 3);
    assert!(filled.iter().all(|&v| v == 42));

    let listed = dynarr![1, 2, 3];
    assert_eq!(listed.len(), 3);
    assert_eq!(listed.capacity(), 3);
    assert_eq!(listed[2], 3);

    let hinted: DynArray<i32> = DynArray::with_capacity(5);
    assert_eq!(hinted.capacity(), 5);
    assert!(hinted.is_empty());

    let zero_hint: DynArray<i32> = DynArray::with_capacity(0);
    assert_eq!(zero_hint.capacity(), 0);
}

#[test]
fn checked_access_tiers() {
    let a: DynArray<i32> = DynArray::with_len(3);
    // The checked accessor aliases the same element as indexing.
    assert!(ptr::eq(a.at(2).unwrap(), &a[2]));
    // Out of range is a recoverable, descriptive error.
    let err = a.at(3).unwrap_err();
    assert_eq!(err, ArrayError::OutOfRange { index: 3, len: 3 });
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn growth_amortization_from_zero() {
    let mut a = DynArray::new();
    a.push(10);
    assert_eq!(a.capacity(), 1);
    a.push(20);
    assert_eq!(a.capacity(), 2);
    a.push(30);
    assert_eq!(a.capacity(), 4);
    a.push(40);
    a.push(50);
    assert_eq!(a.capacity(), 8);
    assert_eq!(a.as_slice(), &[10, 20, 30, 40, 50]);
}

#[test]
fn insert_and_remove_scenarios() {
    let mut a = dynarr![1, 2, 3, 4];
    a.insert(2, 42);
    assert_eq!(a, dynarr![1, 2, 42, 3, 4]);

    let mut b = dynarr![1, 2, 3, 4];
    assert_eq!(b.remove(2), 3);
    assert_eq!(b, dynarr![1, 2, 4]);
}

#[test]
fn reserve_method_contract() {
    let mut a: DynArray<i32> = DynArray::new();
    a.reserve(5);
    assert_eq!(a.capacity(), 5);
    assert!(a.is_empty());

    // Shrinking request: capacity unchanged.
    a.reserve(1);
    assert_eq!(a.capacity(), 5);

    for i in 0..10 {
        a.push(i);
    }
    assert_eq!(a.len(), 10);

    a.reserve(100);
    assert_eq!(a.len(), 10);
    assert_eq!(a.capacity(), 100);
    for i in 0..10 {
        assert_eq!(a[i as usize], i);
    }
}

#[test]
fn pop_is_logical_truncation() {
    let mut a = dynarr![0, 1, 2, 3];
    let cap = a.capacity();
    let begin: *const i32 = &a[0];
    a.pop();
    assert_eq!(a.capacity(), cap);
    assert!(ptr::eq(&a[0], begin));
    assert_eq!(a, dynarr![0, 1, 2]);
}

#[test]
fn deep_copy_independence() {
    let numbers = dynarr![1, 2];
    let copy = numbers.clone();
    assert!(!ptr::eq(&copy[0], &numbers[0]));
    assert_eq!(copy.len(), numbers.len());
    for i in 0..numbers.len() {
        assert_eq!(copy[i], numbers[i]);
        assert!(!ptr::eq(&copy[i], &numbers[i]));
    }
}

#[test]
fn assignment_replaces_contents() {
    let src = dynarr![1, 2, 3, 4];
    let mut dst = dynarr![1, 2, 3, 4, 5, 6];
    dst.clone_from(&src);
    assert_eq!(dst, src);
}

#[test]
fn swap_is_pointer_exchange() {
    let mut v1 = dynarr![42, 666];
    let mut v2 = DynArray::new();
    v2.push(0);
    v2.push(1);
    v2.push(2);

    let begin1: *const i32 = &v1[0];
    let begin2: *const i32 = &v2[0];
    let (cap1, cap2) = (v1.capacity(), v2.capacity());
    let (len1, len2) = (v1.len(), v2.len());

    v1.swap(&mut v2);
    assert!(ptr::eq(&v2[0], begin1));
    assert!(ptr::eq(&v1[0], begin2));
    assert_eq!(v1.len(), len2);
    assert_eq!(v2.len(), len1);
    assert_eq!(v1.capacity(), cap2);
    assert_eq!(v2.capacity(), cap1);
}

#[test]
fn move_transfers_and_take_empties() {
    fn generate(len: usize) -> DynArray<i64> {
        let mut a = DynArray::with_capacity(len);
        a.extend(1..=len as i64);
        a
    }

    // Returning by value transfers the buffer.
    let moved = generate(100_000);
    assert_eq!(moved.len(), 100_000);
    assert_eq!(moved[99_999], 100_000);

    // Draining in place leaves the source empty.
    let mut source = generate(1_000);
    let drained = source.take();
    assert_eq!(drained.len(), 1_000);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
}

// A payload that cannot be copied: only moved or default-constructed.
#[derive(Debug, Default, PartialEq)]
struct Payload(usize);

#[test]
fn move_only_push_and_indexing() {
    let mut a = DynArray::new();
    for i in 0..5 {
        a.push(Payload(i));
    }
    assert_eq!(a.len(), 5);
    for i in 0..5 {
        assert_eq!(a[i].0, i);
    }
}

#[test]
fn move_only_insert_at_begin_end_middle() {
    let size = 5;
    let mut a = DynArray::new();
    for i in 0..size {
        a.push(Payload(i));
    }

    a.insert(0, Payload(size + 1));
    assert_eq!(a.len(), size + 1);
    assert_eq!(a[0].0, size + 1);

    let end = a.len();
    a.insert(end, Payload(size + 2));
    assert_eq!(a.len(), size + 2);
    assert_eq!(a[a.len() - 1].0, size + 2);

    a.insert(3, Payload(size + 3));
    assert_eq!(a.len(), size + 3);
    assert_eq!(a[3].0, size + 3);
}

#[test]
fn move_only_remove_and_resize() {
    let mut a = DynArray::new();
    for i in 0..3 {
        a.push(Payload(i));
    }
    assert_eq!(a.remove(0), Payload(0));
    // The element that followed now lives at the removed position.
    assert_eq!(a[0].0, 1);

    a.resize(6);
    assert_eq!(a.len(), 6);
    assert_eq!(a[5], Payload::default());
}

#[test]
fn take_via_mem_replace() {
    let mut holder = dynarr![7, 8, 9];
    let grabbed = std::mem::take(&mut holder);
    assert_eq!(grabbed, dynarr![7, 8, 9]);
    assert!(holder.is_empty());
    assert_eq!(holder.capacity(), 0);

    // The emptied array is fully usable again.
    holder.push(1);
    assert_eq!(holder.as_slice(), &[1]);
}
