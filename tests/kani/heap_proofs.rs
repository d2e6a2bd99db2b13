//! Invariant proofs for BoundedHeap
//!
//! These proofs verify, for arbitrary priorities:
//! - Heap property: parent <= child for all parent-child pairs
//! - Min correctness: the root holds the minimum priority
//! - Length consistency: len() tracks successful inserts and extracts

#[cfg(kani)]
use bounded_heap::BoundedHeap;

/// Proof: heap property holds after arbitrary inserts
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_heap_property_after_insert() {
    let mut heap = BoundedHeap::with_capacity(5);

    for _ in 0..5 {
        assert!(heap.insert(kani::any(), kani::any()).is_ok());
        assert!(heap.verify_heap_property());
    }
    assert!(heap.len() == 5);
}

/// Proof: the root is the minimum of everything inserted
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_peek_is_minimum() {
    let mut heap = BoundedHeap::with_capacity(4);

    let p1: i32 = kani::any();
    let p2: i32 = kani::any();
    let p3: i32 = kani::any();
    let p4: i32 = kani::any();
    for p in [p1, p2, p3, p4] {
        assert!(heap.insert(0, p).is_ok());
    }

    let min = p1.min(p2).min(p3).min(p4);
    assert!(heap.peek_min_priority() == Ok(min));
}

/// Proof: extraction yields non-decreasing priorities and keeps the invariant
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_order() {
    let mut heap = BoundedHeap::with_capacity(4);
    for _ in 0..4 {
        assert!(heap.insert(kani::any(), kani::any()).is_ok());
    }

    let mut last = i32::MIN;
    for remaining in (0..4).rev() {
        let pair = heap.extract_min_pair();
        assert!(pair.is_ok());
        if let Ok(pair) = pair {
            assert!(pair.priority >= last);
            last = pair.priority;
        }
        assert!(heap.len() == remaining);
        assert!(heap.verify_heap_property());
    }
    assert!(heap.is_empty());
}

/// Proof: merging two single-pair heaps keeps both pairs
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(4)]
fn verify_merge_size_and_min() {
    let mut a = BoundedHeap::with_capacity(1);
    let mut b = BoundedHeap::with_capacity(1);
    let pa: i32 = kani::any();
    let pb: i32 = kani::any();
    assert!(a.insert(1, pa).is_ok());
    assert!(b.insert(2, pb).is_ok());

    let merged = BoundedHeap::merged(&a, &b, 0);
    assert!(merged.is_ok());
    if let Ok(merged) = merged {
        assert!(merged.len() == 2);
        assert!(merged.capacity() == 2);
        assert!(merged.peek_min_priority() == Ok(pa.min(pb)));
    }
}
