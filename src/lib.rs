//! Bounded Binary Min-Heap for Rust
//!
//! This crate provides [`BoundedHeap`], a priority queue of `(element, priority)`
//! pairs of `i32`s backed by a single fixed-capacity buffer.
//!
//! # Features
//!
//! - **O(1)** peek at the minimum-priority pair
//! - **O(log n)** insert and extract-min via iterative trickle-up / trickle-down
//! - **Four ways to build**: empty (default or explicit capacity), from parallel
//!   priority/element slices, or as an independent copy merging two heaps
//! - **O(n) bulk build** through bottom-up heapify
//! - **Defined failures**: empty peeks/extracts, overflowing inserts and bad
//!   constructor arguments all return [`HeapError`]
//!
//! The capacity never changes after construction. Lower priority values come
//! out first; the order among equal priorities is unspecified.
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::{BoundedHeap, HeapError};
//!
//! let heap = BoundedHeap::from_parallel(&[5, 3, 8, 1], &[10, 20, 30, 40], 4, 2)?;
//! assert_eq!(heap.capacity(), 6);
//! assert_eq!(heap.len(), 4);
//!
//! let other = BoundedHeap::from_parallel(&[2], &[50], 1, 0)?;
//! let mut merged = BoundedHeap::merged(&heap, &other, 0)?;
//! assert_eq!(merged.extract_min()?, 40);
//! assert_eq!(merged.extract_min()?, 50);
//! assert!(!merged.is_full());
//!
//! let mut empty = BoundedHeap::new();
//! assert_eq!(empty.extract_min(), Err(HeapError::EmptyHeap));
//! # Ok::<(), HeapError>(())
//! ```

pub mod bounded;
pub mod error;
pub mod pair;

pub use bounded::{BoundedHeap, DEFAULT_CAPACITY};
pub use error::HeapError;
pub use pair::Pair;
