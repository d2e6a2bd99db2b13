//! Bounded Binary Heap implementation
//!
//! A binary min-heap of [`Pair`]s stored in a single contiguous buffer whose
//! capacity is fixed when the heap is built. Inserting into a full heap is
//! rejected with [`HeapError::CapacityExceeded`]; the buffer never grows.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `extract_min`   | O(log n)   |
//! | `peek_min`      | O(1)       |
//! | `from_parallel` | O(n log n) |
//! | `merged`        | O(n log n) |
//! | `heapified`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use bounded_heap::BoundedHeap;
//!
//! let mut heap = BoundedHeap::with_capacity(3);
//! heap.insert(30, 3)?;
//! heap.insert(10, 1)?;
//! heap.insert(20, 2)?;
//! assert!(heap.insert(40, 4).is_err());
//!
//! assert_eq!(heap.peek_min_priority()?, 1);
//! assert_eq!(heap.extract_min()?, 10);
//! assert_eq!(heap.extract_min()?, 20);
//! assert_eq!(heap.extract_min()?, 30);
//! assert!(heap.extract_min().is_err());
//! # Ok::<(), bounded_heap::HeapError>(())
//! ```

use std::mem;

use log::{debug, trace};

use crate::error::HeapError;
use crate::pair::Pair;

/// Capacity used by [`BoundedHeap::new`] and [`Default`]
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-capacity binary min-heap
///
/// Slots `[0, len)` of the buffer hold valid pairs laid out as an implicit
/// binary tree: the children of index `i` live at `2i + 1` and `2i + 2`, and
/// no child has a smaller priority than its parent. Only index 0 is
/// guaranteed to hold the minimum.
///
/// Ties are broken by the algorithm, not by insertion order; callers must not
/// rely on the order in which equal priorities come out.
#[derive(Debug, Clone)]
pub struct BoundedHeap {
    /// Heap-ordered pairs; the vector length is the heap size
    data: Vec<Pair>,
    capacity: usize,
}

impl BoundedHeap {
    /// Creates an empty heap with [`DEFAULT_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty heap that holds at most `capacity` pairs
    ///
    /// The whole buffer is allocated up front.
    ///
    /// # Panics
    /// Panics if the buffer cannot be allocated, like [`Vec::with_capacity`].
    /// The slice and merge constructors report that case as
    /// [`HeapError::InvalidArgument`] instead.
    pub fn with_capacity(capacity: usize) -> Self {
        trace!("bounded heap: empty, capacity {}", capacity);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Builds a heap from parallel priority and element slices
    ///
    /// The result holds the pairs `(elements[i], priorities[i])` for
    /// `i < count` and has capacity `count + spare`. Pairs are inserted one at
    /// a time, so the ordering invariant holds after every step.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if either slice is shorter than
    /// `count`, if `count + spare` does not fit in a `usize`, or if a buffer
    /// of that capacity cannot be allocated.
    pub fn from_parallel(
        priorities: &[i32],
        elements: &[i32],
        count: usize,
        spare: usize,
    ) -> Result<Self, HeapError> {
        let capacity = check_parallel(priorities, elements, count, spare)?;
        let mut heap = Self {
            data: allocate(capacity)?,
            capacity,
        };
        for (&priority, &element) in priorities[..count].iter().zip(&elements[..count]) {
            heap.insert(element, priority)?;
        }
        trace!(
            "bounded heap: built {} pairs by insertion, capacity {}",
            count,
            capacity
        );
        Ok(heap)
    }

    /// Builds a heap holding copies of every pair in `first` and `second`
    ///
    /// The capacity is `first.len() + second.len() + spare`. Every pair of
    /// `first` is inserted, then every pair of `second`; neither source is
    /// modified and the new heap shares no storage with them.
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the combined capacity does
    /// not fit in a `usize` or cannot be allocated.
    pub fn merged(first: &Self, second: &Self, spare: usize) -> Result<Self, HeapError> {
        let capacity = first
            .len()
            .checked_add(second.len())
            .and_then(|n| n.checked_add(spare))
            .ok_or_else(|| invalid("merged capacity overflows usize"))?;

        let mut heap = Self {
            data: allocate(capacity)?,
            capacity,
        };
        for pair in first.data.iter().chain(&second.data) {
            heap.insert(pair.element, pair.priority)?;
        }
        trace!(
            "bounded heap: merged {} + {} pairs, capacity {}",
            first.len(),
            second.len(),
            capacity
        );
        Ok(heap)
    }

    /// Builds a heap from parallel slices in O(count) using bottom-up heapify
    ///
    /// Takes the same arguments as [`from_parallel`](Self::from_parallel) and
    /// holds the same pairs, but copies them in array order and then sifts
    /// down from the last internal node to the root. The resulting layout
    /// (and so the order among equal priorities) may differ from the
    /// one-at-a-time build.
    ///
    /// # Errors
    /// Same as [`from_parallel`](Self::from_parallel).
    pub fn heapified(
        priorities: &[i32],
        elements: &[i32],
        count: usize,
        spare: usize,
    ) -> Result<Self, HeapError> {
        let capacity = check_parallel(priorities, elements, count, spare)?;
        let mut data = allocate(capacity)?;
        data.extend(
            priorities[..count]
                .iter()
                .zip(&elements[..count])
                .map(|(&priority, &element)| Pair::new(element, priority)),
        );

        let mut heap = Self { data, capacity };
        heap.heapify();
        trace!(
            "bounded heap: heapified {} pairs, capacity {}",
            count,
            capacity
        );
        Ok(heap)
    }

    /// Returns true if the heap holds no pairs
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of pairs in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the maximum number of pairs the heap can hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many more pairs can be inserted
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Returns true if the next insert would be rejected
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn peek_min(&self) -> Result<i32, HeapError> {
        self.peek_min_pair().map(|pair| pair.element)
    }

    /// Returns the minimum priority without removing its pair
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn peek_min_priority(&self) -> Result<i32, HeapError> {
        self.peek_min_pair().map(|pair| pair.priority)
    }

    /// Returns a copy of the minimum pair without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn peek_min_pair(&self) -> Result<Pair, HeapError> {
        self.data.first().copied().ok_or(HeapError::EmptyHeap)
    }

    /// Inserts `element` with the given `priority`
    ///
    /// The pair becomes a new leaf and trickles up while its priority is
    /// strictly smaller than its parent's; equal priorities never swap.
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] if the heap is full. The heap
    /// is unchanged in that case.
    pub fn insert(&mut self, element: i32, priority: i32) -> Result<(), HeapError> {
        if self.is_full() {
            debug!(
                "bounded heap: rejected insert of ({}, {}), capacity {} reached",
                element, priority, self.capacity
            );
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.data.push(Pair::new(element, priority));
        self.trickle_up(self.data.len() - 1);
        Ok(())
    }

    /// Removes the pair with the minimum priority and returns its element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn extract_min(&mut self) -> Result<i32, HeapError> {
        self.extract_min_pair().map(|pair| pair.element)
    }

    /// Removes and returns the pair with the minimum priority
    ///
    /// The last leaf replaces the root and trickles down. When both children
    /// exist the strictly smaller one is chosen, so equal children resolve to
    /// the left.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn extract_min_pair(&mut self) -> Result<Pair, HeapError> {
        let last = self.data.pop().ok_or(HeapError::EmptyHeap)?;
        if self.data.is_empty() {
            return Ok(last);
        }

        let min = mem::replace(&mut self.data[0], last);
        self.trickle_down(0);
        Ok(min)
    }

    /// Removes every pair, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the min-heap ordering over the whole buffer
    ///
    /// Returns false if any child has a smaller priority than its parent, or
    /// if the heap holds more pairs than its capacity. Intended for tests and
    /// debugging; O(n).
    pub fn verify_heap_property(&self) -> bool {
        self.data.len() <= self.capacity
            && (1..self.data.len())
                .all(|child| self.data[(child - 1) / 2].priority <= self.data[child].priority)
    }

    /// Move the pair at index up until its parent is no larger
    fn trickle_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].priority < self.data[parent].priority {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the pair at index down until no existing child is smaller
    ///
    /// Child existence is decided by comparing its index against the length.
    fn trickle_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let child = if right < len && self.data[right].priority < self.data[left].priority {
                right
            } else {
                left
            };

            if self.data[child].priority < self.data[index].priority {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Establish the ordering invariant over the whole buffer
    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.trickle_down(index);
        }
    }
}

impl Default for BoundedHeap {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(reason: &'static str) -> HeapError {
    debug!("bounded heap: invalid argument: {}", reason);
    HeapError::InvalidArgument { reason }
}

/// Reserves the full buffer, reporting allocation failure as a bad argument
fn allocate(capacity: usize) -> Result<Vec<Pair>, HeapError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|_| invalid("capacity too large to allocate"))?;
    Ok(data)
}

/// Validates parallel-slice constructor arguments, returning the capacity
fn check_parallel(
    priorities: &[i32],
    elements: &[i32],
    count: usize,
    spare: usize,
) -> Result<usize, HeapError> {
    if priorities.len() < count {
        return Err(invalid("priorities shorter than count"));
    }
    if elements.len() < count {
        return Err(invalid("elements shorter than count"));
    }
    count
        .checked_add(spare)
        .ok_or_else(|| invalid("count + spare overflows usize"))
}
