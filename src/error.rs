//! Error type for bounded heap operations

use thiserror::Error;

/// Error type for heap operations
///
/// Every failure is reported to the immediate caller; the heap is left
/// exactly as it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A constructor was given arguments it cannot honor
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the arguments
        reason: &'static str,
    },
    /// The minimum was requested from a heap holding no pairs
    #[error("heap is empty")]
    EmptyHeap,
    /// An insert was attempted on a heap already at capacity
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded {
        /// The fixed capacity of the rejecting heap
        capacity: usize,
    },
}
