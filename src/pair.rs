//! The `(element, priority)` record stored in every heap slot

/// An element together with the priority it is ordered by
///
/// Lower priority values are extracted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    pub element: i32,
    pub priority: i32,
}

impl Pair {
    pub const fn new(element: i32, priority: i32) -> Self {
        Self { element, priority }
    }
}

/// Converts an `(element, priority)` tuple.
impl From<(i32, i32)> for Pair {
    fn from((element, priority): (i32, i32)) -> Self {
        Self::new(element, priority)
    }
}
