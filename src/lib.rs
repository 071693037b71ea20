//! A binary max-heap over element handles ordered by a caller-supplied
//! comparator, and an in-place heapsort built on the same sift primitives.

pub mod error;
pub mod heap;
pub mod heap_sort;
pub mod sift;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::heap::{PriorityHeap, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use crate::heap_sort::{heap_sort, heap_sort_ord};
