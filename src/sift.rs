//! Restoration primitives shared by `PriorityHeap` and `heap_sort`.
//!
//! All of these operate on a slice laid out as an implicit binary tree: the
//! children of `i` are at `2i + 1` and `2i + 2`. An element "outranks" another
//! only when the comparator returns `Greater`; `Equal` never causes a swap.

use core::cmp::Ordering;

pub(crate) fn left(parent: usize) -> usize { parent * 2 + 1 }
pub(crate) fn right(parent: usize) -> usize { parent * 2 + 2 }
pub(crate) fn parent(child: usize) -> usize { (child - 1) / 2 }

/// Moves the item at `pos` toward the root until its parent is not outranked by it.
pub fn sift_up<E, C>(items: &mut [E], mut pos: usize, compare: &C)
where
    C: Fn(&E, &E) -> Ordering,
{
    while pos > 0 {
        let parent = parent(pos);
        if compare(&items[pos], &items[parent]) != Ordering::Greater {
            break;
        }
        items.swap(pos, parent);
        pos = parent;
    }
}

/// Moves the item at `pos` away from the root, considering only the first `len` items.
pub fn sift_down<E, C>(items: &mut [E], len: usize, mut pos: usize, compare: &C)
where
    C: Fn(&E, &E) -> Ordering,
{
    debug_assert!(len <= items.len());
    loop {
        let left = left(pos);
        let right = right(pos);
        let mut max = pos;
        if left < len && compare(&items[left], &items[max]) == Ordering::Greater {
            max = left;
        }
        if right < len && compare(&items[right], &items[max]) == Ordering::Greater {
            max = right;
        }
        if max == pos {
            break;
        }
        items.swap(pos, max);
        pos = max;
    }
}

/// Establishes the max-heap property over all of `items`, in place.
pub fn heapify<E, C>(items: &mut [E], compare: &C)
where
    C: Fn(&E, &E) -> Ordering,
{
    let len = items.len();
    // leaves are already heaps; start at the last internal node
    for i in (0..len / 2).rev() {
        sift_down(items, len, i, compare);
    }
}

/// Returns true if no child in `items` outranks its parent.
pub fn is_heap<E, C>(items: &[E], compare: &C) -> bool
where
    C: Fn(&E, &E) -> Ordering,
{
    (1..items.len()).all(|i| compare(&items[i], &items[parent(i)]) != Ordering::Greater)
}
