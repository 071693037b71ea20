use crate::heap::PriorityHeap;
use core::cmp::Ordering;
use core::fmt::Debug;

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn int_cmp(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

/// Checks the structural invariants of `heap`: the max-heap property over the
/// live items and `len <= capacity`.
pub fn assert_heap<E: Debug, C>(heap: &PriorityHeap<E, C>)
where
    C: Fn(&E, &E) -> Ordering,
{
    assert!(
        heap.len() <= heap.capacity(),
        "len {} exceeds capacity {}",
        heap.len(),
        heap.capacity()
    );
    assert!(heap.check(), "heap property violated: {:?}", heap);
}

/// Extracts everything from `heap`, returning the items in extraction order.
pub fn drain_heap<E: Debug, C>(heap: &mut PriorityHeap<E, C>) -> Vec<E>
where
    C: Fn(&E, &E) -> Ordering,
{
    let mut out = Vec::with_capacity(heap.len());
    while let Some(item) = heap.extract_max() {
        assert_heap(heap);
        out.push(item);
    }
    out
}
