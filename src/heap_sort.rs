use crate::sift::{heapify, sift_down};
use core::cmp::Ordering;

/// Sorts `items` in place into ascending order under `compare`.
///
/// The slice is first turned into a max-heap, then the root is repeatedly parked
/// at the end of the shrinking unsorted prefix. Uses no extra storage. Not stable.
pub fn heap_sort<E, C>(items: &mut [E], compare: C)
where
    C: Fn(&E, &E) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    heapify(items, &compare);
    for end in (1..items.len()).rev() {
        items.swap(0, end);
        sift_down(items, end, 0, &compare);
    }
}

/// Sorts `items` in place using their `Ord` implementation.
pub fn heap_sort_ord<E: Ord>(items: &mut [E]) {
    heap_sort(items, <E as Ord>::cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heap::PriorityHeap;
    use crate::testing::*;
    use log::info;

    #[test]
    fn heap_sort_test() {
        init_test();

        fn case(description: &str, input: &[i32]) {
            info!("testing: {}", description);
            let mut actual = input.to_vec();
            heap_sort(&mut actual, int_cmp);
            let mut expected = input.to_vec();
            expected.sort();
            assert_eq!(actual, expected, "(actual : expected) {:?}", description);
        }

        case("empty", &[]);
        case("one", &[1]);
        case("two reversed", &[2, 1]);
        case("scenario", &[5, 3, 8, 1, 9, 2]);
        case("already sorted", &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        case("reversed", &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        case("all equal", &[4, 4, 4, 4, 4]);
        case("duplicates", &[3, 1, 3, 1, 2, 2, 3]);
        case("negative", &[0, -3, 12, -7, 5]);
    }

    #[test]
    fn reverse_of_extraction_order() {
        init_test();
        // a fixed pseudo-random sequence
        let input: Vec<i32> = (0..257).map(|i| (i * 7919) % 1009 - 500).collect();

        let mut heap = PriorityHeap::from_sequence(input.iter().copied(), int_cmp).unwrap();
        let mut extracted = drain_heap(&mut heap);

        let mut sorted = input.clone();
        heap_sort(&mut sorted, int_cmp);

        extracted.reverse();
        assert_eq!(sorted, extracted);
    }

    #[test]
    fn sorts_references_by_key() {
        let words = ["pear", "fig", "banana", "kiwi", "apple"];
        let mut refs: Vec<&&str> = words.iter().collect();
        heap_sort(&mut refs, |a: &&&str, b: &&&str| a.len().cmp(&b.len()));
        let lengths: Vec<usize> = refs.iter().map(|w| w.len()).collect();
        assert_eq!(lengths, [3, 4, 4, 5, 6]);
        // the underlying array is not reordered
        assert_eq!(words[0], "pear");
    }

    #[test]
    fn heap_sort_ord_test() {
        let mut items = vec!['q', 'a', 'z', 'm'];
        heap_sort_ord(&mut items);
        assert_eq!(items, ['a', 'm', 'q', 'z']);
    }
}
