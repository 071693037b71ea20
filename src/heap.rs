use crate::error::Error;
use crate::sift::{sift_down, sift_up};
use core::cmp::Ordering;
use log::{debug, trace, warn};

/// Number of slots allocated by a new heap. Storage never shrinks below this.
pub const INITIAL_CAPACITY: usize = 50;

/// Capacity is multiplied by this when full, and divided by it when mostly empty.
pub const GROWTH_FACTOR: usize = 2;

/// A binary max-heap over element handles, ordered by a caller-supplied comparator.
///
/// The heap stores `E` values (usually references such as `&'a T`) and never looks
/// inside them; all ordering decisions go through `compare`, where `Greater` means
/// "higher priority". The element at the root is always one of maximum priority.
///
/// Capacity is managed explicitly: it starts at `INITIAL_CAPACITY`, doubles when an
/// insert finds the storage full, and halves after an extraction leaves the heap at
/// most a quarter full, but never below `INITIAL_CAPACITY`.
pub struct PriorityHeap<E, C> {
    items: Vec<E>,
    /// The logical capacity. `items.capacity()` may be larger if the allocator
    /// rounds up; the resize policy only looks at this value.
    capacity: usize,
    compare: C,
}

impl<E, C> PriorityHeap<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty heap with `INITIAL_CAPACITY` slots.
    pub fn new(compare: C) -> Result<Self, Error> {
        let mut items = Vec::new();
        items.try_reserve_exact(INITIAL_CAPACITY)?;
        Ok(Self {
            items,
            capacity: INITIAL_CAPACITY,
            compare,
        })
    }

    /// Creates a heap and inserts every element of `elements`, in order.
    ///
    /// If any insert fails, construction stops, the partial heap is released, and
    /// the error is returned.
    pub fn from_sequence<I>(elements: I, compare: C) -> Result<Self, Error>
    where
        I: IntoIterator<Item = E>,
    {
        let mut heap = Self::new(compare)?;
        for item in elements {
            heap.insert(item)?;
        }
        trace!("from_sequence: built heap with {} items", heap.len());
        Ok(heap)
    }

    /// Like `from_sequence`, but over optional elements. A `None` aborts
    /// construction with `Error::NullElement`.
    pub fn from_nullable_sequence<I>(elements: I, compare: C) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        let mut heap = Self::new(compare)?;
        for item in elements {
            heap.insert_nullable(item)?;
        }
        trace!("from_nullable_sequence: built heap with {} items", heap.len());
        Ok(heap)
    }

    /// Inserts an item into the partially-sorted heap.
    ///
    /// If storage has to grow and the allocation fails, the heap is left as it was.
    pub fn insert(&mut self, item: E) -> Result<(), Error> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        let index = self.items.len();
        self.items.push(item);
        sift_up(&mut self.items, index, &self.compare);
        #[cfg(test)]
        debug_assert!(self.check());
        Ok(())
    }

    /// Inserts `item` if it is present. `None` is rejected without touching the heap.
    pub fn insert_nullable(&mut self, item: Option<E>) -> Result<(), Error> {
        match item {
            Some(item) => self.insert(item),
            None => Err(Error::NullElement),
        }
    }

    /// Returns the greatest item without removing it.
    pub fn peek_max(&self) -> Option<&E> {
        self.items.first()
    }

    /// Removes the greatest item from the heap.
    pub fn extract_max(&mut self) -> Option<E> {
        if self.items.is_empty() {
            return None;
        }
        if self.items.len() == 1 {
            return self.items.pop();
        }
        let last_index = self.items.len() - 1;
        self.items.swap(0, last_index);
        let result = self.items.pop();
        let len = self.items.len();
        sift_down(&mut self.items, len, 0, &self.compare);

        let quarter = self.capacity / 4;
        if len <= quarter && quarter >= INITIAL_CAPACITY {
            self.shrink();
        }

        #[cfg(test)]
        debug_assert!(self.check());
        result
    }

    fn grow(&mut self) -> Result<(), Error> {
        let new_capacity = self
            .capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(Error::AllocationFailed)?;
        self.items.try_reserve_exact(new_capacity - self.items.len())?;
        debug!("grow: capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    // Moves the items into a smaller allocation. If that allocation can't be made
    // we simply keep the current one.
    fn shrink(&mut self) {
        let new_capacity = self.capacity / GROWTH_FACTOR;
        let mut items: Vec<E> = Vec::new();
        if items.try_reserve_exact(new_capacity).is_err() {
            warn!(
                "shrink: could not allocate {} slots, keeping capacity {}",
                new_capacity, self.capacity
            );
            return;
        }
        items.extend(self.items.drain(..));
        self.items = items;
        debug!("shrink: capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
    }

    /// Returns true if the max-heap property holds over every live item.
    /// This is a full O(n) scan, so it only runs under test.
    #[cfg(test)]
    pub(crate) fn check(&self) -> bool {
        crate::sift::is_heap(&self.items, &self.compare)
    }
}

impl<E: Ord> PriorityHeap<E, fn(&E, &E) -> Ordering> {
    /// Creates an empty heap ordered by `E`'s own `Ord` implementation.
    pub fn new_ord() -> Result<Self, Error> {
        Self::new(<E as Ord>::cmp)
    }
}

impl<E, C> PriorityHeap<E, C> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates the live items in storage order, which is not priority order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Removes every item. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Releases the heap and its storage. The items themselves are not visited.
    ///
    /// This is the same as `drop(heap)`; use `destroy_with` to visit the items.
    pub fn destroy(self) {
        trace!("destroy: releasing {} items", self.items.len());
    }

    /// Calls `cleanup` once for each remaining item, in storage order, then
    /// releases the heap.
    pub fn destroy_with<F: FnMut(E)>(self, mut cleanup: F) {
        trace!("destroy_with: cleaning up {} items", self.items.len());
        for item in self.items {
            cleanup(item);
        }
    }
}

use core::fmt::{Debug, Formatter};

impl<E: Debug, C> Debug for PriorityHeap<E, C> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q ({}/{}): ", self.items.len(), self.capacity)?;
        for item in self.items.iter() {
            write!(fmt, "{:?} ", item)?;
        }
        Ok(())
    }
}
