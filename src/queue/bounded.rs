//! Fixed-capacity top-K heap.

use std::mem;

use crate::error::{Error, Result};

/// Outcome of [`BoundedTopKQueue::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission<T> {
    /// The queue had room and took the item.
    Inserted,
    /// The queue was full; the item displaced the returned minimum.
    Replaced(T),
    /// The queue was full and the item did not beat its minimum.
    Rejected(T),
}

impl<T> Admission<T> {
    /// Returns `true` if the item is now held by the queue.
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Admission::Rejected(_))
    }
}

/// Retains the `capacity` greatest items ever inserted.
///
/// Items are kept in a binary heap whose root (slot 0) is the smallest
/// retained item, so the eviction candidate is always at hand:
///
/// - below capacity, `insert` always succeeds (O(log K));
/// - at capacity, an item strictly greater than the minimum replaces it
///   (O(log K)); anything else is rejected unchanged.
///
/// On overflow the queue always evicts its minimum, never its maximum.
/// Ties between equal items are resolved by arrival order only
/// incidentally; no stability is promised.
///
/// # Examples
///
/// ```
/// use roommate_search::queue::BoundedTopKQueue;
///
/// let mut queue = BoundedTopKQueue::new(3).unwrap();
/// for x in [5, 1, 9, 7, 3] {
///     queue.insert(x);
/// }
/// assert_eq!(queue.into_sorted_vec(), vec![5, 7, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedTopKQueue<T: Ord> {
    items: Vec<T>,
    capacity: usize,
}

impl<T: Ord> BoundedTopKQueue<T> {
    /// Creates an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "queue capacity must be at least 1".into(),
            ));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The smallest retained item.
    pub fn peek_min(&self) -> Option<&T> {
        self.items.first()
    }

    /// The greatest retained item (O(K) scan of the leaves).
    pub fn peek_max(&self) -> Option<&T> {
        self.max_index().map(|i| &self.items[i])
    }

    /// Offers `item` to the queue.
    pub fn insert(&mut self, item: T) -> Admission<T> {
        if self.items.len() < self.capacity {
            self.items.push(item);
            self.sift_up(self.items.len() - 1);
            return Admission::Inserted;
        }
        if item > self.items[0] {
            let evicted = mem::replace(&mut self.items[0], item);
            self.sift_down(0);
            Admission::Replaced(evicted)
        } else {
            Admission::Rejected(item)
        }
    }

    /// Removes and returns the smallest retained item.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Removes and returns the greatest retained item.
    pub fn pop_max(&mut self) -> Option<T> {
        let index = self.max_index()?;
        let item = self.items.swap_remove(index);
        if index < self.items.len() {
            self.sift_up(index);
            self.sift_down(index);
        }
        Some(item)
    }

    /// Empties the queue, returning its items in ascending order.
    ///
    /// The queue keeps its capacity and can be reused for the next round.
    pub fn drain_ascending(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(item) = self.pop_min() {
            out.push(item);
        }
        out
    }

    /// Consumes the queue, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_ascending()
    }

    /// Like [`drain_ascending`](Self::drain_ascending) but fails with
    /// [`Error::EmptyQueue`] when nothing was retained.
    pub fn drain_nonempty(&mut self) -> Result<Vec<T>> {
        if self.items.is_empty() {
            return Err(Error::EmptyQueue);
        }
        Ok(self.drain_ascending())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the retained items in heap order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn max_index(&self) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        // The maximum of a min-heap sits in the second half.
        (len / 2..len).max_by(|&a, &b| self.items[a].cmp(&self.items[b]))
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i] < self.items[parent] {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[smallest] < self.items[i] {
                self.items.swap(i, smallest);
                i = smallest;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::Rng;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            BoundedTopKQueue::<i32>::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_insert_below_capacity_always_succeeds() {
        let mut queue = BoundedTopKQueue::new(4).unwrap();
        for x in [3, -8, 100, 0] {
            assert_eq!(queue.insert(x), Admission::Inserted);
        }
        assert!(queue.is_full());
        assert_eq!(queue.peek_min(), Some(&-8));
        assert_eq!(queue.peek_max(), Some(&100));
    }

    #[test]
    fn test_overflow_evicts_minimum_not_maximum() {
        let mut queue = BoundedTopKQueue::new(3).unwrap();
        queue.insert(10);
        queue.insert(30);
        queue.insert(20);
        assert_eq!(queue.insert(25), Admission::Replaced(10));
        assert_eq!(queue.peek_max(), Some(&30));
        assert_eq!(queue.into_sorted_vec(), vec![20, 25, 30]);
    }

    #[test]
    fn test_not_better_than_minimum_is_rejected() {
        let mut queue = BoundedTopKQueue::new(2).unwrap();
        queue.insert(5);
        queue.insert(6);
        assert_eq!(queue.insert(5), Admission::Rejected(5));
        assert_eq!(queue.insert(1), Admission::Rejected(1));
        assert!(!Admission::Rejected(1).is_admitted());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_capacity_five_keeps_five() {
        let mut rng = create_rng(42);
        let mut queue = BoundedTopKQueue::new(5).unwrap();
        let mut all = Vec::new();
        for _ in 0..10 {
            let x: i32 = rng.random_range(-100..100);
            all.push(x);
            queue.insert(x);
            assert!(queue.len() <= 5);
        }
        all.sort_unstable();
        let expected = all[5..].to_vec();
        assert_eq!(queue.into_sorted_vec(), expected);
    }

    #[test]
    fn test_pop_max_descends() {
        let mut queue = BoundedTopKQueue::new(6).unwrap();
        for x in [4, 9, 1, 7, 3, 8, 2, 6] {
            queue.insert(x);
        }
        let mut popped = Vec::new();
        while let Some(x) = queue.pop_max() {
            popped.push(x);
        }
        assert_eq!(popped, vec![9, 8, 7, 6, 4, 3]);
        assert_eq!(queue.pop_max(), None);
    }

    #[test]
    fn test_drain_nonempty_on_empty_queue() {
        let mut queue = BoundedTopKQueue::<u8>::new(3).unwrap();
        assert_eq!(queue.drain_nonempty(), Err(Error::EmptyQueue));
        queue.insert(1);
        assert_eq!(queue.drain_nonempty(), Ok(vec![1]));
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 3);
    }

    #[test]
    fn test_mixed_pops_keep_heap_valid() {
        let mut rng = create_rng(3);
        let mut queue = BoundedTopKQueue::new(16).unwrap();
        for _ in 0..200 {
            queue.insert(rng.random_range(0..1000u32));
            if rng.random_bool(0.2) {
                queue.pop_max();
            }
        }
        let sorted = queue.into_sorted_vec();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}
