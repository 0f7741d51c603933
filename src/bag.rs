//! Array-backed bag: an unordered collection that allows duplicates.

/// Capacity used by [`Bag::with_default_capacity`], matching the classic
/// six-slot teaching bag.
pub const DEFAULT_CAPACITY: usize = 6;

/// A multiset over any equality-comparable element type.
///
/// Storage is an owned `Vec<T>`, optionally bounded: a bag built with
/// [`Bag::bounded`] refuses `add` once full instead of growing. Removal is
/// swap-with-last, so it is O(1) but does not preserve insertion order -
/// the order reported by [`Bag::to_vec`] is insertion order only until the
/// first `remove`.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    items: Vec<T>,
    max_items: Option<usize>,
}

impl<T> Bag<T> {
    /// Creates an empty, unbounded bag.
    pub fn new() -> Self {
        Bag {
            items: Vec::new(),
            max_items: None,
        }
    }

    /// Creates an empty bag that holds at most `capacity` elements.
    ///
    /// Once full, `add` returns `false` and leaves the bag unchanged.
    pub fn bounded(capacity: usize) -> Self {
        Bag {
            items: Vec::with_capacity(capacity),
            max_items: Some(capacity),
        }
    }

    /// Creates a bounded bag with the classic capacity of [`DEFAULT_CAPACITY`].
    pub fn with_default_capacity() -> Self {
        Self::bounded(DEFAULT_CAPACITY)
    }

    /// Number of elements currently in the bag.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The capacity bound, or `None` for an unbounded bag.
    pub fn capacity(&self) -> Option<usize> {
        self.max_items
    }

    /// Adds an element. Returns `false` (and drops `item`) when a bounded
    /// bag is already full; always succeeds for an unbounded bag.
    pub fn add(&mut self, item: T) -> bool {
        let has_room = self
            .max_items
            .map_or(true, |capacity| self.items.len() < capacity);
        if has_room {
            self.items.push(item);
        }
        has_room
    }

    /// Empties the bag, retaining its allocated storage.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in internal order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> Bag<T> {
    /// Removes one occurrence of `item`, if present.
    ///
    /// The vacated slot is filled by the last element (swap-with-last), so
    /// insertion order is not preserved. Returns whether an occurrence was
    /// found; an empty bag or absent item yields `false` with no change.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Counts the occurrences of `item`.
    pub fn frequency_of(&self, item: &T) -> usize {
        self.items.iter().filter(|entry| *entry == item).count()
    }

    // Index of the first occurrence, scanning from slot 0 upward.
    fn index_of(&self, target: &T) -> Option<usize> {
        self.items.iter().position(|entry| entry == target)
    }
}

impl<T: Clone> Bag<T> {
    /// Snapshot of the contents in current internal order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Bag<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Bag {
            items: iter.into_iter().collect(),
            max_items: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bag_is_empty() {
        let bag: Bag<i32> = Bag::new();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert_eq!(bag.capacity(), None);
    }

    #[test]
    fn test_add_then_contains() {
        let mut bag = Bag::new();
        assert!(bag.add("apple"));
        assert!(bag.contains(&"apple"));
        assert!(!bag.contains(&"banana"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_add_increments_len() {
        let mut bag = Bag::new();
        for i in 0..10 {
            let before = bag.len();
            assert!(bag.add(i));
            assert_eq!(bag.len(), before + 1);
        }
    }

    #[test]
    fn test_bounded_add_fails_when_full() {
        let mut bag = Bag::bounded(3);
        assert!(bag.add(1));
        assert!(bag.add(2));
        assert!(bag.add(3));

        assert!(!bag.add(4));
        assert_eq!(bag.len(), 3);
        assert!(!bag.contains(&4));
        assert_eq!(bag.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_default_capacity_is_six() {
        let mut bag = Bag::with_default_capacity();
        assert_eq!(bag.capacity(), Some(DEFAULT_CAPACITY));
        for i in 0..6 {
            assert!(bag.add(i));
        }
        assert!(!bag.add(6));
    }

    #[test]
    fn test_unbounded_grows_past_default() {
        let mut bag = Bag::new();
        for i in 0..100 {
            assert!(bag.add(i));
        }
        assert_eq!(bag.len(), 100);
    }

    #[test]
    fn test_remove_reduces_frequency() {
        let mut bag = Bag::new();
        bag.add("x");
        bag.add("y");
        bag.add("x");
        assert_eq!(bag.frequency_of(&"x"), 2);

        assert!(bag.remove(&"x"));
        assert_eq!(bag.frequency_of(&"x"), 1);
        assert_eq!(bag.len(), 2);

        assert!(bag.remove(&"x"));
        assert_eq!(bag.frequency_of(&"x"), 0);
        assert!(!bag.contains(&"x"));
    }

    #[test]
    fn test_remove_absent_leaves_state_unchanged() {
        let mut bag = Bag::new();
        bag.add(1);
        bag.add(2);

        assert!(!bag.remove(&99));
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_remove_from_empty_bag() {
        let mut bag: Bag<i32> = Bag::new();
        assert!(!bag.remove(&1));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_remove_swaps_last_into_hole() {
        let mut bag = Bag::new();
        for item in ["a", "b", "c", "d"] {
            bag.add(item);
        }

        // Removing "b" moves the final element "d" into its slot.
        assert!(bag.remove(&"b"));
        assert_eq!(bag.to_vec(), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_remove_frees_room_in_bounded_bag() {
        let mut bag = Bag::bounded(2);
        bag.add(1);
        bag.add(2);
        assert!(!bag.add(3));

        assert!(bag.remove(&1));
        assert!(bag.add(3));
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_frequency_of_duplicates() {
        let mut bag = Bag::new();
        for _ in 0..5 {
            bag.add(7);
        }
        bag.add(3);
        assert_eq!(bag.frequency_of(&7), 5);
        assert_eq!(bag.frequency_of(&3), 1);
        assert_eq!(bag.frequency_of(&0), 0);
    }

    #[test]
    fn test_clear() {
        let mut bag = Bag::bounded(4);
        bag.add(1);
        bag.add(2);
        bag.clear();

        assert!(bag.is_empty());
        assert_eq!(bag.frequency_of(&1), 0);
        assert_eq!(bag.capacity(), Some(4));
        // Cleared slots are reusable.
        assert!(bag.add(9));
        assert_eq!(bag.to_vec(), vec![9]);
    }

    #[test]
    fn test_to_vec_preserves_insertion_order_without_removals() {
        let mut bag = Bag::new();
        bag.add("one");
        bag.add("two");
        bag.add("three");
        assert_eq!(bag.to_vec(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_from_iterator_and_into_iterator() {
        let bag: Bag<i32> = (1..=4).collect();
        assert_eq!(bag.len(), 4);
        assert_eq!(bag.capacity(), None);

        let sum: i32 = (&bag).into_iter().sum();
        assert_eq!(sum, 10);

        let collected: Vec<i32> = bag.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iter_borrows_elements() {
        let mut bag = Bag::new();
        bag.add(String::from("left"));
        bag.add(String::from("right"));

        let lengths: Vec<usize> = bag.iter().map(|s| s.len()).collect();
        assert_eq!(lengths, vec![4, 5]);
        assert_eq!(bag.len(), 2);
    }
}
