//! In-place sorting: insertion sort and hybrid median-of-three quicksort.

use thiserror::Error;

/// Smallest slice that quicksort will partition; anything shorter is handed
/// to insertion sort. Median-of-three needs at least 3 elements, which this
/// threshold guarantees with room to spare.
const MIN_QUICKSORT_LEN: usize = 10;

/// Below this length the parallel variant runs sequentially; fork-join
/// overhead dominates for small partitions.
const PAR_SEQ_CUTOFF: usize = 4096;

/// Rejected range bounds for [`quick_sort_range`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range start {first} is greater than range end {last}")]
    Inverted { first: usize, last: usize },
    #[error("range end {last} is out of bounds for slice of length {len}")]
    OutOfBounds { last: usize, len: usize },
}

/// Sorts `items` in place into ascending order using insertion sort.
///
/// Stable, O(n²) worst case, O(n) on nearly-sorted input. The classic
/// shift-into-place is expressed as adjacent swaps so element types only
/// need `Ord`, not `Clone`.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    // items[..unsorted] is the sorted region; each pass walks the first
    // unsorted element left until its neighbor is no longer greater.
    for unsorted in 1..items.len() {
        let mut loc = unsorted;
        while loc > 0 && items[loc - 1] > items[loc] {
            items.swap(loc - 1, loc);
            loc -= 1;
        }
    }
}

/// Sorts `items` in place into ascending order.
///
/// Hybrid quicksort: slices shorter than 10 elements go to
/// [`insertion_sort`]; everything else is partitioned around a
/// median-of-three pivot and the two disjoint sides are sorted
/// recursively. Not stable.
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() < MIN_QUICKSORT_LEN {
        insertion_sort(items);
    } else {
        let pivot_index = partition(items);
        let (lower, upper) = items.split_at_mut(pivot_index);
        quick_sort(lower);
        quick_sort(&mut upper[1..]);
    }
}

/// Sorts the inclusive index range `[first, last]` of `items`, leaving
/// elements outside the range untouched.
///
/// Invalid bounds are rejected rather than treated as undefined behavior:
/// `first > last` yields [`RangeError::Inverted`], `last >= items.len()`
/// yields [`RangeError::OutOfBounds`].
pub fn quick_sort_range<T: Ord>(
    items: &mut [T],
    first: usize,
    last: usize,
) -> Result<(), RangeError> {
    if first > last {
        return Err(RangeError::Inverted { first, last });
    }
    if last >= items.len() {
        return Err(RangeError::OutOfBounds {
            last,
            len: items.len(),
        });
    }
    quick_sort(&mut items[first..=last]);
    Ok(())
}

/// Parallel [`quick_sort`]: the two sides of each partition are sorted on
/// the rayon thread pool via fork-join. Safe because the sides are disjoint
/// `split_at_mut` subslices. Falls back to the sequential sort below
/// [`PAR_SEQ_CUTOFF`] elements.
pub fn par_quick_sort<T: Ord + Send>(items: &mut [T]) {
    if items.len() < PAR_SEQ_CUTOFF {
        quick_sort(items);
        return;
    }
    let pivot_index = partition(items);
    let (lower, upper) = items.split_at_mut(pivot_index);
    rayon::join(|| par_quick_sort(lower), || par_quick_sort(&mut upper[1..]));
}

// Swaps items[i] and items[j] into ascending order.
fn order<T: Ord>(items: &mut [T], i: usize, j: usize) {
    if items[i] > items[j] {
        items.swap(i, j);
    }
}

// Arranges the first, middle, and last elements into sorted order and
// returns the middle index. The second order(0, mid) restores first <= mid
// after the mid/last exchange may have broken it.
fn sort_first_middle_last<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mid = last / 2;
    order(items, 0, mid);
    order(items, mid, last);
    order(items, 0, mid);
    mid
}

// Partitions `items` (len >= 3) around a median-of-three pivot.
//
// Post-condition: items[..p] <= items[p] <= items[p + 1..], where p is the
// returned pivot index. Equal-to-pivot values may land on either side.
fn partition<T: Ord>(items: &mut [T]) -> usize {
    let last = items.len() - 1;
    let mid = sort_first_middle_last(items);

    // Park the pivot just before the end, out of the scan cursors' way.
    items.swap(mid, last - 1);
    let pivot_index = last - 1;

    let mut index_from_left = 1;
    let mut index_from_right = last - 2;
    loop {
        // Find the first entry from the left that is >= pivot. The pivot
        // copy at pivot_index bounds the scan.
        while items[index_from_left] < items[pivot_index] {
            index_from_left += 1;
        }
        // Find the first entry from the right that is <= pivot. The
        // sentinel at index 0 (<= pivot by median-of-three) bounds it.
        while items[index_from_right] > items[pivot_index] {
            index_from_right -= 1;
        }

        if index_from_left < index_from_right {
            items.swap(index_from_left, index_from_right);
            index_from_left += 1;
            index_from_right -= 1;
        } else {
            break;
        }
    }

    // Drop the pivot between the two regions; that slot is final.
    items.swap(pivot_index, index_from_left);
    index_from_left
}
