use std::cmp::Ordering;

use crate::Sorter;

/// Insertion sort.
///
/// Grows a sorted prefix one element at a time: the next element is lifted
/// out, the larger elements before it move one slot right, and the element
/// drops into the gap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort_by<T, F>(&self, sequence: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for i in 1..sequence.len() {
            // the key stays at `i` while the gap is searched for; nothing
            // before it has moved yet
            let mut gap = i;
            while gap > 0 && compare(&sequence[gap - 1], &sequence[i]) == Ordering::Greater {
                gap -= 1;
            }
            sequence[gap..=i].rotate_right(1);
        }
    }
}
