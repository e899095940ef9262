use std::cmp::Ordering;

use crate::Sorter;

/// Selection sort.
///
/// For every position but the last, the smallest element of the remaining
/// suffix is swapped into place. The first of several equal minima wins.
/// Not stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort_by<T, F>(&self, sequence: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let n = sequence.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                if compare(&sequence[j], &sequence[min]) == Ordering::Less {
                    min = j;
                }
            }
            sequence.swap(i, min);
        }
    }
}
