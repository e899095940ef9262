//! Bubble sort.
//!
//! Each pass walks the unsorted prefix and swaps neighbours that are out of
//! order, which carries the largest remaining element to the end of the
//! prefix. After `n - 1` passes the slice is sorted. There is no early exit
//! when a pass makes no swaps, so every input of length `n` takes exactly
//! `n * (n - 1) / 2` comparisons.

use std::cmp::Ordering;

use crate::Sorter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort_by<T, F>(&self, sequence: &mut [T], mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let n = sequence.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if compare(&sequence[j], &sequence[j + 1]) == Ordering::Greater {
                    sequence.swap(j, j + 1);
                }
            }
        }
    }
}
