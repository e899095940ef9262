//! A resizable sequence container and a family of textbook sorts.
//!
//! The two halves are independent: [`DynamicSequence`] knows nothing about
//! sorting and the [`Sorter`] strategies work on any mutable slice. This
//! crate puts them together.
//!
//! ```
//! use vecsort::{sort_sequence_natural, DynamicSequence, SortStrategy};
//!
//! let mut sequence = DynamicSequence::new();
//! sequence.push(5);
//! sequence.push(3);
//! sequence.push(8);
//! sequence.push(1);
//! assert_eq!(sequence.to_string(), "[5, 3, 8, 1]");
//!
//! sort_sequence_natural(&mut sequence, &SortStrategy::Insertion);
//! assert_eq!(sequence.to_string(), "[1, 3, 5, 8]");
//! ```
use std::cmp::Ordering;

pub use vecsort_sequence::{
    Drain, DynamicSequence, Error, IntoIter, Iter, IterMut, Result, DEFAULT_CAPACITY,
    GROWTH_INCREMENT,
};
pub use vecsort_sort::{
    BubbleSort, InsertionSort, IntoEnumIterator, SelectionSort, SortStrategy, Sorter,
};

/// Sort the elements of `sequence` in place with `sorter`, ordered by
/// `compare`.
///
/// The elements are moved out into a scratch array for the sort and then
/// put back, so the capacity of the sequence does not change.
pub fn sort_sequence<T, S, F>(sequence: &mut DynamicSequence<T>, sorter: &S, compare: F)
where
    S: Sorter,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items: Vec<T> = sequence.drain().collect();
    sorter.sort_by(&mut items, compare);
    sequence.extend(items);
}

/// Sort the elements of `sequence` in place with `sorter`, in their natural
/// order.
pub fn sort_sequence_natural<T, S>(sequence: &mut DynamicSequence<T>, sorter: &S)
where
    T: Ord,
    S: Sorter,
{
    sort_sequence(sequence, sorter, T::cmp)
}
