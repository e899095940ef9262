use std::cmp::Ordering;

use strum_macros::{Display, EnumIter, EnumString};

use crate::{BubbleSort, InsertionSort, SelectionSort, Sorter};

/// Runtime choice between the sort strategies.
///
/// Parses from and displays as the lowercase strategy name, e.g.
/// `"insertion"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortStrategy {
    Bubble,
    Insertion,
    Selection,
}

impl SortStrategy {
    /// Every strategy, in declaration order.
    pub const fn all() -> [SortStrategy; 3] {
        [
            SortStrategy::Bubble,
            SortStrategy::Insertion,
            SortStrategy::Selection,
        ]
    }
}

// dispatch statically to the unit sorters, so the comparator is never boxed
impl Sorter for SortStrategy {
    fn sort_by<T, F>(&self, sequence: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortStrategy::Bubble => BubbleSort.sort_by(sequence, compare),
            SortStrategy::Insertion => InsertionSort.sort_by(sequence, compare),
            SortStrategy::Selection => SelectionSort.sort_by(sequence, compare),
        }
    }
}
