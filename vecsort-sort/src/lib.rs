//! In-place comparison sorts.
//!
//! Three textbook strategies behind one [`Sorter`] trait: [`BubbleSort`],
//! [`InsertionSort`] and [`SelectionSort`]. They all take `O(n^2)`
//! comparisons and produce the same result; they differ only in how they
//! compare and move elements. [`SortStrategy`] picks one at runtime.
mod bubble;
mod insertion;
mod selection;
mod sorter;
mod strategy;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;
pub use sorter::Sorter;
pub use strategy::SortStrategy;
pub use strum::IntoEnumIterator;
