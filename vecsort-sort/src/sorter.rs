use std::cmp::Ordering;

/// A strategy that sorts a slice in place into non-decreasing order.
///
/// Implementors only provide [`Sorter::sort_by`]; the natural order of the
/// element type is available through [`Sorter::sort`] and
/// [`Sorter::sort_with`].
pub trait Sorter {
    /// Sort `sequence` using `compare` as the ordering.
    ///
    /// `compare` must be a total order for the result to be sorted.
    fn sort_by<T, F>(&self, sequence: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sort `sequence` by the natural order of `T`.
    fn sort<T: Ord>(&self, sequence: &mut [T]) {
        self.sort_by(sequence, T::cmp)
    }

    /// Sort `sequence` with an optional ordering.
    ///
    /// Without one the natural order of `T` is used.
    fn sort_with<T: Ord>(
        &self,
        sequence: &mut [T],
        compare: Option<&dyn Fn(&T, &T) -> Ordering>,
    ) {
        match compare {
            Some(compare) => self.sort_by(sequence, compare),
            None => self.sort(sequence),
        }
    }
}
