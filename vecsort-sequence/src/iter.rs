// All iterators here are handed the occupied slots of a sequence only, so
// `find_map` yields from the very next slot.

/// Iterator over references to the elements of a sequence.
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Iter {
            slots: slots.iter(),
        }
    }
}

// no `T: Clone` bound, only the references are copied
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over mutable references to the elements of a sequence.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        IterMut {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.find_map(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a sequence.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    slots: std::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Option<T>>) -> Self {
        IntoIter {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.find_map(std::convert::identity)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.slots.by_ref().rev().find_map(std::convert::identity)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Draining iterator, created by
/// [`DynamicSequence::drain`](crate::DynamicSequence::drain).
///
/// Whatever is left when the iterator is dropped is dropped with it.
#[derive(Debug)]
pub struct Drain<'a, T> {
    slots: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        Drain {
            slots: slots.iter_mut(),
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.slots.find_map(Option::take)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.slots.by_ref().rev().find_map(Option::take)
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        for slot in self.slots.by_ref() {
            *slot = None;
        }
    }
}
