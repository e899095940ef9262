use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::iter::{Drain, IntoIter, Iter, IterMut};

/// The number of slots a sequence created with [`DynamicSequence::new`]
/// starts out with.
pub const DEFAULT_CAPACITY: usize = 10;

/// The number of slots added each time a full sequence needs to grow.
///
/// Growth is linear: the capacity goes up by this amount no matter how
/// large the sequence already is.
pub const GROWTH_INCREMENT: usize = 10;

/// A resizable sequence of elements.
///
/// Elements live in a block of slots whose length is the capacity. The
/// first `len` slots hold the elements in order; the remaining slots are
/// unused. When an element is added to a full sequence, the slots are
/// reallocated with [`GROWTH_INCREMENT`] extra room. The capacity never
/// shrinks.
#[derive(Clone)]
pub struct DynamicSequence<T> {
    slots: Box<[Option<T>]>,
    count: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicSequence<T> {
    /// Create an empty sequence with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty sequence with exactly `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first insertion grows it.
    pub fn with_capacity(capacity: usize) -> Self {
        DynamicSequence {
            slots: empty_slots(capacity),
            count: 0,
        }
    }

    /// The number of elements in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots[..self.count]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.count,
            })
    }

    /// Get a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.slots[..self.count]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.count,
            })
    }

    /// Replace the element at `index`, returning the old one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Append an element at the end of the sequence.
    pub fn push(&mut self, element: T) {
        if self.count == self.slots.len() {
            self.grow();
        }
        self.slots[self.count] = Some(element);
        self.count += 1;
    }

    /// Insert an element at `index`, shifting everything from `index`
    /// onward one position to the right.
    ///
    /// `index` may be equal to the length, in which case the element is
    /// appended.
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.count {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.count,
            });
        }
        if self.count == self.slots.len() {
            self.grow();
        }
        if index == self.count {
            self.slots[self.count] = Some(element);
        } else {
            // walk from the back so nothing is overwritten; the empty slot
            // at `count` travels down to `index`
            for i in (index..self.count).rev() {
                self.slots.swap(i, i + 1);
            }
            self.slots[index] = Some(element);
        }
        self.count += 1;
        Ok(())
    }

    /// Remove the element at `index`, shifting everything after it one
    /// position to the left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let Some(removed) = self.slots[..self.count]
            .get_mut(index)
            .and_then(Option::take)
        else {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.count,
            });
        };
        for i in index..self.count - 1 {
            self.slots.swap(i, i + 1);
        }
        self.count -= 1;
        Ok(removed)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots[..self.count])
    }

    /// Iterate mutably over the elements in order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.slots[..self.count])
    }

    /// Remove all elements. The slots stay allocated.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.count] {
            *slot = None;
        }
        self.count = 0;
    }

    /// Move all elements out of the sequence in order.
    ///
    /// The sequence is empty afterwards but keeps its capacity, so it can be
    /// refilled without reallocating. Elements not consumed by the iterator
    /// are dropped.
    pub fn drain(&mut self) -> Drain<'_, T> {
        let count = std::mem::take(&mut self.count);
        Drain::new(&mut self.slots[..count])
    }

    /// Consume the sequence into a `Vec` holding the elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    fn grow(&mut self) {
        let capacity = self.slots.len() + GROWTH_INCREMENT;
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(self.slots[..self.count].iter_mut().map(Option::take));
        slots.resize_with(capacity, || None);
        self.slots = slots.into_boxed_slice();
    }
}

impl<T: PartialEq> DynamicSequence<T> {
    /// The index of the first element equal to `element`, scanning from the
    /// front.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|item| item == element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }

    /// Remove the first element equal to `element`.
    ///
    /// Returns `false`, leaving the sequence untouched, if there is no such
    /// element.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> DynamicSequence<T> {
    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DynamicSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicSequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

// capacity is not part of equality, only the elements are
impl<T: PartialEq> PartialEq for DynamicSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DynamicSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = DynamicSequence::new();
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for DynamicSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> IntoIterator for DynamicSequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let mut slots = self.slots.into_vec();
        slots.truncate(self.count);
        IntoIter::new(slots)
    }
}

impl<'a, T> IntoIterator for &'a DynamicSequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicSequence<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
