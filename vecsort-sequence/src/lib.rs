//! A resizable sequence container.
//!
//! [`DynamicSequence`] keeps its elements in a contiguous block of slots and
//! grows that block by a fixed number of slots whenever it runs full.
mod error;
mod iter;
mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, Result};
pub use iter::{Drain, IntoIter, Iter, IterMut};
pub use sequence::{DynamicSequence, DEFAULT_CAPACITY, GROWTH_INCREMENT};
