//! Element-at-a-time mapping over a snapshot of a sequence.
//!
//! [`LazyMap`] applies its mapping function to one element per call instead
//! of materializing the whole mapped sequence up front. The source is copied
//! into the handle at construction, so later changes to the caller's
//! collection do not affect what is produced.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::lazy_map;
//!
//! let mut doubled = lazy_map(vec![1, 2, 3], |x| x * 2);
//! assert_eq!(doubled.next_mapped(), Some(2));
//! assert_eq!(doubled.next_mapped(), Some(4));
//! assert_eq!(doubled.next_mapped(), Some(6));
//! assert_eq!(doubled.next_mapped(), None);
//! assert_eq!(doubled.next_mapped(), None);
//! ```
//!
//! A value that is not a sequence is rejected at compile time:
//!
//! ```compile_fail
//! use lazyfn::control::lazy_map;
//!
//! let _ = lazy_map(42, |x: &i32| *x);
//! ```

use std::iter::FusedIterator;

/// A single-pass, forward-only producer of mapped elements.
///
/// Once every element has been produced, each further call returns `None`;
/// the mapper never restarts and never fails.
///
/// # Type Parameters
///
/// * `T` - The element type of the snapshot
/// * `F` - The mapping function, applied to a reference to each element
pub struct LazyMap<T, F> {
    items: Vec<T>,
    cursor: usize,
    function: F,
}

impl<T, F> LazyMap<T, F> {
    /// Creates a mapper over an owned snapshot of `sequence`.
    pub fn new<I>(sequence: I, function: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: sequence.into_iter().collect(),
            cursor: 0,
            function,
        }
    }

    /// Creates a mapper over a copy of a borrowed slice.
    ///
    /// ```rust
    /// use lazyfn::control::LazyMap;
    ///
    /// let mut source = vec!["a", "b"];
    /// let mut upper = LazyMap::from_slice(&source, |s: &&str| s.to_uppercase());
    /// source.push("c");
    ///
    /// assert_eq!(upper.by_ref().collect::<Vec<_>>(), vec!["A", "B"]);
    /// ```
    pub fn from_slice(sequence: &[T], function: F) -> Self
    where
        T: Clone,
    {
        Self {
            items: sequence.to_vec(),
            cursor: 0,
            function,
        }
    }

    /// Returns how many elements have been produced so far.
    #[inline]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Returns how many elements are left to produce.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    /// Returns `true` once every element has been produced.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.items.len()
    }

    /// Maps the element at the cursor and advances, or returns `None` when
    /// the snapshot is exhausted.
    pub fn next_mapped<U>(&mut self) -> Option<U>
    where
        F: FnMut(&T) -> U,
    {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some((self.function)(item))
    }
}

impl<T, F, U> Iterator for LazyMap<T, F>
where
    F: FnMut(&T) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_mapped()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, F, U> ExactSizeIterator for LazyMap<T, F> where F: FnMut(&T) -> U {}

impl<T, F, U> FusedIterator for LazyMap<T, F> where F: FnMut(&T) -> U {}

impl<T: std::fmt::Debug, F> std::fmt::Debug for LazyMap<T, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LazyMap")
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

/// Creates a [`LazyMap`] over an owned snapshot of `sequence`.
#[inline]
pub fn lazy_map<I, F, U>(sequence: I, function: F) -> LazyMap<I::Item, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> U,
{
    LazyMap::new(sequence, function)
}
