//! A stateful monotonic counter.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::create_counter;
//!
//! let mut counter = create_counter();
//! assert_eq!(counter.next_value(), 0);
//! assert_eq!(counter.next_value(), 1);
//! assert_eq!(counter.next_value(), 2);
//! ```

use std::iter::FusedIterator;

/// A counter that returns its current value and then increments it.
///
/// The first call to [`Counter::next_value`] returns 0. The count is a `u64`
/// and grows without bound for any realistic number of calls.
///
/// `Counter` is also an infinite [`Iterator`], so it composes with the
/// standard adapters:
///
/// ```rust
/// use lazyfn::control::Counter;
///
/// let evens: Vec<u64> = Counter::new().filter(|n| n % 2 == 0).take(3).collect();
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
#[derive(Debug, Default)]
pub struct Counter {
    value: u64,
}

impl Counter {
    /// Creates a counter starting at 0.
    #[inline]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Returns the current value and advances the counter by one.
    #[inline]
    pub const fn next_value(&mut self) -> u64 {
        let current = self.value;
        self.value += 1;
        current
    }

    /// Returns the value the next call to [`Counter::next_value`] will produce.
    ///
    /// ```rust
    /// use lazyfn::control::create_counter;
    ///
    /// let mut counter = create_counter();
    /// counter.next_value();
    /// assert_eq!(counter.peek(), 1);
    /// assert_eq!(counter.next_value(), 1);
    /// ```
    #[inline]
    pub const fn peek(&self) -> u64 {
        self.value
    }
}

impl Iterator for Counter {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Counter {}

/// Creates a new [`Counter`] starting at 0.
#[inline]
pub const fn create_counter() -> Counter {
    Counter::new()
}
