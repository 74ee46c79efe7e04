//! Streaming Fibonacci generation with constant state.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::fibonacci_generator;
//!
//! let mut generator = fibonacci_generator();
//! let terms: Vec<u128> = (0..8).filter_map(|_| generator.next_term()).collect();
//! assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13]);
//! ```

use std::iter::FusedIterator;

/// Produces F(0), F(1), F(2), ... one term per call.
///
/// Each call costs O(1) time and space. Terms are `u128`; the sequence ends
/// (every further call returns `None`) after F(186), the last term that fits.
/// A fresh generator must be constructed to start over.
#[derive(Debug, Clone)]
pub struct FibonacciGenerator {
    index: u8,
    prev1: u128,
    prev2: u128,
    exhausted: bool,
}

impl FibonacciGenerator {
    /// The index of the last term this generator can produce.
    pub const LAST_INDEX: usize = 186;

    /// Creates a generator positioned at F(0).
    #[inline]
    pub const fn new() -> Self {
        Self {
            index: 0,
            prev1: 0,
            prev2: 1,
            exhausted: false,
        }
    }

    /// Returns the next Fibonacci term.
    ///
    /// Returns `None` once the next term would overflow `u128`.
    pub fn next_term(&mut self) -> Option<u128> {
        if self.index < 2 {
            let term = u128::from(self.index);
            self.index += 1;
            return Some(term);
        }
        if self.exhausted {
            return None;
        }
        let Some(current) = self.prev1.checked_add(self.prev2) else {
            tracing::trace!("fibonacci generator reached the end of the u128 range");
            self.exhausted = true;
            return None;
        };
        self.prev1 = self.prev2;
        self.prev2 = current;
        Some(current)
    }
}

impl Default for FibonacciGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciGenerator {
    type Item = u128;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_term()
    }
}

impl FusedIterator for FibonacciGenerator {}

/// Creates a new [`FibonacciGenerator`] positioned at F(0).
#[inline]
pub const fn fibonacci_generator() -> FibonacciGenerator {
    FibonacciGenerator::new()
}
