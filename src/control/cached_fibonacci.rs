//! Indexed Fibonacci computation with memoized recursion.
//!
//! [`CachedFibonacci`] computes F(n) for an arbitrary index and remembers
//! every value it has computed, so repeated and nearby requests are served
//! from its memo table instead of being recomputed.
//!
//! # Memo table growth
//!
//! Entries are never evicted: the table lives as long as the handle and
//! holds at most one entry per index in `3..=MAX_INDEX`, so its size is
//! bounded by the highest index requested.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::cached_fibonacci_generator;
//!
//! let mut fibonacci = cached_fibonacci_generator();
//! assert_eq!(fibonacci.compute(10).unwrap(), 55);
//! assert_eq!(fibonacci.compute(50_u64).unwrap(), 12_586_269_025);
//! assert!(fibonacci.compute(-1).is_err());
//! ```

use super::index::IntoIndex;
use crate::error::{ArgumentIssue, InvalidArgument};

#[cfg(feature = "fxhash")]
type MemoTable = rustc_hash::FxHashMap<usize, u128>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type MemoTable = ahash::AHashMap<usize, u128>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type MemoTable = std::collections::HashMap<usize, u128>;

/// A memoizing Fibonacci function.
///
/// Base cases F(0) = 0 and F(1) = F(2) = 1 are answered directly and never
/// cached. For larger indices the memo table is consulted first; on a miss
/// the value is computed as F(n-1) + F(n-2) and stored under `n`.
///
/// Recursion depth is bounded by [`CachedFibonacci::MAX_INDEX`], which is
/// also the largest index whose value fits in a `u128`.
#[derive(Debug, Default)]
pub struct CachedFibonacci {
    memo: MemoTable,
    evaluations: u64,
}

impl CachedFibonacci {
    /// The largest index that can be computed.
    pub const MAX_INDEX: usize = 186;

    /// Creates an instance with an empty memo table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns F(`index`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `index` is negative, not an integer,
    /// not finite, or greater than [`CachedFibonacci::MAX_INDEX`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::control::CachedFibonacci;
    /// use lazyfn::ArgumentIssue;
    ///
    /// let mut fibonacci = CachedFibonacci::new();
    /// assert_eq!(fibonacci.compute(0).unwrap(), 0);
    /// assert_eq!(fibonacci.compute(2.0).unwrap(), 1);
    /// assert_eq!(
    ///     fibonacci.compute(1.5).unwrap_err().issue(),
    ///     ArgumentIssue::NotInteger
    /// );
    /// ```
    pub fn compute<I: IntoIndex>(&mut self, index: I) -> Result<u128, InvalidArgument> {
        let index = index.into_index()?;
        if index > Self::MAX_INDEX {
            return Err(InvalidArgument::new(
                "index",
                ArgumentIssue::OutOfRange {
                    max: Self::MAX_INDEX as u64,
                },
            ));
        }
        Ok(self.resolve(index))
    }

    /// Returns how many times the recursive step has been entered.
    ///
    /// A request answered from the memo table counts as a single evaluation.
    #[inline]
    pub const fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Returns the number of memoized entries.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.memo.len()
    }

    /// Returns `true` if F(`index`) is held in the memo table.
    #[inline]
    pub fn is_cached(&self, index: usize) -> bool {
        self.memo.contains_key(&index)
    }

    // Callers guarantee `index <= MAX_INDEX`, which keeps the sum in range.
    fn resolve(&mut self, index: usize) -> u128 {
        self.evaluations += 1;
        if let Some(&value) = self.memo.get(&index) {
            return value;
        }
        match index {
            0 => 0,
            1 | 2 => 1,
            _ => {
                let value = self.resolve(index - 1) + self.resolve(index - 2);
                self.memo.insert(index, value);
                tracing::trace!(index, cached = self.memo.len(), "memoized fibonacci value");
                value
            }
        }
    }
}

/// Creates a new [`CachedFibonacci`] with an empty memo table.
#[inline]
pub fn cached_fibonacci_generator() -> CachedFibonacci {
    CachedFibonacci::new()
}
