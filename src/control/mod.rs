//! Lazy and incremental evaluators.
//!
//! Each constructor in this module returns a handle that owns private
//! mutable state and exposes a single operation to advance or call it:
//!
//! - [`Counter`]: returns 0, 1, 2, ... one value per call
//! - [`Repeater`]: calls a wrapped function a fixed number of times
//! - [`LazyMap`]: maps one element of a snapshot per call
//! - [`FibonacciGenerator`]: streams the Fibonacci sequence in O(1) state
//! - [`CachedFibonacci`]: computes F(n) by index with a memo table
//!
//! # Thread Safety
//!
//! Advancing a handle takes `&mut self`, so a handle cannot be driven from
//! two threads without external synchronization. Wrap it in a `Mutex` if it
//! must be shared, or give each caller its own instance; instances never
//! share state with each other.
//!
//! # Examples
//!
//! ## Lazy Mapping
//!
//! ```rust
//! use lazyfn::control::lazy_map;
//!
//! let mut squares = lazy_map(vec![1, 2, 3], |x| x * x);
//! assert_eq!(squares.next_mapped(), Some(1));
//! assert_eq!(squares.by_ref().collect::<Vec<_>>(), vec![4, 9]);
//! assert_eq!(squares.next_mapped(), None);
//! ```
//!
//! ## Cross-checking the Fibonacci evaluators
//!
//! ```rust
//! use lazyfn::control::{cached_fibonacci_generator, fibonacci_generator};
//!
//! let mut cached = cached_fibonacci_generator();
//! for (index, term) in fibonacci_generator().take(20).enumerate() {
//!     assert_eq!(cached.compute(index).unwrap(), term);
//! }
//! ```

mod cached_fibonacci;
mod counter;
mod fibonacci;
mod index;
mod lazy_map;
mod repeat;

pub use cached_fibonacci::{CachedFibonacci, cached_fibonacci_generator};
pub use counter::{Counter, create_counter};
pub use fibonacci::{FibonacciGenerator, fibonacci_generator};
pub use index::IntoIndex;
pub use lazy_map::{LazyMap, lazy_map};
pub use repeat::{Repeater, repeat_function};

static_assertions::assert_impl_all!(Counter: Send, Sync);
static_assertions::assert_impl_all!(FibonacciGenerator: Send, Sync);
static_assertions::assert_impl_all!(CachedFibonacci: Send, Sync);
static_assertions::assert_impl_all!(LazyMap<String, fn(&String) -> usize>: Send, Sync);
static_assertions::assert_impl_all!(Repeater<fn(i32), i32>: Send, Sync);
