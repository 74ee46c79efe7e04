//! # lazyfn
//!
//! Stateful lazy evaluators and small functional utilities.
//!
//! ## Overview
//!
//! The core of this library is a set of evaluators that hold private state
//! across calls and do their work one step at a time:
//!
//! - **Counter**: a monotonic counter starting at 0
//! - **Repeater**: calls a function a fixed number of times per invocation
//! - **Lazy mapping**: maps one element of a snapshot per call
//! - **Fibonacci generator**: streams the Fibonacci sequence in O(1) state
//! - **Cached Fibonacci**: computes F(n) by index with a memo table
//!
//! Around it sit stateless helpers for slices, prices, grades, words and a
//! record type with read-only fields.
//!
//! ## Feature Flags
//!
//! - `control`: the lazy evaluators
//! - `collection`: slice helpers (filtering, chunking, shuffling)
//! - `compute`: prices, grades, words, factorial and power
//! - `record`: the read-only `Person` record
//! - `serde`: `Serialize`/`Deserialize` for the data records
//! - `fxhash` / `ahash`: faster hashers for the Fibonacci memo table
//! - `full`: enable all of the above except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use lazyfn::prelude::*;
//!
//! let mut counter = create_counter();
//! let mut fibonacci = fibonacci_generator();
//! let pairs: Vec<(u64, u128)> = (0..5)
//!     .map(|_| (counter.next_value(), fibonacci.next_term().unwrap()))
//!     .collect();
//! assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the error type and every enabled module's public items.
///
/// # Usage
///
/// ```rust
/// use lazyfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ArgumentIssue, InvalidArgument};

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "compute")]
    pub use crate::compute::*;

    #[cfg(feature = "record")]
    pub use crate::record::*;
}

mod error;

pub use error::{ArgumentIssue, InvalidArgument};

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "compute")]
pub mod compute;

#[cfg(feature = "record")]
pub mod record;
