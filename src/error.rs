//! Error types shared by every module.
//!
//! All argument validation in this crate funnels into [`InvalidArgument`].
//! Shape violations (passing something that is not callable, not a sequence,
//! not numeric) are rejected by the type system; this error covers the
//! conditions the types cannot express, such as a zero chunk size or a
//! negative Fibonacci index.

use std::fmt;

/// The reason an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentIssue {
    /// The value was below zero.
    Negative,
    /// The value had a fractional part.
    NotInteger,
    /// The value was NaN or infinite.
    NotFinite,
    /// The value was zero where a positive value is required.
    Zero,
    /// The value exceeded the largest supported value.
    OutOfRange {
        /// The largest accepted value.
        max: u64,
    },
    /// The input contained nothing to compute with.
    Empty,
}

impl fmt::Display for ArgumentIssue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(formatter, "must not be negative"),
            Self::NotInteger => write!(formatter, "must be an integer"),
            Self::NotFinite => write!(formatter, "must be finite"),
            Self::Zero => write!(formatter, "must be greater than zero"),
            Self::OutOfRange { max } => write!(formatter, "must be at most {max}"),
            Self::Empty => write!(formatter, "must not be empty"),
        }
    }
}

/// Represents an argument that violates a function's input contract.
///
/// # Examples
///
/// ```rust
/// use lazyfn::{ArgumentIssue, InvalidArgument};
///
/// let error = InvalidArgument::new("size", ArgumentIssue::Zero);
/// assert_eq!(
///     format!("{error}"),
///     "invalid argument `size`: must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument {
    argument: &'static str,
    issue: ArgumentIssue,
}

impl InvalidArgument {
    /// Creates a new error for the named argument.
    ///
    /// The rejection is reported through `tracing` at debug level.
    pub fn new(argument: &'static str, issue: ArgumentIssue) -> Self {
        tracing::debug!(argument, %issue, "rejected argument");
        Self { argument, issue }
    }

    /// Returns the name of the rejected argument.
    #[inline]
    pub const fn argument(&self) -> &'static str {
        self.argument
    }

    /// Returns why the argument was rejected.
    #[inline]
    pub const fn issue(&self) -> ArgumentIssue {
        self.issue
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "invalid argument `{}`: {}",
            self.argument, self.issue
        )
    }
}

impl std::error::Error for InvalidArgument {}
