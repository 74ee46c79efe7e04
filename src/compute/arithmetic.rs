//! Factorial and integer powers.

use crate::error::{ArgumentIssue, InvalidArgument};

/// The largest `n` whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: u32 = 34;

/// Returns `number!`, treating every `number < 2` as 1.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if the result does not fit in a `u128`
/// (`number > 34`).
///
/// # Examples
///
/// ```rust
/// use lazyfn::compute::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert!(factorial(35).is_err());
/// ```
pub fn factorial(number: u32) -> Result<u128, InvalidArgument> {
    (2..=u128::from(number))
        .try_fold(1_u128, u128::checked_mul)
        .ok_or_else(|| {
            InvalidArgument::new(
                "number",
                ArgumentIssue::OutOfRange {
                    max: u64::from(MAX_FACTORIAL_INPUT),
                },
            )
        })
}

/// Returns `base` raised to `exponent` by repeated multiplication.
///
/// An exponent of 0 yields 1.
///
/// ```rust
/// use lazyfn::compute::power;
///
/// assert_eq!(power(2.0, 10), 1024.0);
/// assert_eq!(power(7.5, 0), 1.0);
/// ```
pub fn power(base: f64, exponent: u32) -> f64 {
    (0..exponent).fold(1.0, |result, _| result * base)
}
