//! Conversion of numeric arguments into sequence indices.
//!
//! [`IntoIndex`] lets index-taking operations accept any primitive numeric
//! type while still rejecting values that are not valid indices: negative
//! integers, and floats that are NaN, infinite, negative or fractional.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::IntoIndex;
//! use lazyfn::ArgumentIssue;
//!
//! assert_eq!(7_u8.into_index().unwrap(), 7);
//! assert_eq!(12.0_f64.into_index().unwrap(), 12);
//! assert_eq!((-1_i32).into_index().unwrap_err().issue(), ArgumentIssue::Negative);
//! assert_eq!(2.5_f64.into_index().unwrap_err().issue(), ArgumentIssue::NotInteger);
//! ```

use crate::error::{ArgumentIssue, InvalidArgument};

const ARGUMENT: &str = "index";

/// A numeric value that may be used as a non-negative index.
pub trait IntoIndex {
    /// Converts `self` into a `usize` index.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the value is negative, not an integer,
    /// not finite, or does not fit in `usize`.
    fn into_index(self) -> Result<usize, InvalidArgument>;
}

fn out_of_range() -> InvalidArgument {
    InvalidArgument::new(
        ARGUMENT,
        ArgumentIssue::OutOfRange {
            max: u64::try_from(usize::MAX).unwrap_or(u64::MAX),
        },
    )
}

macro_rules! impl_into_index_unsigned {
    ($($type:ty),*) => {
        $(
            impl IntoIndex for $type {
                #[inline]
                fn into_index(self) -> Result<usize, InvalidArgument> {
                    usize::try_from(self).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

macro_rules! impl_into_index_signed {
    ($($type:ty),*) => {
        $(
            impl IntoIndex for $type {
                #[inline]
                fn into_index(self) -> Result<usize, InvalidArgument> {
                    if self < 0 {
                        return Err(InvalidArgument::new(ARGUMENT, ArgumentIssue::Negative));
                    }
                    usize::try_from(self).map_err(|_| out_of_range())
                }
            }
        )*
    };
}

macro_rules! impl_into_index_float {
    ($($type:ty),*) => {
        $(
            impl IntoIndex for $type {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
                fn into_index(self) -> Result<usize, InvalidArgument> {
                    if !self.is_finite() {
                        return Err(InvalidArgument::new(ARGUMENT, ArgumentIssue::NotFinite));
                    }
                    if self < 0.0 {
                        return Err(InvalidArgument::new(ARGUMENT, ArgumentIssue::Negative));
                    }
                    if self.fract() != 0.0 {
                        return Err(InvalidArgument::new(ARGUMENT, ArgumentIssue::NotInteger));
                    }
                    if self >= usize::MAX as $type {
                        return Err(out_of_range());
                    }
                    Ok(self as usize)
                }
            }
        )*
    };
}

impl_into_index_unsigned!(u8, u16, u32, u64, u128, usize);
impl_into_index_signed!(i8, i16, i32, i64, i128, isize);
impl_into_index_float!(f32, f64);
