//! Repeated invocation of a function.
//!
//! [`repeat_function`] wraps a function so that each call through the
//! wrapper runs it a fixed number of times with the same argument.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::control::repeat_function;
//!
//! let mut log = Vec::new();
//! let mut repeater = repeat_function(|word: &str| log.push(word.to_uppercase()), 3);
//! repeater.invoke("hi");
//! drop(repeater);
//!
//! assert_eq!(log, vec!["HI", "HI", "HI"]);
//! ```
//!
//! Only callables are accepted, so a non-function argument does not compile:
//!
//! ```compile_fail
//! use lazyfn::control::repeat_function;
//!
//! let _ = repeat_function("not a fn", 3);
//! ```
//!
//! Nor does a non-numeric repeat count:
//!
//! ```compile_fail
//! use lazyfn::control::repeat_function;
//!
//! let _ = repeat_function(|x: i32| x, "three");
//! ```
//!
//! The count is a whole number, so a fractional count is rejected as well:
//!
//! ```compile_fail
//! use lazyfn::control::repeat_function;
//!
//! let _ = repeat_function(|x: i32| x, 2.5);
//! ```

use std::marker::PhantomData;

/// A wrapper that calls a function a fixed number of times per invocation.
///
/// Return values of the wrapped function are discarded. A count of zero or
/// less means the function is never called.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type `F` accepts
pub struct Repeater<F, A> {
    function: F,
    times: i64,
    argument: PhantomData<fn(A)>,
}

impl<F, A> Repeater<F, A> {
    /// Creates a repeater that calls `function` `times` times per invocation.
    #[inline]
    pub fn new<R>(function: F, times: i64) -> Self
    where
        F: FnMut(A) -> R,
    {
        Self {
            function,
            times,
            argument: PhantomData,
        }
    }

    /// Returns how many times each invocation calls the wrapped function.
    #[inline]
    pub const fn times(&self) -> i64 {
        self.times
    }

    /// Calls the wrapped function `times` times in sequence with `argument`.
    ///
    /// The argument is cloned for every call except the last one, which
    /// receives it by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::control::repeat_function;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let mut never = repeat_function(|_: ()| calls.set(calls.get() + 1), -4);
    /// never.invoke(());
    /// assert_eq!(calls.get(), 0);
    /// ```
    pub fn invoke<R>(&mut self, argument: A)
    where
        F: FnMut(A) -> R,
        A: Clone,
    {
        let mut count = 0;
        while count + 1 < self.times {
            let _ = (self.function)(argument.clone());
            count += 1;
        }
        if count < self.times {
            let _ = (self.function)(argument);
        }
    }
}

impl<F, A> std::fmt::Debug for Repeater<F, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Repeater")
            .field("times", &self.times)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that each [`Repeater::invoke`] calls it `times` times.
///
/// `function` must be callable with one argument; anything else is rejected
/// when the repeater is constructed.
#[inline]
pub fn repeat_function<A, R, F>(function: F, times: i64) -> Repeater<F, A>
where
    F: FnMut(A) -> R,
{
    Repeater::new(function, times)
}
