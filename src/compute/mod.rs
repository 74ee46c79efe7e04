//! Stateless computations over plain data.
//!
//! - Pricing: [`calculate_discounted_price`], [`calculate_total_price`]
//! - Grades: [`average_grade`]
//! - Text: [`filter_unique_words`]
//! - Arithmetic: [`factorial`], [`power`]
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::compute::{Product, calculate_discounted_price, calculate_total_price};
//!
//! let cart = vec![Product::new("Pen", 2.0), Product::new("Notebook", 8.0)];
//! let sale = calculate_discounted_price(&cart, 25.0).unwrap();
//! assert_eq!(calculate_total_price(&sale), 7.5);
//! ```

mod arithmetic;
mod grades;
mod pricing;
mod text;

pub use arithmetic::{MAX_FACTORIAL_INPUT, factorial, power};
pub use grades::{Student, average_grade};
pub use pricing::{Product, calculate_discounted_price, calculate_total_price};
pub use text::filter_unique_words;
