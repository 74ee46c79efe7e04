//! Product price calculations.

use crate::error::{ArgumentIssue, InvalidArgument};

/// A product with a name and a price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// The product name.
    pub name: String,
    /// The unit price.
    pub price: f64,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Returns copies of `products` with `percentage` percent taken off each price.
///
/// The input products are not modified.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `percentage` is NaN or infinite.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compute::{Product, calculate_discounted_price};
///
/// let products = vec![Product::new("Laptop", 1000.0), Product::new("Mouse", 20.0)];
/// let discounted = calculate_discounted_price(&products, 10.0).unwrap();
///
/// assert_eq!(discounted[0].price, 900.0);
/// assert_eq!(discounted[1].price, 18.0);
/// assert_eq!(products[0].price, 1000.0);
/// ```
pub fn calculate_discounted_price(
    products: &[Product],
    percentage: f64,
) -> Result<Vec<Product>, InvalidArgument> {
    if !percentage.is_finite() {
        return Err(InvalidArgument::new("percentage", ArgumentIssue::NotFinite));
    }
    Ok(products
        .iter()
        .map(|product| Product {
            price: product.price - product.price * percentage / 100.0,
            ..product.clone()
        })
        .collect())
}

/// Returns the sum of all product prices, or 0 for an empty slice.
pub fn calculate_total_price(products: &[Product]) -> f64 {
    products.iter().map(|product| product.price).sum()
}
