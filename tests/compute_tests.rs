#![cfg(feature = "compute")]
//! Tests for the stateless computations.
//!
//! Tests cover:
//! - Discounted and total prices
//! - Pooled average grades
//! - Unique word extraction
//! - Factorial and power

use lazyfn::ArgumentIssue;
use lazyfn::compute::{
    MAX_FACTORIAL_INPUT, Product, Student, average_grade, calculate_discounted_price,
    calculate_total_price, factorial, filter_unique_words, power,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> Vec<Product> {
    vec![
        Product::new("Laptop", 1000.0),
        Product::new("Phone", 500.0),
        Product::new("Tablet", 300.0),
    ]
}

// =============================================================================
// Pricing
// =============================================================================

#[rstest]
fn discount_applies_to_every_product(catalog: Vec<Product>) {
    let discounted = calculate_discounted_price(&catalog, 20.0).unwrap();
    let prices: Vec<f64> = discounted.iter().map(|product| product.price).collect();
    assert_eq!(prices, vec![800.0, 400.0, 240.0]);
}

#[rstest]
fn discount_does_not_modify_input(catalog: Vec<Product>) {
    let snapshot = catalog.clone();
    let _ = calculate_discounted_price(&catalog, 50.0).unwrap();
    assert_eq!(catalog, snapshot);
}

#[rstest]
fn discount_then_total(catalog: Vec<Product>) {
    let discounted = calculate_discounted_price(&catalog, 10.0).unwrap();
    assert!((calculate_total_price(&discounted) - 1620.0).abs() < 1e-9);
}

#[rstest]
fn discount_rejects_nan() {
    let error = calculate_discounted_price(&[], f64::NAN).unwrap_err();
    assert_eq!(error.issue(), ArgumentIssue::NotFinite);
}

// =============================================================================
// Grades
// =============================================================================

#[rstest]
fn average_pools_all_grades() {
    let students = vec![
        Student::new("Alice", vec![90.0, 85.0, 95.0]),
        Student::new("Bob", vec![75.0, 80.0]),
    ];
    assert!((average_grade(&students).unwrap() - 85.0).abs() < 1e-9);
}

#[rstest]
fn average_without_grades_is_invalid() {
    assert_eq!(
        average_grade(&[]).unwrap_err().issue(),
        ArgumentIssue::Empty
    );
}

// =============================================================================
// Words
// =============================================================================

#[rstest]
fn unique_words_are_lowercase_and_sorted() {
    let text = "Hello world! The WORLD says hello, and hello again.";
    assert_eq!(
        filter_unique_words(text),
        vec!["again", "and", "hello", "says", "the", "world"]
    );
}

#[rstest]
fn unique_words_split_on_non_ascii_letters() {
    assert_eq!(
        filter_unique_words("Café au lait, CAFÉ noir"),
        vec!["au", "caf", "lait", "noir"]
    );
}

// =============================================================================
// Arithmetic
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(5, 120)]
#[case(12, 479_001_600)]
fn factorial_values(#[case] number: u32, #[case] expected: u128) {
    assert_eq!(factorial(number), Ok(expected));
}

#[rstest]
fn factorial_overflow_is_invalid() {
    assert!(factorial(MAX_FACTORIAL_INPUT).is_ok());
    assert!(factorial(100).is_err());
}

#[rstest]
#[case(2.0, 0, 1.0)]
#[case(2.0, 8, 256.0)]
#[case(10.0, 3, 1000.0)]
fn power_values(#[case] base: f64, #[case] exponent: u32, #[case] expected: f64) {
    assert!((power(base, exponent) - expected).abs() < 1e-9);
}

proptest! {
    /// factorial(n) = n * factorial(n - 1) within the supported range
    #[test]
    fn prop_factorial_recurrence(number in 1u32..=MAX_FACTORIAL_INPUT) {
        let current = factorial(number).unwrap();
        let previous = factorial(number - 1).unwrap();
        prop_assert_eq!(current, u128::from(number) * previous);
    }
}

proptest! {
    /// power(b, e + 1) = power(b, e) * b for small integer bases
    #[test]
    fn prop_power_recurrence(base in -8i32..8, exponent in 0u32..10) {
        let base = f64::from(base);
        prop_assert_eq!(power(base, exponent + 1), power(base, exponent) * base);
    }
}
