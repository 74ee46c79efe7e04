#![cfg(feature = "control")]
//! Unit tests for the LazyMap evaluator.
//!
//! Tests cover:
//! - Element-at-a-time mapping and the empty marker
//! - Snapshot isolation from the caller's collection
//! - Laziness of the mapping function
//! - Iterator integration

use lazyfn::control::{LazyMap, lazy_map};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Basic Mapping
// =============================================================================

#[rstest]
fn lazy_map_doubles_then_saturates() {
    let mut doubled = lazy_map([1, 2, 3], |x| x * 2);

    assert_eq!(doubled.next_mapped(), Some(2));
    assert_eq!(doubled.next_mapped(), Some(4));
    assert_eq!(doubled.next_mapped(), Some(6));
    assert_eq!(doubled.next_mapped(), None);
    assert_eq!(doubled.next_mapped(), None);
}

#[rstest]
fn lazy_map_can_change_element_type() {
    let mut lengths = lazy_map(vec!["one", "three"], |word| word.len());
    assert_eq!(lengths.next_mapped(), Some(3));
    assert_eq!(lengths.next_mapped(), Some(5));
    assert_eq!(lengths.next_mapped(), None);
}

// =============================================================================
// Snapshot Isolation
// =============================================================================

#[rstest]
fn lazy_map_from_slice_ignores_later_mutation() {
    let mut source = vec![1, 2, 3];
    let mut mapper = LazyMap::from_slice(&source, |x: &i32| x + 100);

    source[0] = 999;
    source.push(4);

    assert_eq!(mapper.by_ref().collect::<Vec<_>>(), vec![101, 102, 103]);
}

#[rstest]
fn lazy_map_owns_its_snapshot() {
    let source = vec![String::from("a"), String::from("b")];
    let mut mapper = lazy_map(source.clone(), |s| s.repeat(2));
    drop(source);

    assert_eq!(mapper.next_mapped().as_deref(), Some("aa"));
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn lazy_map_only_maps_on_demand() {
    let calls = Cell::new(0);
    let mut mapper = lazy_map(0..10, |x| {
        calls.set(calls.get() + 1);
        x * x
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapper.next_mapped(), Some(0));
    assert_eq!(mapper.next_mapped(), Some(1));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn lazy_map_exhausted_does_not_call_function() {
    let calls = Cell::new(0);
    let mut mapper = lazy_map([5], |x| {
        calls.set(calls.get() + 1);
        *x
    });

    mapper.next_mapped();
    for _ in 0..5 {
        assert_eq!(mapper.next_mapped(), None);
    }
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Iterator Integration
// =============================================================================

#[rstest]
fn lazy_map_reports_exact_length() {
    let mut mapper = lazy_map([1, 2, 3, 4], |x| x + 1);
    assert_eq!(mapper.len(), 4);
    mapper.next();
    assert_eq!(mapper.len(), 3);
    assert_eq!(mapper.position(), 1);
}

#[rstest]
fn lazy_map_composes_with_adapters() {
    let evens: Vec<i32> = lazy_map(1..=6, |x| x * 10)
        .filter(|value| value % 20 == 0)
        .collect();
    assert_eq!(evens, vec![20, 40, 60]);
}

#[rstest]
fn lazy_map_is_fused() {
    let mut mapper = lazy_map(Vec::<u8>::new(), |x| *x);
    assert_eq!(mapper.next(), None);
    assert_eq!(mapper.next(), None);
    assert!(mapper.is_exhausted());
}
