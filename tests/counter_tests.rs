#![cfg(feature = "control")]
//! Unit tests for the Counter evaluator.
//!
//! Tests cover:
//! - Sequence of returned values
//! - Peek without advancing
//! - Iterator behaviour
//! - Independence of instances

use lazyfn::control::{Counter, create_counter};
use rstest::rstest;

// =============================================================================
// Sequence
// =============================================================================

#[rstest]
fn counter_five_calls_yield_zero_through_four() {
    let mut counter = create_counter();
    let values: Vec<u64> = (0..5).map(|_| counter.next_value()).collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(1_000)]
fn counter_returns_pre_increment_value(#[case] calls: u64) {
    let mut counter = create_counter();
    for _ in 0..calls {
        counter.next_value();
    }
    assert_eq!(counter.peek(), calls);
    assert_eq!(counter.next_value(), calls);
    assert_eq!(counter.peek(), calls + 1);
}

// =============================================================================
// Iterator
// =============================================================================

#[rstest]
fn counter_is_an_unbounded_iterator() {
    let counter = Counter::new();
    assert_eq!(counter.size_hint(), (usize::MAX, None));
}

#[rstest]
fn counter_iterator_and_next_value_share_state() {
    let mut counter = create_counter();
    let first_three: Vec<u64> = counter.by_ref().take(3).collect();

    assert_eq!(first_three, vec![0, 1, 2]);
    assert_eq!(counter.next_value(), 3);
}

// =============================================================================
// Independence
// =============================================================================

#[rstest]
fn counters_do_not_share_state() {
    let mut first = create_counter();
    let mut second = create_counter();

    for _ in 0..4 {
        first.next_value();
    }

    assert_eq!(second.next_value(), 0);
    assert_eq!(first.next_value(), 4);
}

#[rstest]
fn counter_can_move_to_another_thread() {
    let mut counter = create_counter();
    counter.next_value();

    let handle = std::thread::spawn(move || counter.next_value());
    assert_eq!(handle.join().unwrap(), 1);
}
