//! Integration tests for the counter's increment/reset contract.

use counter_model::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn n_increments_from_fresh() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n: u64 = rng.gen_range(0..500);
        let mut counter = Counter::new();
        for _ in 0..n {
            counter.increment();
        }
        assert_eq!(counter.current_count(), n);
    }
}

#[test]
fn reset_always_zeroes() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let mut counter = Counter::new();
        for _ in 0..rng.gen_range(0..100) {
            counter.increment();
        }
        counter.reset();
        assert_eq!(counter.current_count(), 0);
        counter.reset();
        assert_eq!(counter.current_count(), 0);
    }
}

#[test]
fn random_interleaving_matches_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut counter = Counter::new();
    let mut since_reset: u64 = 0;

    for _ in 0..10_000 {
        if rng.gen_bool(0.05) {
            counter.reset();
            since_reset = 0;
        } else {
            counter.increment();
            since_reset += 1;
        }
        assert_eq!(counter.current_count(), since_reset);
        assert_eq!(counter.is_zero(), since_reset == 0);
    }
}

#[test]
fn copies_are_independent() {
    let mut a = Counter::new();
    a.increment();

    let mut b = a;
    b.increment();
    b.increment();

    assert_eq!(a.current_count(), 1);
    assert_eq!(b.current_count(), 3);
}

#[cfg(feature = "std")]
#[test]
fn overflow_error_is_std_error() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    assert!(describe(&CounterError::Overflow).contains("u64::MAX"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_json_shape() {
    let mut counter = Counter::new();
    counter.increment();
    counter.increment();

    let json = serde_json::to_string(&counter).unwrap();
    assert_eq!(json, r#"{"current_count":2}"#);

    let back: Counter = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counter);
}
