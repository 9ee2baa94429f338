//! Integration tests for cross-sequence combination

use std::sync::Arc;

use seqkit_foundation::Seq;
use seqkit_ops::combine::{
    cross_join, join_pairwise, next_after, sequences_numerically_equal,
};

use crate::names;

// =============================================================================
// Numeric Equality
// =============================================================================

#[test]
fn equal_sequences_after_widening() {
    let ints: Seq<i64> = vec![0, -7, 42].into();
    let floats: Seq<f64> = vec![0.0, -7.0, 42.0].into();
    assert!(sequences_numerically_equal(&ints, &floats));
}

#[test]
fn empty_sequences_are_equal() {
    assert!(sequences_numerically_equal(&Seq::new(), &Seq::new()));
}

#[test]
fn prefix_is_not_equal() {
    let ints: Seq<i64> = vec![1, 2].into();
    let floats: Seq<f64> = vec![1.0, 2.0, 3.0].into();
    assert!(!sequences_numerically_equal(&ints, &floats));
}

// =============================================================================
// Next-In-List Lookup
// =============================================================================

#[test]
fn next_after_first_match_wins() {
    let list = names(&["1.2", "1.3", "1.2", "2.0"]);
    assert_eq!(next_after(&list, "1.2"), Some(Arc::from("1.3")));
}

#[test]
fn next_after_case_insensitive_match() {
    let list = names(&["Alpha", "beta"]);
    assert_eq!(next_after(&list, "alpha"), Some(Arc::from("beta")));
}

#[test]
fn next_after_missing_current() {
    let list = names(&["1.0"]);
    assert_eq!(next_after(&list, "0.9"), None);
}

#[test]
fn next_after_current_is_last() {
    let list = names(&["1.0", "1.1"]);
    assert_eq!(next_after(&list, "1.1"), None);
}

// =============================================================================
// Pairwise and Cartesian Joins
// =============================================================================

#[test]
fn join_pairwise_documented_contract() {
    let a = names(&["one", "two", "three"]);
    let b: Seq<Arc<str>> = Seq::new();
    assert_eq!(join_pairwise(&a, &b), Seq::new());
}

#[test]
fn join_pairwise_single_space_separator() {
    let joined = join_pairwise(&names(&["a", "b"]), &names(&["1", "2", "3"]));
    assert_eq!(joined, names(&["a 1", "b 2"]));
}

#[test]
fn cross_join_documented_contract() {
    let pairs = cross_join(&names(&["John"]), &names(&["Ann", "Alice"]));
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs, names(&["John+Ann", "John+Alice"]));
}

#[test]
fn cross_join_nested_order() {
    let pairs = cross_join(&names(&["A", "B"]), &names(&["x", "y"]));
    assert_eq!(pairs, names(&["A+x", "A+y", "B+x", "B+y"]));
}

#[test]
fn cross_join_dedups_repeated_pairs() {
    let pairs = cross_join(&names(&["A", "A"]), &names(&["x", "x"]));
    assert_eq!(pairs, names(&["A+x"]));
}

#[test]
fn cross_join_empty_side() {
    assert!(cross_join(&names(&["A"]), &Seq::new()).is_empty());
}
