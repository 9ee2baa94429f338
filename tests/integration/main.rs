//! Workspace-level integration tests
//!
//! Exercises the re-exported layers together and checks the contract-level
//! properties that hold across every transform.


use std::sync::Arc;

use seqkit::foundation::{Seq, Text};
use seqkit::ops::{grouping, positional, string};

fn texts(items: &[Option<&str>]) -> Seq<Text> {
    items.iter().map(|&t| t.map(Arc::from)).collect()
}

#[test]
fn layers_compose_through_reexports() {
    let data = texts(&[Some("bb"), Some("a"), None, Some("ccc")]);

    let sorted = string::sort_by_length_then_value(&data);
    assert_eq!(sorted, texts(&[None, Some("a"), Some("bb"), Some("ccc")]));

    let lengths = string::length_map(&sorted);
    assert_eq!(lengths, vec![0, 1, 2, 3].into());

    let alternate = positional::every_second(&sorted);
    assert_eq!(alternate, texts(&[Some("a"), Some("ccc")]));
}

#[test]
fn transforms_never_mutate_shared_input() {
    let data = texts(&[Some("x"), Some("yy"), None]);
    let snapshot = data.clone();

    let _ = string::upper_map(&data);
    let _ = string::sort_by_length_then_value(&data);
    let _ = grouping::count_occurrences(&data);
    let _ = positional::repeat_by_position(&data);

    assert_eq!(data, snapshot);
}
