//! Heterogeneous value sequence inspection.
//!
//! These functions dispatch by [`Value`] variant tag. An integer is never
//! treated as a float, nor the reverse.

use std::sync::Arc;

use seqkit_foundation::{Seq, Value};

/// Sums the integer elements, ignoring every other variant.
///
/// An empty input, or one with no integer element, sums to 0.
#[must_use]
pub fn sum_of_ints(data: &Seq<Value>) -> i64 {
    data.iter().filter_map(Value::as_int).sum()
}

/// Order-preserving subsequence of the string elements.
#[must_use]
pub fn texts_only(data: &Seq<Value>) -> Seq<Arc<str>> {
    data.iter()
        .filter_map(|v| match v {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}

/// Arithmetic mean of the float elements.
///
/// Returns 0.0 when no float is present. The zero is the contract's defined
/// empty-case sentinel and covers both an empty input and an input with no
/// float element.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_of_floats(data: &Seq<Value>) -> f64 {
    let floats: Vec<f64> = data.iter().filter_map(Value::as_float).collect();
    if floats.is_empty() {
        return 0.0;
    }
    floats.iter().sum::<f64>() / floats.len() as f64
}
