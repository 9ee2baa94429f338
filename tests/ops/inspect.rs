//! Integration tests for heterogeneous value inspection

use std::sync::Arc;

use chrono::NaiveDate;
use seqkit_foundation::{Seq, Value};
use seqkit_ops::inspect::{average_of_floats, sum_of_ints, texts_only};

fn grab_bag() -> Seq<Value> {
    vec![
        Value::from("label"),
        Value::Int(10),
        Value::Float(1.0),
        Value::Bool(false),
        Value::Nil,
        Value::Int(-4),
        Value::Date(NaiveDate::from_ymd_opt(2018, 1, 2).unwrap()),
        Value::Float(3.0),
        Value::from("tail"),
    ]
    .into()
}

#[test]
fn sum_of_ints_only_int_variant() {
    // Floats and booleans never contribute.
    assert_eq!(sum_of_ints(&grab_bag()), 6);
}

#[test]
fn sum_of_ints_all_non_ints_is_zero() {
    let data: Seq<Value> = vec![Value::Float(9.0), Value::from("9"), Value::Bool(true)].into();
    assert_eq!(sum_of_ints(&data), 0);
}

#[test]
fn texts_only_in_order() {
    let picked: Vec<Arc<str>> = texts_only(&grab_bag()).into_iter().collect();
    assert_eq!(picked, vec![Arc::from("label"), Arc::from("tail")]);
}

#[test]
fn texts_only_empty_input() {
    assert!(texts_only(&Seq::new()).is_empty());
}

#[test]
fn average_of_floats_mean() {
    let avg = average_of_floats(&grab_bag());
    assert!((avg - 2.0).abs() < f64::EPSILON);
}

#[test]
fn average_of_floats_no_floats_is_zero() {
    let data: Seq<Value> = vec![Value::Int(100)].into();
    assert_eq!(average_of_floats(&data), 0.0);
}
