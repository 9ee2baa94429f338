//! Integration tests for error types

use seqkit_foundation::Error;

#[test]
fn missing_argument_message() {
    let err = Error::MissingArgument("prefix");
    assert_eq!(format!("{err}"), "missing required argument: prefix");
}

#[test]
fn unrecognized_digit_name_message() {
    let err = Error::UnrecognizedDigitName("eleven".to_string());
    let msg = format!("{err}");
    assert!(msg.contains("unrecognized digit name"));
    assert!(msg.contains("eleven"));
}

#[test]
fn log_query_message() {
    let err = Error::LogQuery("no such source: Security".to_string());
    assert!(format!("{err}").contains("event log query failed"));
}

#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Error::MissingArgument("text"));
}
