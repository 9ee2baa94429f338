//! Sequence transform functions, grouped by input shape.
//!
//! This crate provides the transform functions organized by category:
//! - [`string`] - Text sequence transforms (nullable-string semantics)
//! - [`numeric`] - Integer transforms and quarter aggregation
//! - [`positional`] - Index-driven transforms over any element type
//! - [`grouping`] - Aggregation and grouping
//! - [`inspect`] - Heterogeneous value inspection
//! - [`combine`] - Cross-sequence combination
//! - [`eventlog`] - The host event log boundary
//!
//! Every function is a pure, stateless transformation: inputs are never
//! mutated, nothing is shared between calls, and re-running a transform on
//! the same input yields identical output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combine;
pub mod eventlog;
pub mod grouping;
pub mod inspect;
pub mod numeric;
pub mod positional;
pub mod string;

use seqkit_foundation::Text;

/// Character count of a text element, treating absence as length zero.
pub(crate) fn char_len(text: &Text) -> usize {
    text.as_deref().map_or(0, |s| s.chars().count())
}
