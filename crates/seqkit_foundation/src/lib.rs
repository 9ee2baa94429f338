//! Core element types, errors, and persistent sequences for seqkit.
//!
//! This crate provides:
//! - [`Seq`] - The immutable sequence every transform consumes and produces
//! - [`CharSet`] - Ordered character sets for the char-set operations
//! - [`Text`] - Nullable string elements (absence is distinct from `""`)
//! - [`Value`] - The closed sum type for heterogeneous sequence elements
//! - [`Error`] - Error types for the fallible operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{CharSet, Seq};
pub use error::{Error, Result};
pub use types::Kind;
pub use value::{Text, Value, text};
