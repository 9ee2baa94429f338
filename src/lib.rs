//! Seqkit - Pure sequence transform library
//!
//! This crate re-exports all layers of the seqkit system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: seqkit_ops        — Sequence transforms, grouped by input shape
//! Layer 0: seqkit_foundation — Core element types, errors, persistent sequences
//! ```

pub use seqkit_foundation as foundation;
pub use seqkit_ops as ops;
