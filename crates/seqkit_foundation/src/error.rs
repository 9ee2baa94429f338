//! Error types for seqkit operations.
//!
//! Uses `thiserror` for ergonomic error definition. Most transforms are
//! total; the variants here cover the few fail-fast argument checks and the
//! event log boundary.

use thiserror::Error;

/// The error type for seqkit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required filter or text argument was absent.
    ///
    /// Raised before any element is examined; no partial computation occurs.
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    /// An element was not one of the ten recognized digit-name tokens.
    #[error("unrecognized digit name: {0:?}")]
    UnrecognizedDigitName(String),

    /// An event log collaborator failed to answer a query.
    #[error("event log query failed: {0}")]
    LogQuery(String),
}

/// A specialized result type for seqkit operations.
pub type Result<T> = std::result::Result<T, Error>;
