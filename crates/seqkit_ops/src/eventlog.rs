//! Host event log boundary.
//!
//! The one environment-dependent operation: counting log entries of a given
//! severity. The host log lives behind the [`EventLog`] trait; the library
//! ships only an in-memory implementation, which doubles as the reference
//! semantics and the test double.

use std::fmt;

use seqkit_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Severity classification of an event log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// Failures.
    Error,
    /// Conditions worth attention.
    Warning,
    /// Routine notices.
    Information,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Information => write!(f, "information"),
        }
    }
}

/// A host event log that can be queried by source and severity.
pub trait EventLog {
    /// Counts the entries recorded under `source` with the given severity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogQuery`] when `source` cannot be enumerated.
    fn count_entries(&self, source: &str, severity: Severity) -> Result<u64>;
}

/// In-memory event log.
#[derive(Clone, Debug, Default)]
pub struct MemoryEventLog {
    entries: Vec<(String, Severity)>,
}

impl MemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry under `source`.
    pub fn record(&mut self, source: impl Into<String>, severity: Severity) {
        self.entries.push((source.into(), severity));
    }
}

impl EventLog for MemoryEventLog {
    fn count_entries(&self, source: &str, severity: Severity) -> Result<u64> {
        if !self.entries.iter().any(|(s, _)| s == source) {
            return Err(Error::LogQuery(format!("no such source: {source}")));
        }
        let count = self
            .entries
            .iter()
            .filter(|(s, sev)| s == source && *sev == severity)
            .count();
        Ok(count as u64)
    }
}
