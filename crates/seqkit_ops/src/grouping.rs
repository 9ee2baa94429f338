//! Aggregation and grouping over sequences.

use std::collections::{HashMap, HashSet};

use seqkit_foundation::{Error, Result, Seq, Text};

use crate::char_len;

/// Counts elements strictly greater than `threshold`.
#[must_use]
pub fn count_greater_than(data: &Seq<i64>, threshold: i64) -> usize {
    data.iter().filter(|&&n| n > threshold).count()
}

/// The `k` largest values in descending order.
///
/// Duplicates are retained; fewer than `k` values come back when the input
/// is shorter.
#[must_use]
pub fn top_k(data: &Seq<i64>, k: usize) -> Seq<i64> {
    let mut items: Vec<i64> = data.iter().copied().collect();
    items.sort_unstable_by(|a, b| b.cmp(a));
    items.truncate(k);
    items.into_iter().collect()
}

/// The first non-absent, non-empty element containing `needle`, ignoring
/// case; `None` when nothing matches.
#[must_use]
pub fn first_containing(data: &Seq<Text>, needle: &str) -> Text {
    let needle = needle.to_lowercase();
    data.iter()
        .filter_map(|t| t.as_ref())
        .find(|s| !s.is_empty() && s.to_lowercase().contains(&needle))
        .cloned()
}

/// Counts distinct values whose character count equals `len`.
///
/// The absent value is a distinct value of length 0.
#[must_use]
pub fn count_distinct_of_length(data: &Seq<Text>, len: usize) -> usize {
    let distinct: HashSet<&Text> = data.iter().collect();
    distinct.into_iter().filter(|t| char_len(t) == len).count()
}

/// Occurrence counts per distinct value, in first-encounter order.
///
/// The absent value is a valid distinct key.
#[must_use]
pub fn count_occurrences(data: &Seq<Text>) -> Seq<(Text, i64)> {
    let mut order: Vec<Text> = Vec::new();
    let mut counts: HashMap<Text, i64> = HashMap::new();
    for t in data.iter() {
        let count = counts.entry(t.clone()).or_insert(0);
        if *count == 0 {
            order.push(t.clone());
        }
        *count += 1;
    }
    order.into_iter().map(|t| {
        let count = counts[&t];
        (t, count)
    }).collect()
}

/// The number of elements whose character count equals the maximum
/// observed; 0 for an empty input.
#[must_use]
pub fn count_at_max_length(data: &Seq<Text>) -> usize {
    let mut groups: HashMap<usize, usize> = HashMap::new();
    for t in data.iter() {
        *groups.entry(char_len(t)).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .max_by_key(|&(len, _)| len)
        .map_or(0, |(_, size)| size)
}

/// Counts the decimal-digit characters in a single string.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] when `text` is absent.
pub fn digit_char_count(text: Option<&str>) -> Result<usize> {
    let Some(text) = text else {
        return Err(Error::MissingArgument("text"));
    };
    Ok(text.chars().filter(char::is_ascii_digit).count())
}
