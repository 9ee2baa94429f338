//! Text sequence transforms.
//!
//! All functions here consume sequences of nullable text elements. An
//! absent element is a valid value: it counts as zero-length where a length
//! is needed, and it is never conflated with the empty string.

use std::sync::Arc;

use seqkit_foundation::{CharSet, Error, Result, Seq, Text};

use crate::char_len;

/// The ten decimal digit characters in canonical order.
const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Digit-name tokens indexed by their numeric value.
const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Element-wise uppercase conversion; absent elements stay absent.
#[must_use]
pub fn upper_map(data: &Seq<Text>) -> Seq<Text> {
    data.iter()
        .map(|t| t.as_deref().map(|s| Arc::<str>::from(s.to_uppercase())))
        .collect()
}

/// Element-wise character count; an absent element counts as 0.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn length_map(data: &Seq<Text>) -> Seq<i64> {
    data.iter().map(|t| char_len(t) as i64).collect()
}

/// Keeps the non-absent elements that start with `prefix`, ignoring case.
///
/// The empty prefix matches every non-absent element.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] when `prefix` itself is absent.
pub fn prefix_filter(data: &Seq<Text>, prefix: Option<&str>) -> Result<Seq<Text>> {
    let Some(prefix) = prefix else {
        return Err(Error::MissingArgument("prefix"));
    };
    let prefix = prefix.to_lowercase();
    Ok(data
        .iter()
        .filter(|t| {
            t.as_deref()
                .is_some_and(|s| s.to_lowercase().starts_with(&prefix))
        })
        .cloned()
        .collect())
}

/// The distinct characters used across all non-absent elements.
#[must_use]
pub fn used_chars(data: &Seq<Text>) -> CharSet {
    data.iter()
        .filter_map(|t| t.as_deref())
        .flat_map(str::chars)
        .collect()
}

/// The decimal digits that appear in no element, in canonical digit order.
#[must_use]
pub fn missing_digits(data: &Seq<Text>) -> Seq<char> {
    let used = used_chars(data);
    DIGITS.iter().copied().filter(|&d| !used.contains(d)).collect()
}

/// The characters present in every element of the sequence.
///
/// An absent element contributes no characters, so its presence empties the
/// result. An empty sequence yields the empty set.
#[must_use]
pub fn common_chars(data: &Seq<Text>) -> CharSet {
    let mut sets = data
        .iter()
        .map(|t| t.as_deref().unwrap_or("").chars().collect::<CharSet>());
    let Some(first) = sets.next() else {
        return CharSet::new();
    };
    sets.fold(first, |acc, set| acc.intersection(&set))
}

/// Stable ascending sort by character count, then lexicographic value.
///
/// An absent element sorts as length 0, before any present value of the
/// same length.
#[must_use]
pub fn sort_by_length_then_value(data: &Seq<Text>) -> Seq<Text> {
    let mut items: Vec<Text> = data.iter().cloned().collect();
    items.sort_by(|a, b| char_len(a).cmp(&char_len(b)).then_with(|| a.cmp(b)));
    items.into_iter().collect()
}

/// Stable ascending sort of digit-name tokens by their numeric value.
///
/// Tokens are matched case-insensitively against the "zero".."nine" table;
/// relative order of equal tokens is preserved.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedDigitName`] when an element (including an
/// absent one) is not one of the ten recognized tokens.
pub fn digit_name_sort(data: &Seq<Text>) -> Result<Seq<Text>> {
    let mut keyed: Vec<(usize, Text)> = Vec::with_capacity(data.len());
    for token in data.iter() {
        keyed.push((digit_value(token)?, token.clone()));
    }
    keyed.sort_by_key(|&(value, _)| value);
    Ok(keyed.into_iter().map(|(_, token)| token).collect())
}

/// Numeric value of a digit-name token, case-insensitive.
fn digit_value(token: &Text) -> Result<usize> {
    let Some(token) = token.as_deref() else {
        return Err(Error::UnrecognizedDigitName("nil".to_string()));
    };
    let lowered = token.to_lowercase();
    DIGIT_NAMES
        .iter()
        .position(|&name| name == lowered)
        .ok_or_else(|| Error::UnrecognizedDigitName(token.to_string()))
}

/// Total character count over all elements, absent treated as empty.
///
/// Equivalent to concatenating every element and measuring the result.
#[must_use]
pub fn total_length(data: &Seq<Text>) -> usize {
    data.iter().map(char_len).sum()
}

/// True iff at least one element is absent.
#[must_use]
pub fn has_absent(data: &Seq<Text>) -> bool {
    data.iter().any(Option::is_none)
}

/// True iff the sequence is non-empty, holds no absent or empty element,
/// and every element equals its own uppercase form.
#[must_use]
pub fn all_uppercase(data: &Seq<Text>) -> bool {
    !data.is_empty()
        && data.iter().all(|t| {
            t.as_deref()
                .is_some_and(|s| !s.is_empty() && s.to_uppercase() == s)
        })
}
