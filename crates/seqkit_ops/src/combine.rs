//! Cross-sequence combination.

use std::collections::HashSet;
use std::sync::Arc;

use seqkit_foundation::Seq;

/// True iff the sequences have the same length and are element-wise equal
/// after widening each integer to a float.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::float_cmp)]
pub fn sequences_numerically_equal(ints: &Seq<i64>, floats: &Seq<f64>) -> bool {
    ints.len() == floats.len()
        && ints
            .iter()
            .zip(floats.iter())
            .all(|(&i, &f)| (i as f64) == f)
}

/// The element immediately following the first case-insensitive match of
/// `current`; `None` when `current` is unmatched or matches the last
/// element.
#[must_use]
pub fn next_after(list: &Seq<Arc<str>>, current: &str) -> Option<Arc<str>> {
    let current = current.to_lowercase();
    let pos = list.iter().position(|s| s.to_lowercase() == current)?;
    list.get(pos + 1).cloned()
}

/// Zips two sequences to the shorter length, joining each pair with a
/// single space.
#[must_use]
pub fn join_pairwise(a: &Seq<Arc<str>>, b: &Seq<Arc<str>>) -> Seq<Arc<str>> {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| Arc::<str>::from(format!("{x} {y}")))
        .collect()
}

/// All ordered pairs joined as `"a+b"`, deduplicated, in left-major,
/// right-minor order.
#[must_use]
pub fn cross_join(left: &Seq<Arc<str>>, right: &Seq<Arc<str>>) -> Seq<Arc<str>> {
    let mut seen: HashSet<Arc<str>> = HashSet::new();
    let mut pairs = Seq::new();
    for l in left.iter() {
        for r in right.iter() {
            let joined: Arc<str> = format!("{l}+{r}").into();
            if seen.insert(joined.clone()) {
                pairs = pairs.push_back(joined);
            }
        }
    }
    pairs
}
