//! Index-driven transforms over any element type.

use seqkit_foundation::Seq;

/// Elements at zero-based odd indices (the second, fourth, ... items).
#[must_use]
pub fn every_second<T: Clone>(data: &Seq<T>) -> Seq<T> {
    data.iter().skip(1).step_by(2).cloned().collect()
}

/// Repeats the element at zero-based index `i` exactly `i + 1` times,
/// preserving relative order.
#[must_use]
pub fn repeat_by_position<T: Clone>(data: &Seq<T>) -> Seq<T> {
    data.iter()
        .enumerate()
        .flat_map(|(i, item)| std::iter::repeat_n(item.clone(), i + 1))
        .collect()
}
