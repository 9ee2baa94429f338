//! Numeric sequence transforms.

use chrono::{Datelike, NaiveDate};
use seqkit_foundation::Seq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dated sale amount, consumed by [`quarter_totals`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sale {
    /// The calendar date the sale was recorded.
    pub date: NaiveDate,
    /// The sale amount.
    pub amount: i64,
}

impl Sale {
    /// Creates a new sale record.
    #[must_use]
    pub const fn new(date: NaiveDate, amount: i64) -> Self {
        Self { date, amount }
    }
}

/// Element-wise signed square, widened to 64 bits.
///
/// The widening means no value in the 32-bit input domain can overflow the
/// result.
#[must_use]
pub fn square_map(data: &Seq<i32>) -> Seq<i64> {
    data.iter().map(|&n| i64::from(n) * i64::from(n)).collect()
}

/// Running prefix sums with a 64-bit accumulator.
///
/// `result[i]` is the sum of `data[0..=i]`.
#[must_use]
pub fn moving_sum(data: &Seq<i32>) -> Seq<i64> {
    let mut acc = 0_i64;
    data.iter()
        .map(|&n| {
            acc += i64::from(n);
            acc
        })
        .collect()
}

/// Pairwise sums, zipped to the shorter input.
#[must_use]
pub fn vector_sum(v1: &Seq<i64>, v2: &Seq<i64>) -> Seq<i64> {
    v1.iter().zip(v2.iter()).map(|(a, b)| a + b).collect()
}

/// Dot product: pairwise products summed, zipped to the shorter input.
#[must_use]
pub fn dot_product(v1: &Seq<i64>, v2: &Seq<i64>) -> i64 {
    v1.iter().zip(v2.iter()).map(|(a, b)| a * b).sum()
}

/// Sums sale amounts into the four calendar quarters.
///
/// Always exactly four totals in quarter order; quarters with no sales
/// total 0.
#[must_use]
pub fn quarter_totals(sales: &Seq<Sale>) -> [i64; 4] {
    let mut totals = [0_i64; 4];
    for sale in sales.iter() {
        totals[(sale.date.month0() / 3) as usize] += sale.amount;
    }
    totals
}

/// The first run of strictly negative values.
///
/// Skips the leading run of non-negatives, then takes the maximal following
/// run of negatives; empty when no negative value follows the leading run.
#[must_use]
pub fn first_negative_run(data: &Seq<i64>) -> Seq<i64> {
    data.iter()
        .skip_while(|&&n| n >= 0)
        .take_while(|&&n| n < 0)
        .copied()
        .collect()
}
