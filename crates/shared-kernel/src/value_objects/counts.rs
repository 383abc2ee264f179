// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    cmp::Ordering,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Numeric kind stored in a frequency table.
///
/// Implemented by [`OccurrenceCount`] and [`RankFraction`]; tables and result
/// sequences are generic over it so counts and ranks never mix.
pub trait FrequencyValue: Copy + fmt::Debug + fmt::Display + Serialize + Zero + Sum {
    /// Label used by renderers for the value column.
    const LABEL: &'static str;

    /// Fixed number of decimals for tabular output; `None` prints integers as-is.
    const DISPLAY_PRECISION: Option<usize>;

    /// Total order over values, used by value-keyed sorts.
    fn compare(&self, other: &Self) -> Ordering;

    fn as_f64(self) -> f64;
}

/// Number of times a canonical character was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccurrenceCount(u64);

impl OccurrenceCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += 1;
    }
}

impl Default for OccurrenceCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for OccurrenceCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for OccurrenceCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Zero for OccurrenceCount {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Sum for OccurrenceCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a OccurrenceCount> for OccurrenceCount {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for OccurrenceCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<OccurrenceCount> for u64 {
    fn from(value: OccurrenceCount) -> Self {
        value.0
    }
}

impl PartialEq<u64> for OccurrenceCount {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl FrequencyValue for OccurrenceCount {
    const LABEL: &'static str = "Count";
    const DISPLAY_PRECISION: Option<usize> = None;

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// A character's share of the total count, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankFraction(f64);

impl RankFraction {
    pub const ZERO: Self = Self(0.0);

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// `part / total`. Callers guarantee `total` is non-zero.
    #[inline]
    pub fn of(part: OccurrenceCount, total: OccurrenceCount) -> Self {
        Self(part.as_f64() / total.as_f64())
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for RankFraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for RankFraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Zero for RankFraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Sum for RankFraction {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<RankFraction> for f64 {
    fn from(value: RankFraction) -> Self {
        value.0
    }
}

impl FrequencyValue for RankFraction {
    const LABEL: &'static str = "Rank";
    const DISPLAY_PRECISION: Option<usize> = Some(4);

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self.0
    }
}

mod display {
    use std::fmt;

    use super::{OccurrenceCount, RankFraction};

    // Delegates so width/precision flags reach the inner number.
    impl fmt::Display for OccurrenceCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    impl fmt::Display for RankFraction {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }
}
