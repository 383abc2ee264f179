// crates/domain/src/analytics/rank.rs
use hashbrown::HashMap;
use num_traits::Zero;

use crate::{
    model::FrequencyTable,
    value_objects::{OccurrenceCount, RankFraction},
};

/// Converts a count table into a table of rank fractions (`count / total`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RankNormalizer;

impl RankNormalizer {
    /// Builds a new table with the same keys; the input is left untouched.
    ///
    /// An empty input (total of zero) yields an empty table, so no entry is
    /// ever NaN or infinite.
    pub fn normalize(counts: &FrequencyTable<OccurrenceCount>) -> FrequencyTable<RankFraction> {
        let total = counts.total();
        if total.is_zero() {
            return FrequencyTable::new();
        }

        let entries: HashMap<_, _> = counts
            .iter()
            .map(|(symbol, count)| (symbol, RankFraction::of(count, total)))
            .collect();
        log::trace!("normalized {} entries over a total of {total}", entries.len());
        FrequencyTable::from_entries(entries)
    }
}

impl FrequencyTable<OccurrenceCount> {
    /// Shorthand for [`RankNormalizer::normalize`].
    pub fn to_ranks(&self) -> FrequencyTable<RankFraction> {
        RankNormalizer::normalize(self)
    }
}
