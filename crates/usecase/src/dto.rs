// crates/usecase/src/dto.rs
use char_freq_domain::{
    ClassificationPolicy, ResultSequence,
    value_objects::{FrequencyValue, OccurrenceCount, RankFraction},
};
use serde::Serialize;

/// Result of analyzing one source.
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "V: FrequencyValue"))]
pub struct AnalysisReport<V> {
    pub source: String,
    pub policy: ClassificationPolicy,
    pub rows: ResultSequence<V>,
    /// Sum over every accepted character, including rows cut by `--top`.
    pub total: V,
}

pub type CountReport = AnalysisReport<OccurrenceCount>;
pub type RankReport = AnalysisReport<RankFraction>;
