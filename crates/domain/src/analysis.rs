// crates/domain/src/analysis.rs
use std::io::{Read, Seek};

use char_freq_shared_kernel::DomainResult;

use crate::{
    classification::ClassificationPolicy,
    model::{FrequencyTable, ResultSequence},
    value_objects::{OccurrenceCount, RankFraction},
};

/// A readable, rewindable byte stream.
pub trait ByteStream: Read + Seek {}

impl<T: Read + Seek> ByteStream for T {}

/// Content handed to the engine by a source provider.
pub enum Source<'a> {
    /// Immutable in-memory text.
    Text(&'a [u8]),
    /// Stream borrowed for the duration of the call; consumed from its start.
    Stream(&'a mut dyn ByteStream),
}

impl<'a> Source<'a> {
    pub fn text(text: &'a str) -> Self {
        Self::Text(text.as_bytes())
    }
}

impl std::fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(bytes) => f.debug_tuple("Text").field(&bytes.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

fn count_table(source: Source<'_>, policy: &ClassificationPolicy) -> DomainResult<FrequencyTable<OccurrenceCount>> {
    match source {
        Source::Text(bytes) => Ok(FrequencyTable::from_bytes(bytes, policy)),
        Source::Stream(stream) => FrequencyTable::from_stream(stream, policy),
    }
}

/// Counts accepted characters of `source`.
///
/// # Errors
///
/// Fails only when a stream source cannot be rewound or read.
pub fn analyze_counts(
    source: Source<'_>,
    policy: &ClassificationPolicy,
) -> DomainResult<ResultSequence<OccurrenceCount>> {
    let table = count_table(source, policy)?;
    log::debug!("counted {} distinct characters ({} total) as {}", table.len(), table.total(), policy.class().as_str());
    Ok(table.into())
}

/// Rank fractions of accepted characters of `source`.
///
/// # Errors
///
/// Fails only when a stream source cannot be rewound or read.
pub fn analyze_ranks(
    source: Source<'_>,
    policy: &ClassificationPolicy,
) -> DomainResult<ResultSequence<RankFraction>> {
    let table = count_table(source, policy)?;
    log::debug!("ranking {} distinct characters as {}", table.len(), policy.class().as_str());
    Ok(table.to_ranks().into())
}
