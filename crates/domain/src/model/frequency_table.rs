// crates/domain/src/model/frequency_table.rs
use std::io::{ErrorKind, Read, Seek, SeekFrom};

use char_freq_shared_kernel::{DomainError, DomainResult};
use hashbrown::HashMap;
use num_traits::Zero;

use crate::{
    classification::ClassificationPolicy,
    value_objects::{FrequencyValue, OccurrenceCount, Symbol},
};

/// Unique-keyed mapping from a canonical character to its value.
///
/// Iteration order is unspecified. Tables are built once and never mutated
/// afterwards; derived tables (see [`crate::RankNormalizer`]) are new values.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<V> {
    entries: HashMap<Symbol, V>,
}

impl<V: FrequencyValue> FrequencyTable<V> {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub(crate) fn from_entries(entries: HashMap<Symbol, V>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<V> {
        self.entries.get(&symbol).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, V)> + '_ {
        self.entries.iter().map(|(symbol, value)| (*symbol, *value))
    }

    /// Sum of every value in the table.
    pub fn total(&self) -> V {
        self.entries.values().copied().sum()
    }
}

impl<V: FrequencyValue> Default for FrequencyTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable<OccurrenceCount> {
    /// Counts every byte of an in-memory source.
    pub fn from_bytes(bytes: &[u8], policy: &ClassificationPolicy) -> Self {
        let mut counter = Counter::new(*policy);
        counter.feed(bytes);
        counter.finish()
    }

    /// Counts a byte stream from its first byte.
    ///
    /// The stream is rewound before reading and drained to the end. Passing
    /// the stream by value drops (and so closes) it on every return path;
    /// pass `&mut stream` to keep ownership.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::SourceUnreadable`] if the stream cannot be
    /// rewound or a read fails. A partial table is never returned.
    pub fn from_stream<R: Read + Seek>(mut stream: R, policy: &ClassificationPolicy) -> DomainResult<Self> {
        stream.seek(SeekFrom::Start(0)).map_err(|source| DomainError::SourceUnreadable {
            reason: "cannot rewind to the start of the stream".to_string(),
            source,
        })?;

        let mut counter = Counter::new(*policy);
        let mut buf = [0u8; 8 * 1024];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => counter.feed(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(DomainError::SourceUnreadable {
                        reason: "read failed before end of stream".to_string(),
                        source,
                    });
                }
            }
        }
        Ok(counter.finish())
    }
}

/// Accumulates counts while a source is being consumed.
struct Counter {
    policy: ClassificationPolicy,
    entries: HashMap<Symbol, OccurrenceCount>,
}

impl Counter {
    fn new(policy: ClassificationPolicy) -> Self {
        Self { policy, entries: HashMap::new() }
    }

    fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if let Some(symbol) = self.policy.canonical(byte) {
                self.entries.entry(symbol).or_insert_with(OccurrenceCount::zero).increment();
            }
        }
    }

    fn finish(self) -> FrequencyTable<OccurrenceCount> {
        FrequencyTable::from_entries(self.entries)
    }
}
