// crates/domain/src/model/result_sequence.rs
use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::{
    analytics::SortStrategy,
    model::FrequencyTable,
    options::SortMethod,
    value_objects::{FrequencyValue, Symbol},
};

/// Ordered snapshot of a table's entries.
///
/// Order right after materialization is unspecified; it only carries meaning
/// after [`ResultSequence::sort`] or [`ResultSequence::sort_with`]. Sorting
/// reorders rows, it never changes them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSequence<V> {
    rows: Vec<(Symbol, V)>,
}

impl<V: FrequencyValue> ResultSequence<V> {
    pub fn rows(&self) -> &[(Symbol, V)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Symbol, V)> {
        self.rows.iter()
    }

    pub fn total(&self) -> V {
        self.rows.iter().map(|(_, v)| *v).sum()
    }

    /// Sorts in place by a single key and direction.
    pub fn sort(&mut self, method: SortMethod) {
        if let Some(spec) = method.spec() {
            SortStrategy::new(vec![spec]).apply(&mut self.rows);
        }
    }

    /// Sorts in place by every spec of `strategy`, first spec first.
    pub fn sort_with(&mut self, strategy: &SortStrategy) {
        strategy.apply(&mut self.rows);
    }

    /// Keeps the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        self.rows.truncate(n);
    }
}

impl<V: FrequencyValue> From<FrequencyTable<V>> for ResultSequence<V> {
    fn from(table: FrequencyTable<V>) -> Self {
        Self { rows: table.iter().collect() }
    }
}

impl<V: FrequencyValue> From<&FrequencyTable<V>> for ResultSequence<V> {
    fn from(table: &FrequencyTable<V>) -> Self {
        Self { rows: table.iter().collect() }
    }
}

impl<'a, V: FrequencyValue> IntoIterator for &'a ResultSequence<V> {
    type Item = &'a (Symbol, V);
    type IntoIter = std::slice::Iter<'a, (Symbol, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Serialized as `[{"char": "A", "code": 65, "value": 2}, ...]`.
impl<V: FrequencyValue> Serialize for ResultSequence<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Row<V> {
            char: Symbol,
            code: u8,
            value: V,
        }

        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for &(symbol, value) in &self.rows {
            seq.serialize_element(&Row { char: symbol, code: symbol.byte(), value })?;
        }
        seq.end()
    }
}
