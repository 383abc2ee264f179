// domain analytics sorting utilities
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    options::SortKey,
    value_objects::{FrequencyValue, Symbol},
};

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// ソート仕様を表す値オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub const fn key(&self) -> SortKey {
        self.key
    }

    pub const fn order(&self) -> SortOrder {
        self.order
    }
}

/// ソート戦略パターン実装
///
/// Specs are compared in order; the first non-equal key decides. The sort is
/// stable, so rows that tie on every key keep their previous relative order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    /// 新しいソート戦略を作成
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    /// 並べ替えを行わない戦略
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    /// ソート仕様が空かどうか
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[SortSpec] {
        &self.specs
    }

    /// 行をソート（インプレース）
    pub fn apply<V: FrequencyValue>(&self, rows: &mut [(Symbol, V)]) {
        if rows.is_empty() || self.specs.is_empty() {
            return;
        }
        rows.sort_by(|a, b| self.compare(a, b));
    }

    fn compare<V: FrequencyValue>(&self, a: &(Symbol, V), b: &(Symbol, V)) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    }
}

impl SortKey {
    #[inline]
    pub fn compare<V: FrequencyValue>(self, a: &(Symbol, V), b: &(Symbol, V)) -> Ordering {
        match self {
            Self::Char => a.0.cmp(&b.0),
            Self::Value => a.1.compare(&b.1),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
