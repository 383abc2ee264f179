// crates/domain/src/options.rs
use std::str::FromStr;

use char_freq_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

use crate::analytics::{SortOrder, SortSpec, SortStrategy};

/// Sorting keys available for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Byte value of the canonical character.
    Char,
    /// Count or rank.
    Value,
}

/// Single-key orderings offered to callers that do not need a multi-key strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    /// Leaves materialization order untouched, which is unspecified.
    None,
    #[default]
    CharAscending,
    CharDescending,
    ValueAscending,
    ValueDescending,
}

impl SortMethod {
    pub const fn spec(self) -> Option<SortSpec> {
        match self {
            Self::None => None,
            Self::CharAscending => Some(SortSpec::new(SortKey::Char, SortOrder::Ascending)),
            Self::CharDescending => Some(SortSpec::new(SortKey::Char, SortOrder::Descending)),
            Self::ValueAscending => Some(SortSpec::new(SortKey::Value, SortOrder::Ascending)),
            Self::ValueDescending => Some(SortSpec::new(SortKey::Value, SortOrder::Descending)),
        }
    }
}

impl From<SortMethod> for SortStrategy {
    fn from(method: SortMethod) -> Self {
        Self::new(method.spec().into_iter().collect())
    }
}

/// Sort specification. Example: `value:desc,char`; `none` keeps materialization order.
impl FromStr for SortStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Self::none());
        }

        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        if specs.is_empty() {
            return Err(DomainError::InvalidSortSpec { spec: format!("empty sort spec: '{s}'") });
        }
        Ok(Self::new(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<SortSpec, DomainError> {
    let (key_str, order) = match part.split_once(':') {
        Some((k, d)) => (k.trim(), parse_order(d.trim())?),
        None => (part, SortOrder::Ascending),
    };

    let key = parse_sort_key(key_str)?;
    Ok(SortSpec::new(key, order))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, DomainError> {
    match key_str.to_ascii_lowercase().as_str() {
        "char" | "character" => Ok(SortKey::Char),
        "value" | "count" | "rank" => Ok(SortKey::Value),
        other => Err(DomainError::InvalidSortSpec { spec: format!("unknown sort key: {other}") }),
    }
}

fn parse_order(order_str: &str) -> Result<SortOrder, DomainError> {
    match order_str.to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortOrder::Ascending),
        "desc" | "descending" => Ok(SortOrder::Descending),
        other => Err(DomainError::InvalidSortSpec { spec: format!("unknown sort direction: {other}") }),
    }
}
