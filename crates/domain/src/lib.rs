//! # Domain
//!
//! Character frequency engine: classification policy, frequency tables,
//! rank normalization and result ordering.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod analytics;
pub mod classification;
pub mod model;
pub mod options;
pub mod value_objects;

pub use analysis::{ByteStream, Source, analyze_counts, analyze_ranks};
pub use analytics::{RankNormalizer, SortOrder, SortSpec, SortStrategy};
pub use classification::{ByteScreen, CharClass, ClassificationPolicy};
pub use model::{FrequencyTable, ResultSequence};
pub use options::{SortKey, SortMethod};
