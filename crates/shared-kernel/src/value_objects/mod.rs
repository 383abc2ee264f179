// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod symbol;

pub use counts::{FrequencyValue, OccurrenceCount, RankFraction};
pub use symbol::Symbol;
