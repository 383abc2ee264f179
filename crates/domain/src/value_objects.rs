//! Value objects re-exported from the shared kernel.

pub use char_freq_shared_kernel::value_objects::{FrequencyValue, OccurrenceCount, RankFraction, Symbol};
