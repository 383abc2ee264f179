pub mod frequency_table;
pub mod result_sequence;

pub use frequency_table::FrequencyTable;
pub use result_sequence::ResultSequence;
