pub mod rank;
pub mod sort;

pub use rank::RankNormalizer;
pub use sort::{SortOrder, SortSpec, SortStrategy};
