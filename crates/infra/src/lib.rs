// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod sample;
pub mod source;

pub use sample::RandomSampleWriter;
pub use source::FsSourceProvider;
