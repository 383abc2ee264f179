//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port adapters:
//!
//! - [`orchestrator`]: resolving a source and running count/rank analysis
//! - [`dto`]: reports handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{AnalysisReport, CountReport, RankReport};
pub use orchestrator::{AnalyzeSource, GenerateSample};
