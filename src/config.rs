// src/config.rs
use std::path::PathBuf;

use char_freq_domain::{ClassificationPolicy, SortStrategy};
use char_freq_ports::source::SourceRequest;
use serde::{Deserialize, Serialize};

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Md,
    Jsonl,
}

/// Which value each row carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Count,
    Rank,
}

impl AnalysisMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Rank => "rank",
        }
    }
}

/// Request to write a random sample file before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub path: PathBuf,
    pub len: usize,
    pub seed: Option<u64>,
}

/// Fully resolved run configuration, built once from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<SourceRequest>,
    pub sample: Option<SampleRequest>,
    pub mode: AnalysisMode,
    pub policy: ClassificationPolicy,
    pub sort: SortStrategy,
    pub top: Option<usize>,
    pub format: OutputFormat,
    pub parent_fallback: bool,
}
