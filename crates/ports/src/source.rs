// crates/ports/src/source.rs
use std::{
    fmt,
    io::{Read, Seek},
    path::PathBuf,
};

use char_freq_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Where the caller wants content to come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SourceRequest {
    Path(PathBuf),
    Stdin,
    Text(String),
}

impl SourceRequest {
    /// Short name used in reports and log lines.
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Text(_) => "<text>".to_string(),
        }
    }
}

/// A readable, rewindable stream owned by whoever holds the [`OpenedSource`].
pub trait SourceStream: Read + Seek + Send {}

impl<T: Read + Seek + Send> SourceStream for T {}

/// Content resolved by a [`SourceProvider`], ready for counting.
pub enum OpenedSource {
    Memory { label: String, bytes: Vec<u8> },
    Stream { label: String, stream: Box<dyn SourceStream> },
}

impl OpenedSource {
    pub fn label(&self) -> &str {
        match self {
            Self::Memory { label, .. } | Self::Stream { label, .. } => label,
        }
    }
}

impl fmt::Debug for OpenedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory { label, bytes } => {
                f.debug_struct("Memory").field("label", label).field("len", &bytes.len()).finish()
            }
            Self::Stream { label, .. } => f.debug_struct("Stream").field("label", label).finish_non_exhaustive(),
        }
    }
}

/// Port resolving a [`SourceRequest`]; reports missing sources before any counting starts.
pub trait SourceProvider: Send + Sync {
    fn open(&self, request: &SourceRequest) -> Result<OpenedSource>;
}
