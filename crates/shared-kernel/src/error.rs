// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CharFreqError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CharFreqError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, CharFreqError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The stream handed to the counter could not be rewound or read.
    #[error("Source is not readable: {reason}")]
    SourceUnreadable {
        reason: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid sort specification: {spec}")]
    InvalidSortSpec { spec: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to analyze '{label}': {reason}")]
    AnalysisFailed {
        label: String,
        reason: String,
        #[source]
        source: Option<Box<CharFreqError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("File does not exist: '{path}'")]
    SourceNotFound { path: PathBuf },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CharFreqError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CharFreqError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CharFreqError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
