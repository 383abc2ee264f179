// crates/infra/src/source.rs
use std::io::{self, BufReader};

use char_freq_ports::source::{OpenedSource, SourceProvider, SourceRequest};
use char_freq_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, file_reader::display_name};

/// Resolves requests against the local filesystem and the process stdin.
#[derive(Debug, Clone)]
pub struct FsSourceProvider {
    parent_fallback: bool,
}

impl FsSourceProvider {
    pub fn new() -> Self {
        Self { parent_fallback: true }
    }

    /// Toggles the retry from `../` when a relative path is not found.
    #[must_use]
    pub fn with_parent_fallback(mut self, enabled: bool) -> Self {
        self.parent_fallback = enabled;
        self
    }

    fn open_path(&self, path: &std::path::Path, label: String) -> Result<OpenedSource> {
        let opened = if self.parent_fallback {
            FileReader::open_with_parent_fallback(path)
        } else {
            FileReader::open(path).map(|file| (path.to_path_buf(), file))
        };

        let (opened_path, file) = opened.map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InfrastructureError::SourceNotFound { path: path.to_path_buf() },
            _ => InfrastructureError::FileRead { path: path.to_path_buf(), source },
        })?;

        let metadata = file
            .metadata()
            .map_err(|source| InfrastructureError::FileRead { path: opened_path.clone(), source })?;
        if metadata.is_dir() {
            return Err(InfrastructureError::FileRead {
                path: opened_path,
                source: io::Error::other("is a directory"),
            }
            .into());
        }

        if opened_path != path {
            log::info!("'{}' not found, using '{}'", path.display(), opened_path.display());
        }
        log::debug!("opened '{}' ({} bytes)", display_name(&opened_path), metadata.len());

        Ok(OpenedSource::Stream { label, stream: Box::new(BufReader::new(file)) })
    }
}

impl Default for FsSourceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for FsSourceProvider {
    fn open(&self, request: &SourceRequest) -> Result<OpenedSource> {
        let label = request.label();
        match request {
            SourceRequest::Path(path) => self.open_path(path, label),
            SourceRequest::Stdin => {
                // Stdin cannot be rewound, so it is buffered up front.
                let bytes = FileReader::read_all(io::stdin().lock())
                    .map_err(|source| InfrastructureError::FileRead { path: label.clone().into(), source })?;
                Ok(OpenedSource::Memory { label, bytes })
            }
            SourceRequest::Text(text) => Ok(OpenedSource::Memory { label, bytes: text.clone().into_bytes() }),
        }
    }
}
