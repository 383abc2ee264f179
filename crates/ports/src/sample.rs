// crates/ports/src/sample.rs
use std::path::{Path, PathBuf};

use char_freq_shared_kernel::Result;

/// Port for producing sample input files.
pub trait SampleSink: Send + Sync {
    /// Writes `len` bytes to `path` and returns the path actually written.
    fn write_sample(&self, path: &Path, len: usize) -> Result<PathBuf>;
}
