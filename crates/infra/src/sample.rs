// crates/infra/src/sample.rs
use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use char_freq_ports::sample::SampleSink;
use char_freq_shared_kernel::{InfrastructureError, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::persistence::FileWriter;

/// Default sample size: one million bytes.
pub const DEFAULT_SAMPLE_LEN: usize = 1000 * 1000;

/// Printable ASCII, `' '` through `'~'`.
pub const PRINTABLE_ASCII: RangeInclusive<u8> = b' '..=b'~';

/// Fills `len` bytes with uniformly distributed printable ASCII.
pub fn printable_bytes<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(PRINTABLE_ASCII)).collect()
}

/// Writes random printable ASCII sample files.
#[derive(Debug, Clone, Default)]
pub struct RandomSampleWriter {
    seed: Option<u64>,
}

impl RandomSampleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the generated content reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn generate(&self, len: usize) -> Vec<u8> {
        match self.seed {
            Some(seed) => printable_bytes(&mut StdRng::seed_from_u64(seed), len),
            None => printable_bytes(&mut rand::thread_rng(), len),
        }
    }
}

impl SampleSink for RandomSampleWriter {
    fn write_sample(&self, path: &Path, len: usize) -> Result<PathBuf> {
        let data = self.generate(len);
        FileWriter::atomic_write(path, &data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        log::info!("created sample '{}' ({len} bytes)", path.display());
        Ok(path.to_path_buf())
    }
}
