// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        // Temp file lives next to the target so the rename stays on one filesystem.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        let written = w.write_all(data).and_then(|()| w.flush());
        if let Err(err) = written {
            drop(w);
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();
        drop(w);

        fs::rename(&tmp, path)?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
