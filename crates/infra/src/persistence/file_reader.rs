use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Open `path`, retrying once from the parent directory for relative paths.
    ///
    /// Returns the path that was actually opened.
    pub fn open_with_parent_fallback(path: &Path) -> io::Result<(PathBuf, File)> {
        match Self::open(path) {
            Ok(file) => Ok((path.to_path_buf(), file)),
            Err(err) if err.kind() == io::ErrorKind::NotFound && path.is_relative() => {
                let parent = Path::new("..").join(path);
                Self::open(&parent).map(|file| (parent, file)).map_err(|_| err)
            }
            Err(err) => Err(err),
        }
    }

    /// Read everything `reader` yields into memory.
    pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Strips leading directories for display, keeping only the file name.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
