use super::signature::Classification;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Output-specific error types
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}

/// Writes recovered buffers under a fixed directory and file stem
///
/// Creates `<base_dir>/<stem>.png` for PNG data and `<base_dir>/<stem>_raw.bin`
/// for anything else. Existing files are overwritten.
pub struct OutputManager {
    base_dir: PathBuf,
    stem: String,
}

impl OutputManager {
    /// Create a new OutputManager with the specified base directory and file stem
    pub fn new(base_dir: PathBuf, stem: impl Into<String>) -> OutputResult<Self> {
        let stem = stem.into();
        if stem.trim().is_empty() || stem.contains('/') || stem.contains('\\') {
            return Err(OutputError::InvalidPath(format!(
                "output stem '{}' is not a bare file name",
                stem
            )));
        }
        Ok(Self { base_dir, stem })
    }

    /// Path the buffer would be written to for a given classification
    pub fn path_for(&self, classification: Classification) -> PathBuf {
        let filename = match classification {
            Classification::Png => format!("{}.png", self.stem),
            Classification::Unknown => format!("{}_raw.bin", self.stem),
        };
        self.base_dir.join(filename)
    }

    /// Write the bytes verbatim to the path selected by `classification`
    pub fn persist(&self, data: &[u8], classification: Classification) -> OutputResult<PathBuf> {
        self.ensure_directory_exists(&self.base_dir)?;

        let filepath = self.path_for(classification);
        // File is closed when it goes out of scope, including on the error path
        let mut file = File::create(&filepath)?;
        file.write_all(data)?;
        file.flush()?;

        debug!("Wrote {} bytes to {}", data.len(), filepath.display());
        Ok(filepath)
    }

    fn ensure_directory_exists(&self, dir: &Path) -> OutputResult<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        } else if !dir.is_dir() {
            return Err(OutputError::InvalidPath(format!(
                "{} exists and is not a directory",
                dir.display()
            )));
        }
        Ok(())
    }
}
