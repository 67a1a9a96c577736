use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportFileError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically write the report to `path` by writing a temp file in the same
/// directory and renaming it over the target.
pub fn write_report(path: &Path, content: &str) -> Result<PathBuf, ReportFileError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_output_dir(&dir)?;

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace existing report if present to keep determinism.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| ReportFileError::Io(e.error))?;
    Ok(path.to_path_buf())
}

/// Ensure output directory exists; create if missing.
fn ensure_output_dir(dir: &Path) -> Result<(), ReportFileError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ReportFileError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ReportFileError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ReportFileError::OutputDir(e.to_string()))?;
    }
    Ok(())
}
