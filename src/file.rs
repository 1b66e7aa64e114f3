// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write one UTF-8 report file into `dir` (created if absent).
/// Returns the final path written to.
pub fn write_report(dir: &Path, filename: &str, text: &str) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(dir)?;
    let path = dir.join(filename);
    fs::write(&path, text)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}
