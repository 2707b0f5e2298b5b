//! Small filesystem helpers shared by the generators.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads a file into a string.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(Error::IoError)
}

/// Writes content to a file, creating parent directories as needed.
/// The full text is written in one pass.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(dest_path, content).map_err(Error::IoError)
}
