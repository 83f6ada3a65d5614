use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Ensures the output directory does not exist yet, unless `force` is set.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copies `source_path` to `dest_path`, creating parent directories as needed.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}
