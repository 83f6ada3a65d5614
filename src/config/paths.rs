//! Default locations for local Terraform state.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::backend::LocalBackend;
use crate::constants::{
    DEFAULT_TF_STATE_FILE_NAME, DEFAULT_TF_WORKSPACE_DIR_NAME, DEFAULT_WORK_DIR_NAME,
};
use crate::error::{Error, Result};

/// Base directory for local state under `work_dir`.
pub fn tf_base_dir<P: AsRef<Path>>(work_dir: P) -> PathBuf {
    work_dir.as_ref().join(DEFAULT_WORK_DIR_NAME)
}

/// Base directory for local state under the current working directory.
pub fn calculate_tf_base_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(Error::PathResolution)?;
    Ok(tf_base_dir(cwd))
}

impl LocalBackend {
    pub fn needs_defaults(&self) -> bool {
        self.path.as_os_str().is_empty() || self.workspace.as_os_str().is_empty()
    }

    /// Fills unset fields from `base_dir`. Fields already set are kept.
    pub fn fill_defaults<P: AsRef<Path>>(&mut self, base_dir: P) {
        let base_dir = base_dir.as_ref();
        if self.path.as_os_str().is_empty() {
            self.path = base_dir.join(DEFAULT_TF_STATE_FILE_NAME);
            debug!("Defaulting local backend state file to {}", self.path.display());
        }
        if self.workspace.as_os_str().is_empty() {
            self.workspace = base_dir.join(DEFAULT_TF_WORKSPACE_DIR_NAME);
            debug!("Defaulting local backend workspace to {}", self.workspace.display());
        }
    }
}
