use std::path::PathBuf;

use crate::error::Result;
use crate::ioutils::{copy_file, create_dir_all, write_file};

/// A single filesystem change produced while rendering a template subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateOperation {
    Copy { source: PathBuf, target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
    CreateDirectory { target: PathBuf, target_exists: bool },
}

impl TemplateOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::Copy { target, .. }
            | TemplateOperation::Write { target, .. }
            | TemplateOperation::CreateDirectory { target, .. } => target,
        }
    }

    /// Applies the operation. Existing files are overwritten.
    pub fn perform(&self) -> Result<()> {
        match self {
            TemplateOperation::Copy { source, target, .. } => copy_file(source, target),
            TemplateOperation::Write { target, content, .. } => write_file(content, target),
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    Ok(())
                } else {
                    create_dir_all(target)
                }
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Copy { source, target, target_exists } => {
                let suffix = if *target_exists { " (overwriting existing file)" } else { "" };
                format!(
                    "{}Copying '{}' to '{}'{}",
                    prefix,
                    source.display(),
                    target.display(),
                    suffix
                )
            }
            TemplateOperation::Write { target, target_exists, .. } => {
                let suffix = if *target_exists { " (overwriting existing file)" } else { "" };
                format!("{}Writing to '{}'{}", prefix, target.display(), suffix)
            }
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }
        }
    }
}
