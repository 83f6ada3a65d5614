use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::constants::{DEFAULT_ANSIBLE_DIR, DEFAULT_TEMPLATE_SUFFIX, DEFAULT_TERRAFORM_DIR};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::TemplateRenderer;

use super::context::build_context;
use super::operation::TemplateOperation;

/// Renders the template subtrees of `base_dir` into `output_dir`.
///
/// Each subtree (`terraform/`, `ansible/`) is mirrored below the output
/// directory under the same name. Files ending in `.j2` are rendered and
/// lose the suffix; other files are copied unchanged.
///
/// A subtree is rendered completely in memory before anything is written, so
/// template errors never leave a half-written output directory behind. IO
/// errors while writing still can.
pub struct TemplateProcessor<'a> {
    engine: &'a dyn TemplateRenderer,
    base_dir: PathBuf,
    output_dir: PathBuf,
    dry_run: bool,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        base_dir: P,
        output_dir: Q,
    ) -> Self {
        Self {
            engine,
            base_dir: base_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            dry_run: false,
        }
    }

    /// Plans and logs operations without touching the filesystem.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether `base_dir` contains the given template subtree.
    pub fn has_template_dir(&self, subdir: &str) -> bool {
        self.base_dir.join(subdir).is_dir()
    }

    /// Renders `<base_dir>/terraform` into `<output_dir>/terraform`.
    pub fn process_terraform_template(&self, config: &Config) -> Result<Vec<TemplateOperation>> {
        self.process_subtree(DEFAULT_TERRAFORM_DIR, config)
    }

    /// Renders `<base_dir>/ansible` into `<output_dir>/ansible`.
    pub fn process_ansible_template(&self, config: &Config) -> Result<Vec<TemplateOperation>> {
        self.process_subtree(DEFAULT_ANSIBLE_DIR, config)
    }

    fn process_subtree(&self, subdir: &str, config: &Config) -> Result<Vec<TemplateOperation>> {
        let source_root = self.base_dir.join(subdir);
        if !source_root.is_dir() {
            return Err(Error::TemplateNotFound {
                template_dir: source_root.display().to_string(),
            });
        }
        let target_root = self.output_dir.join(subdir);
        let context = build_context(config)?;

        let operations = self.plan(&source_root, &target_root, &context)?;
        for operation in &operations {
            if !self.dry_run {
                operation.perform()?;
            }
            info!("{}", operation.get_message(self.dry_run));
        }
        Ok(operations)
    }

    /// Walks `source_root` in file name order and turns every entry into an
    /// operation targeting `target_root`.
    fn plan(
        &self,
        source_root: &Path,
        target_root: &Path,
        context: &serde_json::Value,
    ) -> Result<Vec<TemplateOperation>> {
        let mut operations = Vec::new();
        for dir_entry in WalkDir::new(source_root).follow_links(true).sort_by_file_name() {
            let dir_entry = dir_entry?;
            let operation = self.plan_entry(source_root, target_root, dir_entry.path(), context)?;
            debug!("Planned operation: {operation:?}");
            operations.push(operation);
        }
        Ok(operations)
    }

    fn plan_entry(
        &self,
        source_root: &Path,
        target_root: &Path,
        entry: &Path,
        context: &serde_json::Value,
    ) -> Result<TemplateOperation> {
        let relative = entry.strip_prefix(source_root).map_err(|e| Error::ProcessError {
            source_path: entry.display().to_string(),
            e: e.to_string(),
        })?;
        let target = if relative.as_os_str().is_empty() {
            target_root.to_path_buf()
        } else {
            target_root.join(relative)
        };

        if !entry.is_file() {
            let target_exists = target.exists();
            return Ok(TemplateOperation::CreateDirectory { target, target_exists });
        }

        match target.strip_file_suffix(DEFAULT_TEMPLATE_SUFFIX) {
            Some(target) => {
                let template_name = self.template_name(entry)?;
                let template = fs::read_to_string(entry)?;
                let content = self.engine.render(&template, context, Some(&template_name))?;
                let target_exists = target.exists();
                Ok(TemplateOperation::Write { target, content, target_exists })
            }
            None => {
                let target_exists = target.exists();
                Ok(TemplateOperation::Copy { source: entry.to_path_buf(), target, target_exists })
            }
        }
    }

    /// Template name relative to `base_dir`, with `/` separators.
    fn template_name(&self, entry: &Path) -> Result<String> {
        let relative = entry.strip_prefix(&self.base_dir).unwrap_or(entry);
        Ok(relative.to_str_checked()?.replace('\\', "/"))
    }
}
