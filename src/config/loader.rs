//! Configuration loading and validation

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::config::backend::{Backend, RawBackend};
use crate::config::paths::calculate_tf_base_dir;
use crate::config::variables::{decode_variables, Variables};
use crate::error::{Error, Result};

/// Terraform settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Terraform {
    pub backend: Backend,
}

/// Ansible settings, passed through to templates as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ansible {
    #[serde(default)]
    pub inventory_file: String,
    #[serde(default)]
    pub playbook_file: String,
}

/// A validated configuration with backend defaults filled in.
///
/// `ansible` and `variables` are `None` when the section is absent from the
/// file; consumers treat that as the feature being unused.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub terraform: Terraform,
    pub ansible: Option<Ansible>,
    pub variables: Option<Variables>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    terraform: Option<RawTerraform>,
    #[serde(default)]
    ansible: Option<Ansible>,
    #[serde(default)]
    variables: Option<serde_yaml::Value>,
}

#[derive(Debug, Deserialize)]
struct RawTerraform {
    #[serde(default)]
    backend: Option<RawBackend>,
}

impl Config {
    /// Reads, validates and defaults the configuration at `path`.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Same as [`Config::load_config`] for an in-memory document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let backend = raw
            .terraform
            .ok_or(Error::MissingField("terraform"))?
            .backend
            .ok_or(Error::MissingField("terraform.backend"))?;

        let mut config = Config {
            terraform: Terraform { backend: Backend::from_raw(backend)? },
            ansible: raw.ansible,
            variables: raw.variables.as_ref().map(decode_variables),
        };
        config.resolve_backend_defaults()?;
        Ok(config)
    }

    /// Fills unset local backend paths below [`calculate_tf_base_dir`].
    ///
    /// The working directory is only consulted when something is missing, so
    /// calling this on a fully populated config never fails.
    pub fn resolve_backend_defaults(&mut self) -> Result<()> {
        if let Backend::Local(local) = &mut self.terraform.backend {
            if local.needs_defaults() {
                local.fill_defaults(calculate_tf_base_dir()?);
            }
        }
        Ok(())
    }
}
