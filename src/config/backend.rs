//! Terraform backend model.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::variables::{decode_variables, scalar_to_string, Variables};
use crate::constants::backend::{LOCAL, REMOTE};
use crate::error::{Error, Result};

/// Recognised backend type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Local,
    Remote,
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendType::Local => LOCAL,
            BackendType::Remote => REMOTE,
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            LOCAL => Ok(BackendType::Local),
            REMOTE => Ok(BackendType::Remote),
            other => Err(Error::InvalidBackendType(other.to_string())),
        }
    }
}

/// State file and workspace directory of a `local` backend.
///
/// An empty path means "not set"; see [`LocalBackend::fill_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalBackend {
    pub path: PathBuf,
    pub workspace: PathBuf,
}

/// Connection settings of a `remote` backend, passed through to templates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteBackend {
    pub settings: Variables,
}

/// Where Terraform keeps its state.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Local(LocalBackend),
    Remote(RemoteBackend),
}

impl Backend {
    pub fn kind(&self) -> BackendType {
        match self {
            Backend::Local(_) => BackendType::Local,
            Backend::Remote(_) => BackendType::Remote,
        }
    }

    pub fn local(&self) -> Option<&LocalBackend> {
        match self {
            Backend::Local(local) => Some(local),
            Backend::Remote(_) => None,
        }
    }

    pub fn remote(&self) -> Option<&RemoteBackend> {
        match self {
            Backend::Remote(remote) => Some(remote),
            Backend::Local(_) => None,
        }
    }
}

/// `terraform.backend` as it appears in the config file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawBackend {
    #[serde(default, rename = "type")]
    pub r#type: Option<serde_yaml::Value>,
    #[serde(default)]
    pub local: Option<RawLocalBackend>,
    #[serde(default)]
    pub remote: Option<serde_yaml::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawLocalBackend {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub workspace: Option<String>,
}

impl Backend {
    /// Validates the type tag and keeps only the payload matching it.
    pub(crate) fn from_raw(raw: RawBackend) -> Result<Self> {
        let tag = raw
            .r#type
            .filter(|tag| !tag.is_null())
            .ok_or(Error::MissingField("terraform.backend.type"))?;
        match scalar_to_string(&tag).parse::<BackendType>()? {
            BackendType::Local => {
                let local = raw.local.unwrap_or_default();
                Ok(Backend::Local(LocalBackend {
                    path: local.path.map(PathBuf::from).unwrap_or_default(),
                    workspace: local.workspace.map(PathBuf::from).unwrap_or_default(),
                }))
            }
            BackendType::Remote => {
                let settings =
                    raw.remote.as_ref().map(decode_variables).unwrap_or_default();
                Ok(Backend::Remote(RemoteBackend { settings }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::variables::Value;

    fn backend(yaml: &str) -> Result<Backend> {
        let raw: RawBackend = serde_yaml::from_str(yaml).unwrap();
        Backend::from_raw(raw)
    }

    #[test]
    fn parses_backend_type() {
        assert_eq!("local".parse::<BackendType>().unwrap(), BackendType::Local);
        assert_eq!("remote".parse::<BackendType>().unwrap(), BackendType::Remote);
        assert_eq!(BackendType::Remote.to_string(), "remote");
    }

    #[test]
    fn rejects_unknown_type_with_verbatim_message() {
        let err = backend("type: foo").unwrap_err();
        assert_eq!(err.to_string(), "invalid backend type: foo");
    }

    #[test]
    fn type_tag_is_case_sensitive() {
        let err = backend("type: Local").unwrap_err();
        assert_eq!(err.to_string(), "invalid backend type: Local");
    }

    #[test]
    fn missing_type_is_a_missing_field() {
        let err = backend("local:\n  path: state.tfstate").unwrap_err();
        assert!(matches!(err, Error::MissingField("terraform.backend.type")));
    }

    #[test]
    fn empty_type_is_a_missing_field() {
        let err = backend("type:
local:
  path: state.tfstate").unwrap_err();
        assert!(matches!(err, Error::MissingField("terraform.backend.type")));
    }

    #[test]
    fn local_ignores_remote_payload() {
        let backend = backend(
            r#"
type: local
local:
  path: /tmp/state.tfstate
remote:
  organization: acme
"#,
        )
        .unwrap();
        assert_eq!(backend.kind(), BackendType::Local);
        assert!(backend.remote().is_none());
        let local = backend.local().unwrap();
        assert_eq!(local.path, PathBuf::from("/tmp/state.tfstate"));
        assert_eq!(local.workspace, PathBuf::new());
    }

    #[test]
    fn remote_decodes_settings() {
        let backend = backend(
            r#"
type: remote
local:
  path: ignored
remote:
  hostname: app.terraform.io
  organization: acme
  workspaces:
    name: prod
"#,
        )
        .unwrap();
        assert!(backend.local().is_none());
        let settings = &backend.remote().unwrap().settings;
        assert_eq!(settings["hostname"], Value::String("app.terraform.io".into()));
        let workspaces = settings["workspaces"].as_map().unwrap();
        assert_eq!(workspaces["name"], Value::String("prod".into()));
    }

    #[test]
    fn remote_without_payload_has_no_settings() {
        let backend = backend("type: remote").unwrap();
        assert!(backend.remote().unwrap().settings.is_empty());
    }
}
