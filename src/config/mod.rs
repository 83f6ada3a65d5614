//! Deployment configuration
//!
//! This module contains the configuration model:
//! - `variables`: the typed free-form variable section
//! - `backend`: the Terraform backend tagged union
//! - `paths`: default locations for local Terraform state
//! - `loader`: loading and validating the whole file

pub mod backend;
pub mod loader;
pub mod paths;
pub mod variables;

#[cfg(test)]
mod tests;

pub use backend::{Backend, BackendType, LocalBackend, RemoteBackend};
pub use loader::{Ansible, Config, Terraform};
pub use paths::{calculate_tf_base_dir, tf_base_dir};
pub use variables::{decode_variables, Value, Variables};
