//! Render context built from a validated [`Config`].

use serde_json::json;

use crate::config::variables::variables_to_json;
use crate::config::{Backend, Config};
use crate::error::Result;
use crate::ext::PathExt;

/// Builds the context handed to every template.
///
/// ```text
/// backend:   { type, local: { path, workspace } } | { type, remote: {...} }
/// ansible:   { inventory_file, playbook_file }     (only when configured)
/// variables: {...}                                 (empty when not configured)
/// ```
pub fn build_context(config: &Config) -> Result<serde_json::Value> {
    let backend = &config.terraform.backend;
    let mut backend_json = json!({ "type": backend.kind().as_str() });
    match backend {
        Backend::Local(local) => {
            backend_json["local"] = json!({
                "path": local.path.to_str_checked()?,
                "workspace": local.workspace.to_str_checked()?,
            });
        }
        Backend::Remote(remote) => {
            backend_json["remote"] = variables_to_json(&remote.settings);
        }
    }

    let mut context = json!({
        "backend": backend_json,
        "variables": config.variables.as_ref().map(variables_to_json).unwrap_or_else(|| json!({})),
    });
    if let Some(ansible) = &config.ansible {
        context["ansible"] = json!({
            "inventory_file": ansible.inventory_file,
            "playbook_file": ansible.playbook_file,
        });
    }
    Ok(context)
}
