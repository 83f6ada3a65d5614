use crate::{
    cli::{RenderArgs, ValidateArgs},
    config::{Backend, Config},
    constants::DEFAULT_ANSIBLE_DIR,
    error::Result,
    ioutils::get_output_dir,
    renderer::MiniJinjaRenderer,
    template::TemplateProcessor,
};
use log::{debug, warn};

/// Loads the config and renders the template tree into the output directory.
pub fn run_render(args: &RenderArgs) -> Result<()> {
    let config = Config::load_config(&args.config)?;
    let output_dir = get_output_dir(&args.output, args.force)?;

    let engine = MiniJinjaRenderer::new();
    let processor =
        TemplateProcessor::new(&engine, &args.templates, &output_dir).dry_run(args.dry_run);

    processor.process_terraform_template(&config)?;

    if config.ansible.is_some() {
        if processor.has_template_dir(DEFAULT_ANSIBLE_DIR) {
            processor.process_ansible_template(&config)?;
        } else {
            warn!(
                "Config has an ansible section but '{}' has no {DEFAULT_ANSIBLE_DIR}/ templates, skipping",
                args.templates.display()
            );
        }
    } else {
        debug!("No ansible section in config, skipping ansible templates");
    }

    println!("Rendering completed successfully in {}.", output_dir.display());
    Ok(())
}

/// Loads the config and prints the resolved settings.
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let config = Config::load_config(&args.config)?;
    print!("{}", describe(&config));
    Ok(())
}

/// Human readable summary of a loaded config. Remote backend values are not
/// printed since they may hold credentials.
pub fn describe(config: &Config) -> String {
    let backend = &config.terraform.backend;
    let mut lines = vec![format!("backend: {}", backend.kind())];
    match backend {
        Backend::Local(local) => {
            lines.push(format!("  path: {}", local.path.display()));
            lines.push(format!("  workspace: {}", local.workspace.display()));
        }
        Backend::Remote(remote) => {
            lines.extend(remote.settings.keys().map(|key| format!("  {key}: <set>")));
        }
    }
    match &config.ansible {
        Some(ansible) => {
            lines.push("ansible:".to_string());
            lines.push(format!("  inventory_file: {}", ansible.inventory_file));
            lines.push(format!("  playbook_file: {}", ansible.playbook_file));
        }
        None => lines.push("ansible: not configured".to_string()),
    }
    match &config.variables {
        Some(variables) => {
            let names: Vec<&str> = variables.keys().map(String::as_str).collect();
            lines.push(format!("variables: {}", names.join(", ")));
        }
        None => lines.push("variables: not configured".to_string()),
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}
