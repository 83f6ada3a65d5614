use super::filters::*;
use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined values are errors and nothing besides the given context is
/// visible to templates, so output depends only on template and context.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        env.add_filter("hcl", hcl_filter);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("kebab_case", to_kebab_case);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template_owned(name.to_string(), template.to_string())?;

        let tmpl = env.get_template(name)?;
        tmpl.render(context).map_err(|e| match e.kind() {
            ErrorKind::UndefinedError => Error::UnresolvedReference {
                template: name.to_string(),
                reason: e.to_string(),
            },
            _ => Error::MinijinjaError(e),
        })
    }
}
