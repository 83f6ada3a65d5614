use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    ///
    /// # Errors
    /// Referencing a value that is missing from `context` fails with
    /// [`crate::error::Error::UnresolvedReference`].
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;
}
