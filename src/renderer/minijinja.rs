use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment};

/// MiniJinja-based template rendering engine.
///
/// Configured for source code output: block tags swallow their own line,
/// the trailing newline of a template is kept and nothing is auto-escaped.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("py_string", py_string);
        env.add_filter("py_docstring_text", py_docstring_text);
        env.add_filter("identifier", identifier);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn add_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.env.add_template_owned(name.to_string(), template.to_string())?;
        Ok(())
    }

    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
