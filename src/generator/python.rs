//! Translation of a single tool definition into Python function parts

use crate::{
    constants::generation::{
        ARGS_HEADING, FALLBACK_DESCRIPTION, PLACEHOLDER_HELPER, REQUESTS_ALIAS,
        STATIC_RESULT_PREFIX,
    },
    model::{HandlerType, InputSchema, ToolSpec, UrlTemplate},
    renderer::filters::{py_docstring_text, py_string},
};
use serde::Serialize;

/// Everything the server template needs to emit one tool function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedTool {
    /// Tool name as given; the template derives the identifier from it.
    pub name: String,
    /// Comma-separated parameter list.
    pub params: String,
    /// Complete docstring including the surrounding triple quotes.
    pub docstring: String,
    /// Body statements, without indentation.
    pub body: Vec<String>,
}

impl RenderedTool {
    pub fn from_tool(tool: &ToolSpec) -> Self {
        let Parameters { params, docs } = Parameters::from_schema(&tool.input_schema);
        Self {
            name: tool.name.clone(),
            params: params.join(", "),
            docstring: docstring(tool.description.as_deref(), &docs),
            body: body(tool),
        }
    }

    /// Whether the body calls out over HTTP.
    pub fn is_api_call(tool: &ToolSpec) -> bool {
        tool.handler_type == HandlerType::Api && tool.endpoint().is_some()
    }
}

/// Typed parameters and their documentation lines, in schema order.
#[derive(Debug, Default, PartialEq)]
struct Parameters {
    params: Vec<String>,
    docs: Vec<String>,
}

impl Parameters {
    fn from_schema(schema: &InputSchema) -> Self {
        let mut parameters = Parameters::default();
        for (name, property) in &schema.properties {
            let param_type = property.param_type();
            let param = if schema.is_required(name) {
                format!("{name}: {}", param_type.annotation())
            } else {
                format!(
                    "{name}: {} = {}",
                    param_type.annotation(),
                    param_type.default_literal()
                )
            };
            parameters.params.push(param);

            if let Some(description) =
                property.description.as_deref().filter(|d| !d.is_empty())
            {
                parameters
                    .docs
                    .push(format!("        {name}: {}", py_docstring_text(description)));
            }
        }
        parameters
    }
}

fn docstring(description: Option<&str>, docs: &[String]) -> String {
    let description = description.filter(|d| !d.is_empty()).unwrap_or(FALLBACK_DESCRIPTION);
    let mut text = format!("\"\"\"{}", py_docstring_text(description));
    if !docs.is_empty() {
        text.push_str("\n\n    ");
        text.push_str(ARGS_HEADING);
        text.push('\n');
        text.push_str(&docs.join("\n"));
    }
    text.push_str("\"\"\"");
    text
}

fn body(tool: &ToolSpec) -> Vec<String> {
    match (tool.handler_type, tool.endpoint()) {
        (HandlerType::Api, Some(endpoint)) => api_body(endpoint, &tool.input_schema),
        (HandlerType::Api, None) | (HandlerType::Static, _) => static_body(&tool.name),
    }
}

fn static_body(name: &str) -> Vec<String> {
    vec![format!("return {}", py_string(&format!("{STATIC_RESULT_PREFIX} {name}")))]
}

fn api_body(endpoint: &str, schema: &InputSchema) -> Vec<String> {
    let template = UrlTemplate::parse(endpoint);
    let values = template
        .bound(schema.properties.keys())
        .into_iter()
        .map(|name| format!("{}: {name}", py_string(name)))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!(
            "url = {PLACEHOLDER_HELPER}({}, {{{values}}})",
            py_string(template.as_str())
        ),
        format!("response = {REQUESTS_ALIAS}.get(url)"),
        "return response.text".to_string(),
    ]
}
