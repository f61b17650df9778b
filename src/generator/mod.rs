//! MCP server scaffold generation
//!
//! Turns a [`ProjectSpec`] into three artifacts: the server source, a JSON
//! manifest and a README. Generation is deterministic and has no side
//! effects, so identical projects always produce byte-identical output.
//!
//! The module is structured as:
//! - `python`: parameter, docstring and body synthesis for a single tool
//! - this file: whole-document assembly, manifest and readme

pub mod python;

use crate::{
    constants::generation::{
        DEFAULT_SERVER_NAME, MANIFEST_VERSION, PLACEHOLDER_HELPER, README, REQUESTS_ALIAS,
        SERVER_INSTANCE,
    },
    error::Result,
    model::{ProjectSpec, ToolSpec},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use log::debug;
use python::RenderedTool;
use serde::Serialize;
use serde_json::json;

const SERVER_TEMPLATE_NAME: &str = "server.py";
const SERVER_TEMPLATE: &str = include_str!("templates/server.py.j2");

/// The three text artifacts of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProject {
    pub source: String,
    pub manifest: String,
    pub readme: String,
}

/// Wire shape of `mcp.json`. Field order is the serialized key order.
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    name: &'a str,
    version: &'static str,
    tools: &'a [ToolSpec],
}

/// Renders projects through a template engine holding the server template.
pub struct Generator {
    renderer: Box<dyn TemplateRenderer>,
}

impl Generator {
    pub fn new() -> Result<Self> {
        let mut renderer: Box<dyn TemplateRenderer> = Box::new(MiniJinjaRenderer::new());
        renderer.add_template(SERVER_TEMPLATE_NAME, SERVER_TEMPLATE)?;
        Ok(Self { renderer })
    }

    /// Produces source, manifest and readme for `project`.
    pub fn generate(&self, project: &ProjectSpec) -> Result<GeneratedProject> {
        debug!(
            "Generating project '{}' with {} tool(s)",
            project.name,
            project.tools.len()
        );
        Ok(GeneratedProject {
            source: self.render_source(project)?,
            manifest: render_manifest(project)?,
            readme: render_readme(),
        })
    }

    /// Renders the server source for `project`.
    pub fn render_source(&self, project: &ProjectSpec) -> Result<String> {
        let tools: Vec<RenderedTool> =
            project.tools.iter().map(RenderedTool::from_tool).collect();
        let context = json!({
            "server_name": server_name(project),
            "uses_requests": project.tools.iter().any(RenderedTool::is_api_call),
            "helper": PLACEHOLDER_HELPER,
            "requests": REQUESTS_ALIAS,
            "server": SERVER_INSTANCE,
            "tools": tools,
        });
        self.renderer.render(SERVER_TEMPLATE_NAME, &context)
    }
}

/// Generates all artifacts for `project` with the default renderer.
pub fn generate(project: &ProjectSpec) -> Result<GeneratedProject> {
    Generator::new()?.generate(project)
}

/// Server name used in the source and the manifest.
pub fn server_name(project: &ProjectSpec) -> &str {
    let name = project.name.trim();
    if name.is_empty() {
        DEFAULT_SERVER_NAME
    } else {
        name
    }
}

/// Serializes the manifest with two-space indentation.
pub fn render_manifest(project: &ProjectSpec) -> Result<String> {
    let manifest = Manifest {
        name: server_name(project),
        version: MANIFEST_VERSION,
        tools: &project.tools,
    };
    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Run instructions; identical for every project.
pub fn render_readme() -> String {
    README.to_string()
}
