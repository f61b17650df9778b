//! Persisted project and tool records and their conversion into the typed model
//!
//! Records are what a datastore or a project file hands over: the handler type
//! is free text and the input schema may be an object, a JSON-encoded string or
//! missing altogether. Conversion is where an unknown handler type is rejected.

use super::{HandlerType, InputSchema, ProjectSpec, ToolSpec};
use crate::error::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input_schema: Option<serde_json::Value>,
    #[serde(default)]
    pub output_schema: Option<String>,
    pub handler_type: String,
    #[serde(default)]
    pub handler_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub tools: Vec<ToolRecord>,
}

impl ToolRecord {
    pub fn into_spec(self) -> Result<ToolSpec> {
        let handler_type = HandlerType::parse(&self.name, &self.handler_type)?;
        let input_schema = parse_input_schema(&self.name, self.input_schema);
        Ok(ToolSpec {
            name: self.name,
            description: self.description,
            input_schema,
            output_schema: self.output_schema,
            handler_type,
            handler_code: self.handler_code,
        })
    }
}

impl ProjectRecord {
    /// Converts every tool record, failing on the first unsupported handler.
    pub fn into_spec(self) -> Result<ProjectSpec> {
        let tools = self
            .tools
            .into_iter()
            .map(ToolRecord::into_spec)
            .collect::<Result<Vec<_>>>()?;
        debug!("Converted project '{}' with {} tool(s)", self.name, tools.len());
        Ok(ProjectSpec { name: self.name, tools })
    }
}

/// Reads a stored input schema, degrading to an empty schema when it is unusable.
fn parse_input_schema(tool: &str, raw: Option<serde_json::Value>) -> InputSchema {
    let value = match raw {
        None | Some(serde_json::Value::Null) => return InputSchema::default(),
        Some(serde_json::Value::String(text)) if text.trim().is_empty() => {
            return InputSchema::default()
        }
        Some(serde_json::Value::String(text)) => {
            match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Tool '{tool}': input schema is not valid JSON ({e}); using an empty schema");
                    return InputSchema::default();
                }
            }
        }
        Some(value) => value,
    };

    match value {
        serde_json::Value::Object(document) => InputSchema::from_document(document),
        other => {
            warn!("Tool '{tool}': input schema must be an object, got {other}; using an empty schema");
            InputSchema::default()
        }
    }
}
