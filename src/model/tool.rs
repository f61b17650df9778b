use super::schema::InputSchema;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How a tool's invocation produces its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerType {
    /// Returns a canned string.
    Static,
    /// Performs a single HTTP GET against a templated URL.
    Api,
}

impl HandlerType {
    /// Parses a persisted handler tag, rejecting anything but `static` and `api`.
    pub fn parse(tool: &str, handler_type: &str) -> Result<Self> {
        match handler_type {
            "static" => Ok(HandlerType::Static),
            "api" => Ok(HandlerType::Api),
            other => Err(Error::UnsupportedHandler {
                tool: tool.to_string(),
                handler_type: other.to_string(),
            }),
        }
    }
}

impl Display for HandlerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerType::Static => "static",
            HandlerType::Api => "api",
        };
        write!(f, "{s}")
    }
}

/// A user-defined tool exposed by the generated server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub input_schema: InputSchema,
    #[serde(default)]
    pub output_schema: Option<String>,
    pub handler_type: HandlerType,
    #[serde(default)]
    pub handler_code: Option<String>,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, handler_type: HandlerType) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: InputSchema::default(),
            output_schema: None,
            handler_type,
            handler_code: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_schema(mut self, input_schema: InputSchema) -> Self {
        self.input_schema = input_schema;
        self
    }

    pub fn with_handler_code(mut self, handler_code: impl Into<String>) -> Self {
        self.handler_code = Some(handler_code.into());
        self
    }

    /// Callable name derived from the tool name.
    ///
    /// Lower-cases and turns spaces and hyphens into underscores. The result is
    /// not guaranteed to be a valid identifier; see [`crate::validation`].
    pub fn identifier(&self) -> String {
        derive_identifier(&self.name)
    }

    /// Handler code when it is present and non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        self.handler_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Lower-cases `name` and replaces spaces and hyphens with underscores.
pub fn derive_identifier(name: &str) -> String {
    name.replace([' ', '-'], "_").to_lowercase()
}

/// A named, ordered collection of tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, tools: Vec<ToolSpec>) -> Self {
        Self { name: name.into(), tools }
    }
}
