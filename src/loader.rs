//! Project definition loading
//!
//! A project is read from a JSON or YAML file, from a directory holding one of
//! the well-known project files, or from stdin. The raw document is checked
//! against a structural schema before being turned into records.

use crate::{
    constants::{PROJECT_FILENAMES, STDIN_INDICATOR},
    error::{Error, Result},
    model::ProjectRecord,
    validation::validate_with_schema,
};
use log::debug;
use serde_json::json;
use std::path::Path;

/// Input formats a project definition can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// Shape every project document must have before conversion.
fn project_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {"type": "string"},
            "tools": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "handler_type"],
                    "properties": {
                        "name": {"type": "string"},
                        "description": {"type": ["string", "null"]},
                        "input_schema": {"type": ["object", "string", "null"]},
                        "output_schema": {"type": ["string", "null"]},
                        "handler_type": {"type": "string"},
                        "handler_code": {"type": ["string", "null"]}
                    }
                }
            }
        }
    })
}

impl ProjectRecord {
    /// Loads a project from `source`: a file, a directory, or `-` for stdin.
    pub fn load(source: &str) -> Result<Self> {
        if source == STDIN_INDICATOR {
            debug!("Reading project definition from stdin");
            let content = std::io::read_to_string(std::io::stdin())?;
            return Self::parse(&content, Format::Json);
        }

        let path = Path::new(source);
        let file = if path.is_dir() { find_project_file(path)? } else { path.to_path_buf() };
        debug!("Reading project definition from '{}'", file.display());
        let content = std::fs::read_to_string(&file)?;
        Self::parse(&content, Format::from_path(&file))
    }

    /// Parses and structurally checks a project document.
    pub fn parse(content: &str, format: Format) -> Result<Self> {
        let document: serde_json::Value = match format {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
        };
        validate_with_schema(&document, &project_schema())?;
        Ok(serde_json::from_value(document)?)
    }
}

fn find_project_file(project_dir: &Path) -> Result<std::path::PathBuf> {
    PROJECT_FILENAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::ProjectNotFound {
            project_dir: project_dir.display().to_string(),
            project_files: PROJECT_FILENAMES.join(", "),
        })
}
