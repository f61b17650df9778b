use crate::{
    constants::generation::RESERVED_NAMES,
    error::{Error, Result},
    model::{HandlerType, ProjectSpec, ToolSpec, UrlTemplate},
};
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use std::sync::LazyLock;

static PY_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

const PY_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally", "for",
    "from", "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or",
    "pass", "raise", "return", "try", "while", "with", "yield",
];

/// Outcome of checking a project before generation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the generated server unusable.
    pub errors: Vec<String>,
    /// Problems worth surfacing that still produce a working server.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::ValidationError { errors: self.errors })
        }
    }
}

/// Validate a value against a JSON schema.
pub fn validate_with_schema(
    value: &serde_json::Value,
    schema: &serde_json::Value,
) -> Result<()> {
    let validator = jsonschema::validator_for(schema).map_err(|e| {
        Error::Other(anyhow::anyhow!("Invalid JSON schema: {}", e))
    })?;

    let errors: Vec<String> =
        validator.iter_errors(value).map(|error| format!("Error: {error}")).collect();

    if !errors.is_empty() {
        return Err(Error::ProjectSchemaError(errors.join("\n")));
    }

    Ok(())
}

/// Whether `name` can be used as a Python function or parameter name.
pub fn is_valid_identifier(name: &str) -> bool {
    PY_IDENTIFIER.is_match(name) && !PY_KEYWORDS.contains(&name)
}

/// Checks everything the generator deliberately does not: names, identifiers
/// and handler configuration.
pub fn validate_project(project: &ProjectSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_duplicate_names(project, &mut report);
    check_identifier_collisions(project, &mut report);

    for tool in &project.tools {
        validate_tool(tool, &mut report);
    }

    report
}

fn check_duplicate_names(project: &ProjectSpec, report: &mut ValidationReport) {
    let mut seen = IndexSet::new();
    let mut reported = IndexSet::new();
    for tool in &project.tools {
        if !seen.insert(tool.name.as_str()) && reported.insert(tool.name.as_str()) {
            report.errors.push(format!("Duplicate tool name: {}", tool.name));
        }
    }
}

fn check_identifier_collisions(project: &ProjectSpec, report: &mut ValidationReport) {
    let mut by_identifier: IndexMap<String, IndexSet<&str>> = IndexMap::new();
    for tool in &project.tools {
        by_identifier.entry(tool.identifier()).or_default().insert(tool.name.as_str());
    }
    for (identifier, names) in by_identifier {
        if names.len() > 1 {
            let names: Vec<_> = names.iter().map(|n| format!("'{n}'")).collect();
            report.errors.push(format!(
                "Tools {} all generate the function name '{identifier}'",
                names.join(", ")
            ));
        }
    }
}

fn validate_tool(tool: &ToolSpec, report: &mut ValidationReport) {
    if tool.name.trim().is_empty() {
        report.errors.push("Tool name is required".to_string());
        return;
    }

    let identifier = tool.identifier();
    if !is_valid_identifier(&identifier) {
        report.errors.push(format!(
            "'{}': Invalid Python function name '{identifier}'",
            tool.name
        ));
    } else if RESERVED_NAMES.contains(&identifier.as_str()) {
        report.errors.push(format!(
            "'{}': Function name '{identifier}' is reserved by the generated server",
            tool.name
        ));
    }

    for param in tool.input_schema.properties.keys() {
        if !is_valid_identifier(param) {
            report
                .errors
                .push(format!("'{}': Invalid parameter name '{param}'", tool.name));
        } else if RESERVED_NAMES.contains(&param.as_str()) {
            report.errors.push(format!(
                "'{}': Parameter name '{param}' is reserved by the generated server",
                tool.name
            ));
        }
    }

    for missing in tool.input_schema.dangling_required() {
        report.warnings.push(format!(
            "'{}': Required parameter '{missing}' is not declared in properties",
            tool.name
        ));
    }

    if tool.handler_type == HandlerType::Api {
        validate_endpoint(tool, report);
    }
}

fn validate_endpoint(tool: &ToolSpec, report: &mut ValidationReport) {
    let Some(endpoint) = tool.endpoint() else {
        report.errors.push(format!("'{}': Missing API endpoint", tool.name));
        return;
    };

    let scheme_ok = url::Url::parse(endpoint)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !scheme_ok {
        report.warnings.push(format!(
            "'{}': API endpoint should start with http:// or https://",
            tool.name
        ));
    }

    let template = UrlTemplate::parse(endpoint);
    for placeholder in template.unbound(tool.input_schema.properties.keys()) {
        report.warnings.push(format!(
            "'{}': Placeholder '{{{placeholder}}}' does not match any parameter and will be sent as is",
            tool.name
        ));
    }
}
