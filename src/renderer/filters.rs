use crate::model::derive_identifier;

/// Renders `value` as a double-quoted Python string literal.
///
/// JSON string escaping is a subset of Python's, so the JSON encoding of a
/// string is always a valid Python literal with the same value.
pub fn py_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Escapes text so it can sit between triple double quotes.
pub fn py_docstring_text(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Callable name derived from a tool or project name.
pub fn identifier(value: &str) -> String {
    derive_identifier(value)
}
