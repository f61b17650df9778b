//! Flat JSON-schema fragments describing tool inputs

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Primitive `type` tag of a schema property.
///
/// Unknown tags are kept verbatim in [`SchemaType::Other`] so that a manifest
/// reproduces exactly what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Other(String),
}

impl From<String> for SchemaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "array" => SchemaType::Array,
            "object" => SchemaType::Object,
            _ => SchemaType::Other(value),
        }
    }
}

impl From<SchemaType> for String {
    fn from(value: SchemaType) -> Self {
        match value {
            SchemaType::String => "string".into(),
            SchemaType::Number => "number".into(),
            SchemaType::Integer => "integer".into(),
            SchemaType::Boolean => "boolean".into(),
            SchemaType::Array => "array".into(),
            SchemaType::Object => "object".into(),
            SchemaType::Other(other) => other,
        }
    }
}

/// Target-language primitive a parameter is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Text,
    Float,
    Int,
    Bool,
    List,
    Map,
}

impl ParamType {
    /// Maps an optional schema tag to a parameter type; anything unknown is text.
    pub fn from_schema(schema_type: Option<&SchemaType>) -> Self {
        match schema_type {
            Some(SchemaType::String) => ParamType::Text,
            Some(SchemaType::Number) => ParamType::Float,
            Some(SchemaType::Integer) => ParamType::Int,
            Some(SchemaType::Boolean) => ParamType::Bool,
            Some(SchemaType::Array) => ParamType::List,
            Some(SchemaType::Object) => ParamType::Map,
            Some(SchemaType::Other(_)) | None => ParamType::Text,
        }
    }

    /// Python annotation for this type.
    pub fn annotation(self) -> &'static str {
        match self {
            ParamType::Text => "str",
            ParamType::Float => "float",
            ParamType::Int => "int",
            ParamType::Bool => "bool",
            ParamType::List => "list",
            ParamType::Map => "dict",
        }
    }

    /// Default literal used for optional parameters.
    pub fn default_literal(self) -> &'static str {
        match self {
            ParamType::Text => "\"\"",
            ParamType::Float => "0.0",
            ParamType::Int => "0",
            ParamType::Bool => "False",
            ParamType::List => "[]",
            ParamType::Map => "{}",
        }
    }
}

/// A single entry of `properties`.
///
/// Deserialization never fails on an object: a `type` or `description` that is
/// not a string is kept in `extra` and the property falls back to text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Property {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Keys toolsmith does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    pub fn new(schema_type: SchemaType) -> Self {
        Self { schema_type: Some(schema_type), ..Default::default() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn param_type(&self) -> ParamType {
        ParamType::from_schema(self.schema_type.as_ref())
    }

    /// Reads a property leniently; anything but an object is an untyped property.
    pub fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };
        let mut property = Self { extra: fields.clone(), ..Default::default() };
        if let Some(Value::String(tag)) = fields.get("type") {
            property.schema_type = Some(SchemaType::from(tag.clone()));
            property.extra.shift_remove("type");
        }
        if let Some(Value::String(text)) = fields.get("description") {
            property.description = Some(text.clone());
            property.extra.shift_remove("description");
        }
        property
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Property::from_value(&value))
    }
}

/// Restricted input schema: flat `properties` plus `required` names.
///
/// The typed view is read out of the user's document, which is kept as given
/// and is what gets serialized. Malformed `properties` or `required` entries
/// are skipped one by one instead of discarding the whole schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSchema {
    pub properties: IndexMap<String, Property>,
    pub required: Vec<String>,
    document: Map<String, Value>,
}

impl InputSchema {
    pub fn from_document(document: Map<String, Value>) -> Self {
        let properties = match document.get("properties") {
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(name, value)| (name.clone(), Property::from_value(value)))
                .collect(),
            _ => IndexMap::new(),
        };
        let required = match document.get("required") {
            Some(Value::Array(names)) => names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        Self { properties, required, document }
    }

    /// The schema object exactly as the user wrote it.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Names listed in `required` that no property declares.
    pub fn dangling_required(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .filter(|name| !self.properties.contains_key(name.as_str()))
            .map(String::as_str)
    }

    /// Builder helper used mostly by tests and programmatic callers.
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        property: Property,
        required: bool,
    ) -> Self {
        let name = name.into();
        if let Value::Object(entries) = self
            .document
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()))
        {
            entries.insert(name.clone(), serde_json::to_value(&property).unwrap_or_default());
        }
        if required && !self.is_required(&name) {
            if let Value::Array(names) = self
                .document
                .entry("required")
                .or_insert_with(|| Value::Array(Vec::new()))
            {
                names.push(Value::String(name.clone()));
            }
            self.required.push(name.clone());
        }
        self.properties.insert(name, property);
        self
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InputSchema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::deserialize(deserializer).map(InputSchema::from_document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_every_schema_type_to_a_param_type() {
        let cases = [
            ("string", ParamType::Text, "str", "\"\""),
            ("number", ParamType::Float, "float", "0.0"),
            ("integer", ParamType::Int, "int", "0"),
            ("boolean", ParamType::Bool, "bool", "False"),
            ("array", ParamType::List, "list", "[]"),
            ("object", ParamType::Map, "dict", "{}"),
            ("uuid", ParamType::Text, "str", "\"\""),
        ];
        for (tag, param, annotation, default) in cases {
            let schema_type = SchemaType::from(tag.to_string());
            let mapped = ParamType::from_schema(Some(&schema_type));
            assert_eq!(mapped, param, "tag {tag}");
            assert_eq!(mapped.annotation(), annotation);
            assert_eq!(mapped.default_literal(), default);
        }
        assert_eq!(ParamType::from_schema(None), ParamType::Text);
    }

    #[test]
    fn unknown_type_tag_survives_serialization() {
        let property: Property =
            serde_json::from_value(json!({"type": "uuid", "format": "v4"})).unwrap();
        assert_eq!(property.schema_type, Some(SchemaType::Other("uuid".into())));
        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({"type": "uuid", "format": "v4"})
        );
    }

    #[test]
    fn keeps_property_insertion_order() {
        let schema: InputSchema = serde_json::from_str(
            r#"{"properties": {"zeta": {"type": "string"}, "alpha": {"type": "integer"}}}"#,
        )
        .unwrap();
        let names: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_schema_serializes_as_empty_object() {
        let schema = InputSchema::default();
        assert_eq!(serde_json::to_value(&schema).unwrap(), json!({}));
    }

    #[test]
    fn reports_required_names_without_property() {
        let schema: InputSchema = serde_json::from_value(json!({
            "type": "object",
            "properties": {"city": {"type": "string"}},
            "required": ["city", "country"]
        }))
        .unwrap();
        assert!(schema.is_required("city"));
        assert_eq!(schema.dangling_required().collect::<Vec<_>>(), vec!["country"]);
        assert_eq!(schema.document().get("type"), Some(&json!("object")));
    }

    #[test]
    fn serializes_the_document_as_written() {
        for document in [
            json!({"type": "object", "properties": {}, "required": []}),
            json!({"required": ["city"], "type": "object", "properties": {"city": {"description": "City", "type": "string"}}}),
        ] {
            let schema: InputSchema = serde_json::from_value(document.clone()).unwrap();
            assert_eq!(
                serde_json::to_string(&schema).unwrap(),
                serde_json::to_string(&document).unwrap()
            );
        }
    }

    #[test]
    fn malformed_entries_degrade_one_by_one() {
        let schema: InputSchema = serde_json::from_value(json!({
            "properties": {
                "city": {"type": "string"},
                "nullable": {"type": ["string", "null"], "description": 7},
                "bare": true
            },
            "required": ["city", 3]
        }))
        .unwrap();
        let names: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(names, vec!["city", "nullable", "bare"]);
        assert_eq!(schema.properties["city"].param_type(), ParamType::Text);
        assert_eq!(schema.properties["nullable"].schema_type, None);
        assert_eq!(schema.properties["nullable"].description, None);
        assert_eq!(schema.properties["bare"], Property::default());
        assert_eq!(schema.required, vec!["city"]);

        let schema: InputSchema =
            serde_json::from_value(json!({"properties": {"a": {}}, "required": "a"})).unwrap();
        assert!(schema.required.is_empty());
        assert_eq!(schema.document().get("required"), Some(&json!("a")));
    }

    #[test]
    fn builder_keeps_document_in_sync() {
        let schema = InputSchema::default()
            .with_property("city", Property::new(SchemaType::String), true)
            .with_property("limit", Property::new(SchemaType::Integer), false);
        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "properties": {"city": {"type": "string"}, "limit": {"type": "integer"}},
                "required": ["city"]
            })
        );
    }
}
