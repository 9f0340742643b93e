//! Core types of the V1 schema dialect.
//!
//! Raw documents are decoded with serde; schema nodes are parsed once into
//! [`SchemaNode`] so later stages match on variants instead of probing JSON keys.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Type expression used wherever the schema gives us nothing to go on.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Response of the section-list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionList {
    pub sections: Vec<String>,
}

/// Response of the error-table endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorTable {
    pub errors: Vec<ErrorEntry>,
}

/// One row of the API error table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorEntry {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub description: String,
}

/// Schema document for a single API section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionSchema {
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// One operation of a section and the structures its response may reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Selection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub access: String,
    #[serde(default)]
    pub schema: ObjectSchema,
    #[serde(default)]
    pub structures: Vec<Structure>,
}

/// A named, reusable shape referenced by id from selection schemas.
#[derive(Debug, Clone, Deserialize)]
pub struct Structure {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "optional_literals")]
    pub values: Option<Vec<String>>,
    #[serde(default)]
    pub schema: Option<ObjectSchema>,
}

/// Ordered field list of an object schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct ObjectSchema {
    pub fields: Vec<(String, SchemaNode)>,
}

impl ObjectSchema {
    /// Parses every entry of a JSON object, keeping source order.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            fields: map
                .iter()
                .map(|(name, node)| (name.clone(), SchemaNode::from_value(node)))
                .collect(),
        }
    }
}

impl From<Value> for ObjectSchema {
    fn from(value: Value) -> Self {
        match &value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }
}

/// How a structure reference asks to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Enum,
    Object,
    Other,
}

impl StructureKind {
    /// Parse the `structure.type` tag. Missing or unrecognized tags map to `Other`.
    pub fn parse(tag: Option<&str>) -> Self {
        match tag {
            Some("enum") => StructureKind::Enum,
            Some("object") => StructureKind::Object,
            _ => StructureKind::Other,
        }
    }
}

/// Base shape of a schema node, before modifiers.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Free-text primitive token such as `"integer"`.
    Primitive(String),
    /// Reference to a structure in the selection's pool.
    StructureRef { id: String, kind: StructureKind },
    /// Nested object spelled out in place.
    InlineObject(Vec<(String, SchemaNode)>),
    /// Anything else.
    Unknown,
}

/// A schema node together with its `nullable` / `array` modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub kind: NodeKind,
    pub nullable: bool,
    pub array: bool,
}

impl SchemaNode {
    /// Node of the given kind without modifiers.
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            nullable: false,
            array: false,
        }
    }

    /// Parse a raw JSON node.
    ///
    /// Precedence: string `type`, then object `structure`, then an object
    /// with neither key as an inline nested object. A `type` or `structure`
    /// key of any other shape makes the node unknown. Boolean
    /// `nullable`/`array` keys are modifiers and never become inline fields.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::new(NodeKind::Unknown);
        };

        let kind = if let Some(token) = map.get("type").and_then(Value::as_str) {
            NodeKind::Primitive(token.to_string())
        } else if let Some(Value::Object(reference)) = map.get("structure") {
            NodeKind::StructureRef {
                id: reference.get("id").map(id_text).unwrap_or_default(),
                kind: StructureKind::parse(reference.get("type").and_then(Value::as_str)),
            }
        } else if map.contains_key("type") || map.contains_key("structure") {
            NodeKind::Unknown
        } else {
            NodeKind::InlineObject(
                map.iter()
                    .filter(|(key, val)| !(is_modifier(key) && val.is_boolean()))
                    .map(|(key, val)| (key.clone(), SchemaNode::from_value(val)))
                    .collect(),
            )
        };

        Self {
            kind,
            nullable: map.get("nullable").and_then(Value::as_bool) == Some(true),
            array: map.get("array").and_then(Value::as_bool) == Some(true),
        }
    }
}

fn is_modifier(key: &str) -> bool {
    key == "nullable" || key == "array"
}

/// Structure ids show up both as strings and as numbers.
fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(id_text(&value))
}

fn optional_literals<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| values.iter().map(id_text).collect()))
}
