//! Schema node to TypeScript type expression.

use crate::diagnostics::DiagnosticSink;
use crate::fields::render_static_key;
use crate::naming::structure_type_name;
use crate::primitive::map_primitive;
use crate::types::{NodeKind, SchemaNode, Structure, StructureKind, UNKNOWN_TYPE};

/// Everything a type expression may depend on within one selection.
///
/// Synthesis only reads the scope. Declaring structures is the section
/// assembler's job, so the dedup registry is not part of it.
#[derive(Clone, Copy)]
pub struct SectionScope<'a> {
    /// Section prefix, e.g. `"User"`.
    pub prefix: &'a str,
    /// Structures the current selection may reference.
    pub structures: &'a [Structure],
    pub sink: &'a dyn DiagnosticSink,
}

impl<'a> SectionScope<'a> {
    pub fn new(prefix: &'a str, structures: &'a [Structure], sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            prefix,
            structures,
            sink,
        }
    }

    /// First structure in the pool with the given id.
    pub fn structure(&self, id: &str) -> Option<&'a Structure> {
        self.structures.iter().find(|s| s.id == id)
    }

    pub fn structure_type_name(&self, structure: &Structure) -> String {
        structure_type_name(self.prefix, structure)
    }
}

impl std::fmt::Debug for SectionScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionScope")
            .field("prefix", &self.prefix)
            .field("structures", &self.structures.len())
            .finish()
    }
}

/// Synthesize the type expression for `node`.
///
/// Modifiers apply after the base type: nullable first, then array, so
/// `nullable + array` reads as an array of nullable values.
pub fn synthesize(node: &SchemaNode, scope: &SectionScope<'_>) -> String {
    let mut ty = match &node.kind {
        NodeKind::Primitive(token) => map_primitive(token, scope.sink),
        NodeKind::StructureRef { id, kind } => match scope.structure(id) {
            None => UNKNOWN_TYPE.to_string(),
            Some(structure) => match (kind, &structure.values) {
                (StructureKind::Enum, Some(values)) => literal_union(values),
                _ => scope.structure_type_name(structure),
            },
        },
        NodeKind::InlineObject(fields) => inline_object(fields, scope),
        NodeKind::Unknown => UNKNOWN_TYPE.to_string(),
    };

    if node.nullable {
        ty = format!("({ty}) | null");
    }
    if node.array {
        ty = format!("({ty})[]");
    }
    ty
}

/// `"a" | "b" | "c"`. An empty set renders as `never`.
pub fn literal_union(values: &[String]) -> String {
    if values.is_empty() {
        return "never".to_string();
    }
    values
        .iter()
        .map(|v| format!("\"{}\"", escape_string(v)))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn inline_object(fields: &[(String, SchemaNode)], scope: &SectionScope<'_>) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let members: Vec<String> = fields
        .iter()
        .map(|(name, node)| format!("{}: {}", render_static_key(name), synthesize(node, scope)))
        .collect();
    format!("{{ {} }}", members.join("; "))
}

pub(crate) fn escape_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use serde_json::json;

    fn pool() -> Vec<Structure> {
        serde_json::from_value(json!([
            { "id": "state", "name": "Travel state", "type": "enum", "values": ["Okay", "Abroad"] },
            { "id": "bar", "name": "Bar", "schema": { "current": { "type": "integer" } } }
        ]))
        .unwrap()
    }

    fn synth(node: serde_json::Value, sink: &CollectingSink) -> String {
        let structures = pool();
        let scope = SectionScope::new("User", &structures, sink);
        synthesize(&SchemaNode::from_value(&node), &scope)
    }

    #[test]
    fn primitive() {
        let sink = CollectingSink::new();
        assert_eq!(synth(json!({ "type": "integer" }), &sink), "number");
    }

    #[test]
    fn misshapen_marker_is_not_an_inline_object() {
        let sink = CollectingSink::new();
        assert_eq!(synth(json!({ "structure": "bar" }), &sink), "unknown");
        assert_eq!(
            synth(
                json!({ "type": { "type": "string" }, "id": { "type": "integer" } }),
                &sink
            ),
            "unknown"
        );
        assert_eq!(synth(json!({ "type": 5 }), &sink), "unknown");
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn nullable_then_array() {
        let sink = CollectingSink::new();
        let ty = synth(
            json!({ "type": "integer", "nullable": true, "array": true }),
            &sink,
        );
        assert_eq!(ty, "((number) | null)[]");
    }

    #[test]
    fn nullable_only_and_array_only() {
        let sink = CollectingSink::new();
        assert_eq!(
            synth(json!({ "type": "string", "nullable": true }), &sink),
            "(string) | null"
        );
        assert_eq!(
            synth(json!({ "type": "string", "array": true }), &sink),
            "(string)[]"
        );
    }

    #[test]
    fn enum_reference_inlines_values() {
        let sink = CollectingSink::new();
        let ty = synth(json!({ "structure": { "id": "state", "type": "enum" } }), &sink);
        assert_eq!(ty, "\"Okay\" | \"Abroad\"");
    }

    #[test]
    fn object_reference_uses_type_name() {
        let sink = CollectingSink::new();
        let ty = synth(json!({ "structure": { "id": "bar", "type": "object" } }), &sink);
        assert_eq!(ty, "UserV1Bar");
    }

    #[test]
    fn enum_tag_without_values_falls_back_to_name() {
        let sink = CollectingSink::new();
        let ty = synth(json!({ "structure": { "id": "bar", "type": "enum" } }), &sink);
        assert_eq!(ty, "UserV1Bar");
    }

    #[test]
    fn other_tag_references_enum_structure_by_name() {
        let sink = CollectingSink::new();
        let ty = synth(json!({ "structure": { "id": "state" } }), &sink);
        assert_eq!(ty, "UserV1TravelState");
    }

    #[test]
    fn unresolved_reference_is_unknown_without_diagnostic() {
        let sink = CollectingSink::new();
        let ty = synth(
            json!({ "structure": { "id": "missing", "type": "object" }, "array": true }),
            &sink,
        );
        assert_eq!(ty, "(unknown)[]");
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn inline_object_recurses_in_order() {
        let sink = CollectingSink::new();
        let ty = synth(
            json!({
                "until": { "type": "epoch timestamp (in seconds)" },
                "bar": { "structure": { "id": "bar", "type": "object" }, "nullable": true },
                "time left": { "type": "integer" }
            }),
            &sink,
        );
        assert_eq!(
            ty,
            "{ until: number; bar: (UserV1Bar) | null; \"time left\": number }"
        );
    }

    #[test]
    fn empty_inline_object() {
        let sink = CollectingSink::new();
        assert_eq!(synth(json!({}), &sink), "{}");
    }

    #[test]
    fn unknown_primitive_reports_through_scope_sink() {
        let sink = CollectingSink::new();
        assert_eq!(synth(json!({ "type": "blob" }), &sink), "unknown");
        assert_eq!(sink.warnings(), 1);
    }

    #[test]
    fn literal_union_escapes_quotes() {
        assert_eq!(
            literal_union(&["say \"hi\"".to_string()]),
            "\"say \\\"hi\\\"\""
        );
        assert_eq!(literal_union(&[]), "never");
    }
}
