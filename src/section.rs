//! Declarations for one API section.

use crate::diagnostics::DiagnosticSink;
use crate::fields::generate_fields;
use crate::naming::{response_type_name, section_prefix};
use crate::registry::StructureRegistry;
use crate::synth::{literal_union, SectionScope};
use crate::types::{SectionSchema, Selection, Structure};

/// Generate every declaration of a section.
///
/// For each selection, the structures in its pool are declared first (each
/// structure name at most once per section), followed by the selection's
/// response interface. Response interfaces are never deduplicated.
pub fn generate_section_types(
    section: &str,
    schema: &SectionSchema,
    sink: &dyn DiagnosticSink,
) -> String {
    let prefix = section_prefix(section);
    let mut registry = StructureRegistry::new();
    let mut blocks: Vec<String> = Vec::new();

    for selection in &schema.selections {
        emit_selection(&prefix, selection, &mut registry, &mut blocks, sink);
    }

    tracing::debug!(
        section,
        selections = schema.selections.len(),
        structures = registry.names().len(),
        "generated section types"
    );

    blocks.join("\n")
}

fn emit_selection(
    prefix: &str,
    selection: &Selection,
    registry: &mut StructureRegistry,
    blocks: &mut Vec<String>,
    sink: &dyn DiagnosticSink,
) {
    let scope = SectionScope::new(prefix, &selection.structures, sink);

    for structure in &selection.structures {
        let name = scope.structure_type_name(structure);
        if !registry.register(&name) {
            continue;
        }
        if let Some(declaration) = structure_declaration(&name, structure, &scope) {
            blocks.push(declaration);
            blocks.push(String::new());
        }
    }

    let response = response_type_name(prefix, selection);
    let fields = generate_fields(&selection.schema.fields, &scope);
    blocks.push(interface(&response, &fields));
    blocks.push(String::new());
}

/// Literal union for enum structures, interface for object structures,
/// nothing for a structure with neither.
fn structure_declaration(
    name: &str,
    structure: &Structure,
    scope: &SectionScope<'_>,
) -> Option<String> {
    if let Some(values) = &structure.values {
        return Some(format!("export type {name} = {};", literal_union(values)));
    }
    let schema = structure.schema.as_ref()?;
    let fields = generate_fields(&schema.fields, scope);
    Some(interface(name, &fields))
}

fn interface(name: &str, fields: &[String]) -> String {
    let mut out = format!("export interface {name} {{\n");
    for field in fields {
        out.push_str("    ");
        out.push_str(field);
        out.push('\n');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use serde_json::json;

    fn section(value: serde_json::Value) -> SectionSchema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn structures_before_response() {
        let schema = section(json!({
            "selections": [{
                "name": "bars",
                "schema": {
                    "energy": { "structure": { "id": "bar", "type": "object" } }
                },
                "structures": [
                    { "id": "bar", "name": "Bar", "schema": {
                        "current": { "type": "integer" },
                        "maximum": { "type": "integer" }
                    } }
                ]
            }]
        }));
        let sink = CollectingSink::new();
        let out = generate_section_types("user", &schema, &sink);

        assert_eq!(
            out,
            "export interface UserV1Bar {\n    current: number;\n    maximum: number;\n}\n\n\
             export interface UserV1BarsResponse {\n    energy: UserV1Bar;\n}\n"
        );
    }

    #[test]
    fn shared_structure_declared_once() {
        let status = json!({ "id": "status", "name": "Status", "values": ["Okay", "Hospital"] });
        let schema = section(json!({
            "selections": [
                {
                    "name": "profile",
                    "schema": { "status": { "structure": { "id": "status", "type": "enum" } } },
                    "structures": [status.clone()]
                },
                {
                    "name": "basic",
                    "schema": { "status": { "structure": { "id": "status", "type": "object" } } },
                    "structures": [status]
                }
            ]
        }));
        let sink = CollectingSink::new();
        let out = generate_section_types("user", &schema, &sink);

        assert_eq!(out.matches("export type UserV1Status =").count(), 1);
        assert!(out.contains("status: \"Okay\" | \"Hospital\";"));
        assert!(out.contains("status: UserV1Status;"));
        assert!(out.contains("export interface UserV1ProfileResponse"));
        assert!(out.contains("export interface UserV1BasicResponse"));
    }

    #[test]
    fn response_types_are_not_deduplicated() {
        let schema = section(json!({
            "selections": [
                { "name": "log", "schema": { "a": { "type": "integer" } }, "structures": [] },
                { "name": "log", "schema": { "b": { "type": "string" } }, "structures": [] }
            ]
        }));
        let sink = CollectingSink::new();
        let out = generate_section_types("user", &schema, &sink);
        assert_eq!(out.matches("export interface UserV1LogResponse {").count(), 2);
    }

    #[test]
    fn structure_without_shape_is_skipped() {
        let schema = section(json!({
            "selections": [{
                "name": "misc",
                "schema": {},
                "structures": [{ "id": "x", "name": "Empty" }]
            }]
        }));
        let sink = CollectingSink::new();
        let out = generate_section_types("user", &schema, &sink);
        assert_eq!(out, "export interface UserV1MiscResponse {\n}\n");
    }

    #[test]
    fn registry_does_not_leak_between_sections() {
        let schema = section(json!({
            "selections": [{
                "name": "info",
                "schema": {},
                "structures": [{ "id": "1", "name": "Info", "values": ["a"] }]
            }]
        }));
        let sink = CollectingSink::new();
        let first = generate_section_types("torn", &schema, &sink);
        let second = generate_section_types("torn", &schema, &sink);
        assert_eq!(first, second);
        assert!(second.contains("export type TornV1Info = \"a\";"));
    }
}
