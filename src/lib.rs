//! Torn API type generator
//!
//! Generates TypeScript declarations from the Torn API's two schema
//! descriptions:
//!
//! - **V1**: a bespoke JSON dialect listing API sections, their selections
//!   (response shapes) and reusable named structures. This crate maps it to
//!   types itself.
//! - **V2**: an OpenAPI document, handed to an external converter through
//!   [`OpenApiConverter`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tornapi_typegen::{generate_section_types, CollectingSink, SectionSchema};
//!
//! let schema: SectionSchema = serde_json::from_value(json!({
//!     "selections": [{
//!         "name": "bars",
//!         "schema": {
//!             "energy": { "structure": { "id": "bar", "type": "object" } }
//!         },
//!         "structures": [{
//!             "id": "bar",
//!             "name": "Bar",
//!             "schema": { "current": { "type": "integer" } }
//!         }]
//!     }]
//! }))
//! .unwrap();
//!
//! let sink = CollectingSink::new();
//! let types = generate_section_types("user", &schema, &sink);
//!
//! assert!(types.contains("export interface UserV1Bar {\n    current: number;\n}"));
//! assert!(types.contains("export interface UserV1BarsResponse {\n    energy: UserV1Bar;\n}"));
//! ```
//!
//! # Schema nodes
//!
//! | Node | Type |
//! |------|------|
//! | `{ "type": "integer" }` | primitive vocabulary lookup (`number`) |
//! | `{ "structure": { "id", "type": "enum" } }` | literal union of the structure's values |
//! | `{ "structure": { "id", "type": "object" } }` | `{Section}V1{Name}` |
//! | `{ "a": {...}, "b": {...} }` | inline `{ a: A; b: B }` |
//!
//! `nullable: true` wraps as `(T) | null`, then `array: true` as `(T)[]`.
//! Fields named `<...>` become index signatures.

mod assemble;
mod diagnostics;
mod error;
mod error_codes;
mod fields;
mod loader;
mod naming;
mod output;
mod primitive;
mod registry;
mod section;
mod source;
mod synth;
mod types;
mod v2;

pub use assemble::{assemble_v1, generate_v1_types};
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, Severity, TracingSink, UNKNOWN_PRIMITIVE,
};
pub use error::GenerateError;
pub use error_codes::{error_constant_name, render_error_enum, ERROR_ENUM_NAME};
pub use fields::{dynamic_key_param, generate_fields, render_static_key};
pub use loader::{decode, is_url, load_json, load_json_auto, load_json_str, HTTP_TIMEOUT};
pub use naming::{response_type_name, sanitize_type_name, section_prefix, structure_type_name};
pub use output::{save_document, write_artifact};
pub use primitive::{lookup_primitive, map_primitive};
pub use registry::StructureRegistry;
pub use section::generate_section_types;
pub use source::{DirSource, SchemaSource, DEFAULT_V1_BASE_URL};
pub use synth::{literal_union, synthesize, SectionScope};
pub use types::{
    ErrorEntry, ErrorTable, NodeKind, ObjectSchema, SchemaNode, SectionList, SectionSchema,
    Selection, Structure, StructureKind, UNKNOWN_TYPE,
};
pub use v2::{
    combine_artifacts, generate_v2_types, tidy_converted_types, CommandConverter,
    OpenApiConverter, DEFAULT_OPENAPI_URL,
};

#[cfg(feature = "remote")]
pub use loader::{load_json_url, load_json_with_client};
#[cfg(feature = "remote")]
pub use source::HttpSource;
