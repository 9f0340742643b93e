//! Top-level V1 artifact assembly.

use rayon::prelude::*;

use crate::diagnostics::DiagnosticSink;
use crate::error::GenerateError;
use crate::error_codes::render_error_enum;
use crate::section::generate_section_types;
use crate::source::SchemaSource;

/// Fetch every V1 document from `source` and generate the complete V1 artifact.
///
/// The section list and error table are fetched together; section schemas are
/// then fetched and rendered in parallel. Output order always follows the
/// section list. The first fetch failure aborts the whole run.
pub fn generate_v1_types(
    source: &dyn SchemaSource,
    sink: &dyn DiagnosticSink,
) -> Result<String, GenerateError> {
    let (sections, errors) = rayon::join(|| source.sections(), || source.error_codes());
    let sections = sections?;
    let errors = errors?;
    tracing::info!(sections = sections.len(), errors = errors.len(), "fetched V1 index");

    let section_types = sections
        .par_iter()
        .map(|section| -> Result<String, GenerateError> {
            let schema = source.section_schema(section)?;
            Ok(generate_section_types(section, &schema, sink))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(assemble_v1(
        &source.origin(),
        &sections,
        &section_types,
        &render_error_enum(&errors),
    ))
}

/// Join per-section output, section banners, and the error enum.
///
/// `section_types[i]` belongs to `sections[i]`.
pub fn assemble_v1(
    origin: &str,
    sections: &[String],
    section_types: &[String],
    error_enum: &str,
) -> String {
    let mut parts: Vec<String> = vec![
        "// Auto-generated TypeScript types for Torn API V1".to_string(),
        format!("// Generated from: {origin}"),
        String::new(),
    ];
    parts.extend(
        sections
            .iter()
            .zip(section_types)
            .map(|(section, types)| {
                format!("// ===== {} SECTION =====\n\n{}", section.to_uppercase(), types)
            }),
    );
    parts.push(String::new());
    parts.push("// ===== ERROR CODES =====".to_string());
    parts.push(String::new());
    parts.push(error_enum.to_string());
    parts.join("\n")
}
