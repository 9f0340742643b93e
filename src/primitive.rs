//! Primitive type vocabulary of the V1 schema.

use crate::diagnostics::{Diagnostic, DiagnosticSink, UNKNOWN_PRIMITIVE};
use crate::types::UNKNOWN_TYPE;

/// Map a primitive type token to a TypeScript type expression.
///
/// Matching is case-insensitive. Tokens outside the vocabulary map to
/// `unknown` and report one warning to `sink`.
pub fn map_primitive(token: &str, sink: &dyn DiagnosticSink) -> String {
    if let Some(mapped) = lookup_primitive(token) {
        return mapped.to_string();
    }

    sink.report(Diagnostic::warning(
        UNKNOWN_PRIMITIVE,
        format!("Unknown type: {token}"),
    ));
    UNKNOWN_TYPE.to_string()
}

/// Table lookup without side effects. `None` means the token is not in the vocabulary.
pub fn lookup_primitive(token: &str) -> Option<&'static str> {
    let mapped = match token.to_lowercase().as_str() {
        "array of strings" => "string[]",
        "boolean" => "boolean",
        "array of integers" | "array of epoch timestamp (in seconds)" => "number[]",
        "epoch timestamp (in seconds)"
        | "integer"
        | "number (with floating point)"
        | "integer or number (with floating point)" => "number",
        "numberboolean (0 for false, 1 for true)" => "0 | 1",
        "1 or 1.25" => "1 | 1.25",
        "1 or 1.5" => "1 | 1.5",
        "1 or 2" => "1 | 2",
        "string" | "date (yyyy-dd-mm hh:mm:ss)" | "date (yyyy-mm-dd hh:mm:ss)" => "string",
        "integer + string" => "number | string",
        "integer + (empty) string" => "number | \"\"",
        "key-value map" => "Record<string, any>",
        "unknown" | "unknown, let us know what it looks like." => UNKNOWN_TYPE,
        _ => return None,
    };
    Some(mapped)
}
