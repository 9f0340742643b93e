//! `TornApiError` enum from the API error table.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ErrorEntry;

/// Name of the generated enum.
pub const ERROR_ENUM_NAME: &str = "TornApiError";

/// Words that carry no meaning in a constant name.
const STOP_WORDS: &[&str] = &[
    "IS", "IN", "THE", "OF", "THIS", "IDENTITY", "PLEASE", "TRY", "DUE", "OWNER", "AGAIN",
];

const MAX_NAME_TOKENS: usize = 5;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid regex"));

/// Derive a constant name from an error message.
///
/// `"Incorrect Key"` -> `INCORRECT_KEY`. Different messages can map to the
/// same name; no attempt is made to tell them apart. Runs of whitespace count
/// as one separator, so `"Backend  error"` is `BACKEND_ERROR`, not
/// `BACKEND__ERROR`.
pub fn error_constant_name(message: &str) -> String {
    let upper = message.to_uppercase();
    let cleaned = NON_WORD.replace_all(&upper, "");

    cleaned
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .take(MAX_NAME_TOKENS)
        .collect::<Vec<_>>()
        .join("_")
}

/// Render the error table as a TypeScript enum, one member per entry in table order.
pub fn render_error_enum(entries: &[ErrorEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!("export enum {ERROR_ENUM_NAME} {{"));
    for entry in entries {
        lines.push(format!(
            "{} = {},",
            error_constant_name(&entry.message),
            entry.code
        ));
    }
    lines.push("}".to_string());
    lines.join("\n")
}
