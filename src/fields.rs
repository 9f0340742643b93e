//! Field declarations for object schemas.
//!
//! A field whose name is wrapped in angle brackets (`<item id>`) is a dynamic
//! key: the object accepts arbitrary string keys with that value type, which
//! TypeScript spells as an index signature.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::synth::{escape_string, synthesize, SectionScope};
use crate::types::SchemaNode;

static KEY_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-]+").expect("valid regex"));

/// Generate the field declarations (`name: Type;`) for an object schema.
///
/// Static fields come first, then the dynamic-key field. When more than one
/// dynamic key is present they collapse into a single `[key: string]`
/// signature over the union of their value types and the static fields are
/// dropped.
pub fn generate_fields(fields: &[(String, SchemaNode)], scope: &SectionScope<'_>) -> Vec<String> {
    let (dynamic, fixed): (Vec<_>, Vec<_>) = fields
        .iter()
        .partition(|(name, _)| dynamic_key_param(name).is_some());

    if dynamic.len() > 1 {
        // Known lossy case: static fields next to several wildcard keys are discarded.
        let mut value_types: Vec<String> = Vec::new();
        for (_, node) in &dynamic {
            let ty = synthesize(node, scope);
            if !value_types.contains(&ty) {
                value_types.push(ty);
            }
        }
        return vec![format!("[key: string]: {};", value_types.join(" | "))];
    }

    fixed
        .into_iter()
        .chain(dynamic)
        .map(|(name, node)| {
            let key = match dynamic_key_param(name) {
                Some(param) => format!("[{}: string]", index_param_name(param)),
                None => render_static_key(name),
            };
            format!("{key}: {};", synthesize(node, scope))
        })
        .collect()
}

/// Interior of a `<...>` field name, or `None` for ordinary fields.
pub fn dynamic_key_param(name: &str) -> Option<&str> {
    name.strip_prefix('<')?.strip_suffix('>')
}

/// Quote a field name when it is not a plain identifier-like key:
/// it starts with a digit or contains whitespace or a hyphen.
pub fn render_static_key(name: &str) -> String {
    let needs_quotes = name.starts_with(|c: char| c.is_ascii_digit())
        || name.contains(|c: char| c.is_whitespace() || c == '-');
    if needs_quotes {
        format!("\"{}\"", escape_string(name))
    } else {
        name.to_string()
    }
}

fn index_param_name(param: &str) -> String {
    let name = KEY_SEPARATORS.replace_all(param, "_");
    if name.is_empty() {
        "key".to_string()
    } else {
        name.into_owned()
    }
}
