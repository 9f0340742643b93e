//! Type-name derivation.

use crate::types::{Selection, Structure};

/// Turn a display name into a PascalCase identifier.
///
/// Commas and ampersands are dropped, the rest is split on runs of whitespace,
/// `-` and `_`, and each token is capitalized and lowercased after the first
/// character.
pub fn sanitize_type_name(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| *c != ',' && *c != '&').collect();

    stripped
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
        .map(capitalize_token)
        .collect()
}

fn capitalize_token(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Section name with its first character uppercased (`"user"` -> `"User"`).
pub fn section_prefix(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `{prefix}V1{Name}` for a structure declaration.
pub fn structure_type_name(prefix: &str, structure: &Structure) -> String {
    format!("{prefix}V1{}", sanitize_type_name(&structure.name))
}

/// `{prefix}V1{Name}Response` for a selection's response interface.
pub fn response_type_name(prefix: &str, selection: &Selection) -> String {
    format!("{prefix}V1{}Response", sanitize_type_name(&selection.name))
}
