//! Writing generated artifacts.

use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::GenerateError;

/// Atomically replace `path` with `contents`.
///
/// The text goes to a temporary file next to `path` first and is renamed into
/// place, so readers see either the previous artifact or the complete new one.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

/// Save a pretty-printed copy of a JSON document, e.g. the OpenAPI source.
pub fn save_document(path: &Path, document: &Value) -> Result<(), GenerateError> {
    let text = serde_json::to_string_pretty(document)
        .map_err(|source| GenerateError::InvalidJson { source })?;
    write_artifact(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist/index.ts");

        write_artifact(&path, "export type A = 1;").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "export type A = 1;");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.ts");
        std::fs::write(&path, "old").unwrap();

        write_artifact(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        // Only the artifact remains; the temporary file was renamed.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn saves_pretty_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("openapi.json");

        save_document(&path, &json!({ "openapi": "3.0.0" })).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"openapi\": \"3.0.0\"\n}");
    }
}
