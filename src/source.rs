//! Where the V1 schema comes from.
//!
//! The live API serves three kinds of document:
//!
//! | Endpoint | Body |
//! |----------|------|
//! | `{base}/sections` | `{ "sections": ["user", ...] }` |
//! | `{base}/schema/{section}` | `{ "selections": [...] }` |
//! | `{base}/errors` | `{ "errors": [{ "code", "message", "description" }] }` |
//!
//! [`DirSource`] reads the same documents from a local snapshot directory
//! (`sections.json`, `schema/{section}.json`, `errors.json`).

use std::path::PathBuf;
#[cfg(feature = "remote")]
use std::time::Duration;

use crate::error::GenerateError;
use crate::loader::{decode, load_json};
use crate::types::{ErrorEntry, ErrorTable, SectionList, SectionSchema};

/// Base URL of the public V1 schema service.
pub const DEFAULT_V1_BASE_URL: &str = "https://tornapi.tornplayground.eu/api/v1";

/// Provider of V1 schema documents.
///
/// Sections are fetched in parallel, so implementations must be `Sync`.
pub trait SchemaSource: Sync {
    /// Section names in the order they should appear in the output.
    fn sections(&self) -> Result<Vec<String>, GenerateError>;

    fn section_schema(&self, section: &str) -> Result<SectionSchema, GenerateError>;

    fn error_codes(&self) -> Result<Vec<ErrorEntry>, GenerateError>;

    /// Human-readable origin written into the artifact header.
    fn origin(&self) -> String;
}

/// Reads schema documents from the V1 schema HTTP service.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "remote")]
impl HttpSource {
    /// Source rooted at `base_url`, using the default 10 second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GenerateError> {
        Self::with_timeout(base_url, crate::loader::HTTP_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GenerateError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| GenerateError::NetworkError {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, path: &str) -> Result<serde_json::Value, GenerateError> {
        let url = format!("{}/{}", self.base_url, path);
        crate::loader::load_json_with_client(&self.client, &url)
    }
}

#[cfg(feature = "remote")]
impl SchemaSource for HttpSource {
    fn sections(&self) -> Result<Vec<String>, GenerateError> {
        let list: SectionList = decode(self.get("sections")?, "section list")?;
        Ok(list.sections)
    }

    fn section_schema(&self, section: &str) -> Result<SectionSchema, GenerateError> {
        decode(
            self.get(&format!("schema/{section}"))?,
            &format!("schema of section '{section}'"),
        )
    }

    fn error_codes(&self) -> Result<Vec<ErrorEntry>, GenerateError> {
        let table: ErrorTable = decode(self.get("errors")?, "error table")?;
        Ok(table.errors)
    }

    fn origin(&self) -> String {
        format!("{}/", self.base_url)
    }
}

/// Reads schema documents from a snapshot directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SchemaSource for DirSource {
    fn sections(&self) -> Result<Vec<String>, GenerateError> {
        let list: SectionList = decode(load_json(&self.root.join("sections.json"))?, "section list")?;
        Ok(list.sections)
    }

    fn section_schema(&self, section: &str) -> Result<SectionSchema, GenerateError> {
        let path = self.root.join("schema").join(format!("{section}.json"));
        decode(load_json(&path)?, &format!("schema of section '{section}'"))
    }

    fn error_codes(&self) -> Result<Vec<ErrorEntry>, GenerateError> {
        let table: ErrorTable = decode(load_json(&self.root.join("errors.json"))?, "error table")?;
        Ok(table.errors)
    }

    fn origin(&self) -> String {
        format!("{}/", self.root.display())
    }
}
