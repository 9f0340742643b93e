//! JSON document loading from files, strings, and HTTP URLs.

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::GenerateError;

/// Default timeout for HTTP requests (10 seconds).
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a JSON document from a file path.
///
/// # Errors
///
/// Returns `GenerateError::FileNotFound` if the file doesn't exist,
/// or `GenerateError::InvalidJson` if the file isn't valid JSON.
pub fn load_json(path: &Path) -> Result<Value, GenerateError> {
    if !path.exists() {
        return Err(GenerateError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_json_str(&content)
}

/// Load a JSON document from a string.
pub fn load_json_str(content: &str) -> Result<Value, GenerateError> {
    serde_json::from_str(content).map_err(|source| GenerateError::InvalidJson { source })
}

/// Load a JSON document from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default). Non-success HTTP
/// statuses are errors.
#[cfg(feature = "remote")]
pub fn load_json_url(url: &str, timeout: Duration) -> Result<Value, GenerateError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| GenerateError::NetworkError {
            url: url.to_string(),
            source,
        })?;
    load_json_with_client(&client, url)
}

/// Like [`load_json_url`], reusing an existing client.
#[cfg(feature = "remote")]
pub fn load_json_with_client(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Value, GenerateError> {
    tracing::debug!(url, "fetching");

    let response = client
        .get(url)
        .send()
        .map_err(|source| GenerateError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    // Check for HTTP errors before parsing
    let response = response
        .error_for_status()
        .map_err(|source| GenerateError::NetworkError {
            url: url.to_string(),
            source,
        })?;

    response
        .json()
        .map_err(|source| GenerateError::NetworkError {
            url: url.to_string(),
            source,
        })
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a JSON document from a file path or URL.
///
/// URL loading requires the `remote` feature.
pub fn load_json_auto(source: &str, timeout: Duration) -> Result<Value, GenerateError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_json_url(source, timeout)
        }
        #[cfg(not(feature = "remote"))]
        {
            let _ = timeout;
            Err(GenerateError::RemoteDisabled {
                url: source.to_string(),
            })
        }
    } else {
        load_json(Path::new(source))
    }
}

/// Decode a loaded document into a typed value. `what` names the document in errors.
pub fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, GenerateError> {
    serde_json::from_value(value).map_err(|source| GenerateError::InvalidDocument {
        what: what.to_string(),
        source,
    })
}
