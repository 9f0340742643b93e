//! V2 (OpenAPI) types through an external converter.
//!
//! Translating OpenAPI to TypeScript is left to an existing tool. This module
//! only feeds it the document, cleans up what it returns, and adds the header.

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::GenerateError;

/// Location of the public V2 OpenAPI document.
pub const DEFAULT_OPENAPI_URL: &str = "https://www.torn.com/swagger/openapi.json";

/// Turns an OpenAPI document into TypeScript declarations.
pub trait OpenApiConverter {
    fn convert(&self, document: &Value) -> Result<String, GenerateError>;
}

/// Runs an external program that reads the OpenAPI JSON on stdin and writes
/// TypeScript to stdout.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl OpenApiConverter for CommandConverter {
    fn convert(&self, document: &Value) -> Result<String, GenerateError> {
        let input = serde_json::to_vec(document)
            .map_err(|source| GenerateError::InvalidJson { source })?;

        tracing::debug!(program = %self.program, args = ?self.args, "running OpenAPI converter");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GenerateError::Converter {
                message: format!("cannot start '{}': {}", self.program, e),
            })?;

        // The child may fill its stdout pipe before it has drained stdin.
        let mut stdin = child.stdin.take().ok_or_else(|| GenerateError::Converter {
            message: "converter stdin unavailable".to_string(),
        })?;
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output().map_err(|e| GenerateError::Converter {
            message: format!("'{}' failed: {}", self.program, e),
        })?;
        let written = writer.join().map_err(|_| GenerateError::Converter {
            message: "converter input writer panicked".to_string(),
        })?;

        if !output.status.success() {
            return Err(GenerateError::Converter {
                message: format!(
                    "'{}' exited with {}: {}",
                    self.program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        written.map_err(|e| GenerateError::Converter {
            message: format!("cannot write to '{}': {}", self.program, e),
        })?;

        String::from_utf8(output.stdout).map_err(|e| GenerateError::Converter {
            message: format!("'{}' produced non-UTF-8 output: {}", self.program, e),
        })
    }
}

/// Post-process converter output.
///
/// Drops catch-all `[key: string]: any;` members, turns the empty
/// intersection emitted for nullable objects into `| null`, and strips
/// `export ` so the declarations stay module-private.
pub fn tidy_converted_types(text: &str) -> String {
    text.replace("[key: string]: any;", "")
        .replace("& ({\n        \n    } | null)", "| null")
        .replace("export ", "")
}

/// Convert `document` and prefix the V2 header. `origin` is where the document came from.
pub fn generate_v2_types(
    document: &Value,
    origin: &str,
    converter: &dyn OpenApiConverter,
) -> Result<String, GenerateError> {
    let converted = converter.convert(document)?;
    tracing::info!(bytes = converted.len(), "converted OpenAPI document");

    Ok([
        "// Auto-generated TypeScript types for Torn API V2".to_string(),
        format!("// Generated from: {origin}"),
        String::new(),
        tidy_converted_types(&converted),
    ]
    .join("\n"))
}

/// Final artifact: V1 text, then V2 text.
pub fn combine_artifacts(v1: &str, v2: Option<&str>) -> String {
    match v2 {
        Some(v2) => [v1, v2].join("\n"),
        None => v1.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed(&'static str);

    impl OpenApiConverter for Fixed {
        fn convert(&self, _document: &Value) -> Result<String, GenerateError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn tidy_removes_catch_all_members() {
        let text = "export interface A {\n    id: number;\n    [key: string]: any;\n}";
        assert_eq!(
            tidy_converted_types(text),
            "interface A {\n    id: number;\n    \n}"
        );
    }

    #[test]
    fn tidy_rewrites_nullable_intersection() {
        let text = "type B = C & ({\n        \n    } | null);";
        assert_eq!(tidy_converted_types(text), "type B = C | null;");
    }

    #[test]
    fn v2_header() {
        let out = generate_v2_types(
            &json!({ "openapi": "3.0.0" }),
            DEFAULT_OPENAPI_URL,
            &Fixed("export type Id = number;"),
        )
        .unwrap();
        assert_eq!(
            out,
            "// Auto-generated TypeScript types for Torn API V2\n\
             // Generated from: https://www.torn.com/swagger/openapi.json\n\
             \n\
             type Id = number;"
        );
    }

    #[test]
    fn combine() {
        assert_eq!(combine_artifacts("a", Some("b")), "a\nb");
        assert_eq!(combine_artifacts("a", None), "a");
    }

    #[cfg(unix)]
    #[test]
    fn command_converter_pipes_document() {
        let converter = CommandConverter::new("sh").args(["-c", "cat >/dev/null; echo 'export type X = 1;'"]);
        let out = converter.convert(&json!({ "openapi": "3.0.0" })).unwrap();
        assert_eq!(out.trim(), "export type X = 1;");
    }

    #[cfg(unix)]
    #[test]
    fn command_converter_failure_carries_stderr() {
        let converter = CommandConverter::new("sh").args(["-c", "cat >/dev/null; echo boom >&2; exit 3"]);
        let err = converter.convert(&json!({})).unwrap_err();
        assert!(matches!(err, GenerateError::Converter { .. }));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn command_converter_missing_program() {
        let converter = CommandConverter::new("definitely-not-a-real-converter-binary");
        let err = converter.convert(&json!({})).unwrap_err();
        assert!(err.to_string().contains("cannot start"));
    }
}
