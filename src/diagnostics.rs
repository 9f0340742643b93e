//! Non-fatal diagnostics raised while generating types.
//!
//! Generation never stops on odd schema content. Anything worth telling the
//! user about is handed to a [`DiagnosticSink`] chosen by the caller.

use std::sync::Mutex;

use serde::Serialize;

/// Code reported when a primitive type token is not in the vocabulary.
pub const UNKNOWN_PRIMITIVE: &str = "W001";

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Same diagnostic at error severity. Used when warnings fail the run.
    pub fn escalate(self) -> Self {
        Self {
            severity: Severity::Error,
            ..self
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}[{}]: {}", level, self.code, self.message)
    }
}

/// Receives diagnostics. Sections are generated in parallel, so sinks are shared
/// across threads.
pub trait DiagnosticSink: Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic) + Sync,
{
    fn report(&self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Forwards every diagnostic to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::error!(code = %diagnostic.code, "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(code = %diagnostic.code, "{}", diagnostic.message),
        }
    }
}

/// Buffers diagnostics for inspection after a run.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, in arrival order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    pub fn warnings(&self) -> usize {
        self.lock()
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A panic while pushing cannot leave the Vec half-written.
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
