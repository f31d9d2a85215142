//! Warning diagnostics emitted for lossy conversions.
//!
//! The simplifier never fails. The two rewrites that discard information the
//! caller may care about (record collapse and the unsupported-kind fallback)
//! report through a [`DiagnosticSink`] instead. The sink never influences the
//! returned schema.

use serde::{Deserialize, Serialize};

/// A warning about a lossy rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Location of the rewritten node in the source tree (e.g. "#/fields/tags").
    pub path: String,
    /// Classification of the warning.
    pub kind: DiagnosticKind,
    /// Human-readable description of what was lost.
    pub message: String,
}

/// Classification of simplifier diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// An arbitrary-key record was collapsed into an empty object.
    RecordCollapsed,
    /// A kind outside the supported set fell back to a plain string.
    UnsupportedKind {
        /// Host library identifier of the kind (e.g. "ZodBigInt").
        name: String,
    },
}

impl Diagnostic {
    pub(crate) fn record_collapsed(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: DiagnosticKind::RecordCollapsed,
            message: "ZodRecord is not supported by structured output; it was replaced with an \
                      empty object. Redefine the record as an object with explicit fields."
                .to_string(),
        }
    }

    pub(crate) fn unsupported_kind(path: &str, name: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: DiagnosticKind::UnsupportedKind {
                name: name.to_string(),
            },
            message: format!("Unsupported schema kind {name}; falling back to a plain string."),
        }
    }
}

/// Destination for diagnostics produced during simplification.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to `tracing::warn!`. This is the default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(path = %diagnostic.path, "{}", diagnostic.message);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
