//! Error types for schema loading and relaxation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected an object schema, found {kind}")]
    NotAnObject { kind: String },
}
