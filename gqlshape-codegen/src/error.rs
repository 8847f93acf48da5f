//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema or document parse error.
    #[error("schema parse error: {0}")]
    Parse(#[from] gqlshape_schema::ParseError),

    /// Schema reference error.
    #[error("schema error: {0}")]
    Schema(#[from] gqlshape_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
