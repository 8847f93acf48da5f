//! Error types for schema parsing and reference validation.

use thiserror::Error;

/// Error type for schema and document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// GraphQL schema (SDL) syntax error.
    #[error("schema syntax error: {0}")]
    Schema(#[from] graphql_parser::schema::ParseError),

    /// GraphQL executable document syntax error.
    #[error("document syntax error: {0}")]
    Query(#[from] graphql_parser::query::ParseError),
}

/// Error type for reference validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A field or variable names a type that is neither a scalar, an enum,
    /// an object nor an input object.
    #[error("unknown type '{type_name}' referenced by '{owner}.{field}'")]
    UnresolvedType {
        /// Definition or operation that owns the field.
        owner: String,
        /// Field or variable name.
        field: String,
        /// Referenced type name.
        type_name: String,
    },
}

impl SchemaError {
    /// Creates an unresolved type error.
    pub fn unresolved(
        owner: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnresolvedType {
            owner: owner.into(),
            field: field.into(),
            type_name: type_name.into(),
        }
    }
}
