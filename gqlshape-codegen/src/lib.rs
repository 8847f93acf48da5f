//! # GQLShape Codegen
//!
//! Type descriptors and type-expression rendering from GraphQL schemas.
//!
//! This crate provides:
//! - Generation configuration
//! - The generation pipeline from schema and documents to descriptors
//! - An ordered transform pipeline for rendering descriptors
//! - Reason step tables and naming rules

pub mod config;
pub mod error;
pub mod generator;
pub mod pipeline;
pub mod reason;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use generator::{GenerationOutput, Generator};
pub use pipeline::{Step, TransformPipeline, render};

use std::path::Path;

/// Generates descriptors from schema SDL and document sources.
///
/// # Arguments
/// * `sdl` - Schema definition language source
/// * `documents` - Executable document sources, in order
/// * `config` - Generation configuration
///
/// # Errors
/// Returns `CodegenError` if the schema or any document fails to parse.
pub fn generate_from_sdl(
    sdl: &str,
    documents: &[&str],
    config: &CodegenConfig,
) -> Result<GenerationOutput, CodegenError> {
    let schema = gqlshape_schema::parse_schema(sdl)?;
    let documents = documents
        .iter()
        .map(|source| gqlshape_schema::parse_document(source))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Generator::new(config).generate(&schema, &documents))
}

/// Generates descriptors from a schema file and document files.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_files<P: AsRef<Path>>(
    schema_path: &Path,
    document_paths: &[P],
    config: &CodegenConfig,
) -> Result<GenerationOutput, CodegenError> {
    let sdl = std::fs::read_to_string(schema_path)?;
    let sources = document_paths
        .iter()
        .map(std::fs::read_to_string)
        .collect::<Result<Vec<_>, _>>()?;
    let sources: Vec<&str> = sources.iter().map(String::as_str).collect();
    generate_from_sdl(&sdl, &sources, config)
}
