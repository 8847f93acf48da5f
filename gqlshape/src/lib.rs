//! # GQLShape
//!
//! GraphQL schema and operation type descriptors for code generators.
//!
//! GQLShape turns a GraphQL schema and its query/mutation documents into flat
//! field descriptors, and renders those descriptors into type expressions of
//! a target language through ordered transform tables.
//!
//! ## Features
//!
//! - **Nullability algebra** - `List`/`NonNull` wrapping flattened into flags
//! - **Input-type pruning** - emit only input objects reachable from operations
//! - **Ordered rendering** - one step table per output shape
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlshape::prelude::*;
//!
//! let config = CodegenConfig::new().filter_input_types(true);
//! let output = generate_from_sdl(sdl, &[document], &config)?;
//!
//! for object in &output.schema.objects {
//!     for field in &object.fields {
//!         println!("{}: {}", field.name, reason::accessor_type(field));
//!     }
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, resolution, collection and closure
//! - [`codegen`] - Configuration, generation pipeline and rendering

pub mod prelude;

/// Schema model, type resolution and input-type closure.
pub mod schema {
    pub use gqlshape_schema::*;
}

/// Configuration, generation and type-expression rendering.
pub mod codegen {
    pub use gqlshape_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gqlshape_codegen::{
    CodegenConfig, CodegenError, GenerationOutput, Generator, TransformPipeline,
    generate_from_files, generate_from_sdl, reason,
};
pub use gqlshape_schema::{
    FieldDescriptor, InputObjectDef, ObjectDef, OperationDescriptor, SchemaIr, TypeRef,
};
