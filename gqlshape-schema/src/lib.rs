//! # GQLShape Schema
//!
//! GraphQL schema model and type-descriptor resolution.
//!
//! This crate provides:
//! - Schema and document model, lowered from `graphql-parser`
//! - Type-reference resolution into flat field descriptors
//! - Definition and operation collection
//! - Input-type dependency closure
//! - Intermediate representation for code generation

pub mod closure;
pub mod collector;
pub mod error;
pub mod ir;
pub mod operations;
pub mod parser;
pub mod resolver;
pub mod types;
pub mod validation;

pub use closure::{DependencyClosure, filter_input_objects};
pub use collector::{DefinitionCollector, SchemaVisitor, build_ir};
pub use error::{ParseError, SchemaError};
pub use ir::{
    FieldDescriptor, InputObjectDef, ObjectDef, OperationDescriptor, ScalarMap, SchemaIr,
    TypeClass, default_scalar_map,
};
pub use operations::{OperationCollector, collect_operations};
pub use parser::{parse_document, parse_schema};
pub use resolver::{TypeResolver, resolve_type_ref};
pub use types::{
    Definition, DefinitionKind, Document, EnumTypeDef, EnumValue, FieldDef, InputObjectTypeDef,
    ObjectTypeDef, OperationDef, OperationKind, ScalarDef, Schema, TypeRef, VariableDef,
};
