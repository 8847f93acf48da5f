//! Generation pipeline.
//!
//! Runs definition collection, field resolution, operation collection and the
//! optional input-type closure for a single generation run.

use crate::config::CodegenConfig;
use crate::error::CodegenError;
use gqlshape_schema::validation::validate_references;
use gqlshape_schema::{
    DefinitionCollector, Document, InputObjectDef, OperationDescriptor, OperationKind, ScalarMap,
    Schema, SchemaIr, collect_operations, filter_input_objects,
};

/// Result of one generation run, consumed by the emission layer.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Full schema IR.
    pub schema: SchemaIr,
    /// Operations across all documents in document order.
    pub operations: Vec<OperationDescriptor>,
    /// Input objects to emit: the closure when filtering is enabled,
    /// otherwise every input object of the schema.
    pub input_objects: Vec<InputObjectDef>,
    /// Scalar mappings supplied by the configuration, including entries
    /// that repeat a built-in default.
    pub custom_scalars: ScalarMap,
}

impl GenerationOutput {
    /// Query operations.
    pub fn queries(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations_of(OperationKind::Query)
    }

    /// Mutation operations.
    pub fn mutations(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations_of(OperationKind::Mutation)
    }

    /// Subscription operations.
    pub fn subscriptions(&self) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations_of(OperationKind::Subscription)
    }

    /// Operations of the given kind.
    pub fn operations_of(&self, kind: OperationKind) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.iter().filter(move |op| op.kind == kind)
    }

    /// Checks that every field and variable type can be rendered.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` wrapping the first unknown reference.
    pub fn validate(&self) -> Result<(), CodegenError> {
        Ok(validate_references(&self.schema, &self.operations)?)
    }
}

/// Main generator.
pub struct Generator<'a> {
    config: &'a CodegenConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: &'a CodegenConfig) -> Self {
        Self { config }
    }

    /// Generates descriptors for a schema and its documents.
    #[must_use]
    pub fn generate(&self, schema: &Schema, documents: &[Document]) -> GenerationOutput {
        let ir = DefinitionCollector::collect(schema).finish(self.config.scalar_map());
        let operations = collect_operations(documents, ir.resolver());

        let input_objects = if self.config.filter_input_types {
            filter_input_objects(&ir.input_objects, &operations)
        } else {
            ir.input_objects.clone()
        };

        tracing::debug!(
            "Generated {} objects, {} input objects, {} operations",
            ir.objects.len(),
            input_objects.len(),
            operations.len()
        );

        GenerationOutput {
            schema: ir,
            operations,
            input_objects,
            custom_scalars: self.config.scalars.clone(),
        }
    }
}
