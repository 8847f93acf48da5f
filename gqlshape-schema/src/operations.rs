//! Operation collection.

use crate::ir::OperationDescriptor;
use crate::resolver::TypeResolver;
use crate::types::{Document, OperationDef};

/// Collects operation descriptors from executable documents.
///
/// Operations are kept in document order, then in source order within each
/// document. Duplicate names are not merged.
#[derive(Debug)]
pub struct OperationCollector<'r> {
    resolver: TypeResolver<'r>,
    operations: Vec<OperationDescriptor>,
}

impl<'r> OperationCollector<'r> {
    /// Creates a collector resolving variables with the given resolver.
    #[must_use]
    pub fn new(resolver: TypeResolver<'r>) -> Self {
        Self {
            resolver,
            operations: Vec::new(),
        }
    }

    /// Adds every operation of a document.
    pub fn visit_document(&mut self, document: &Document) {
        for op in &document.operations {
            self.visit_operation(op);
        }
    }

    /// Adds a single operation.
    pub fn visit_operation(&mut self, op: &OperationDef) {
        let variables = op
            .variables
            .iter()
            .map(|v| self.resolver.resolve_variable(v))
            .collect();

        self.operations.push(OperationDescriptor {
            name: op.name.clone(),
            kind: op.kind,
            variables,
        });
    }

    /// Returns the collected operations.
    #[must_use]
    pub fn finish(self) -> Vec<OperationDescriptor> {
        tracing::debug!("Collected {} operations", self.operations.len());
        self.operations
    }
}

/// Collects the operations of all documents.
#[must_use]
pub fn collect_operations(
    documents: &[Document],
    resolver: TypeResolver<'_>,
) -> Vec<OperationDescriptor> {
    let mut collector = OperationCollector::new(resolver);
    for document in documents {
        collector.visit_document(document);
    }
    collector.finish()
}
