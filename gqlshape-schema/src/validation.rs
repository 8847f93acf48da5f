//! Reference validation utilities.
//!
//! The resolver classifies any unknown type name as object-typed. These
//! functions let a caller surface such references before emission. They are
//! never run implicitly and do not check overall schema well-formedness.

use crate::error::SchemaError;
use crate::ir::{FieldDescriptor, OperationDescriptor, SchemaIr};
use std::collections::HashSet;

/// Returns every field and variable whose object-typed name matches no
/// object or input object in the schema.
///
/// A custom scalar declared in the schema but missing from the scalar map
/// resolves as object-typed and is reported here too.
#[must_use]
pub fn unresolved_references(
    ir: &SchemaIr,
    operations: &[OperationDescriptor],
) -> Vec<SchemaError> {
    let known: HashSet<&str> = ir
        .objects
        .iter()
        .map(|o| o.name.as_str())
        .chain(ir.input_objects.iter().map(|i| i.name.as_str()))
        .collect();

    let mut errors = Vec::new();
    let mut check = |owner: &str, field: &FieldDescriptor| {
        if field.is_object_typed() && !known.contains(field.type_name.as_str()) {
            errors.push(SchemaError::unresolved(
                owner,
                field.name.as_str(),
                field.type_name.as_str(),
            ));
        }
    };

    for object in &ir.objects {
        object.fields.iter().for_each(|f| check(object.name.as_str(), f));
    }
    for input in &ir.input_objects {
        input.fields.iter().for_each(|f| check(input.name.as_str(), f));
    }
    for op in operations {
        let owner = op.name.as_deref().unwrap_or(op.kind.keyword());
        op.variables.iter().for_each(|v| check(owner, v));
    }

    errors
}

/// Validates that every type reference can be rendered.
///
/// # Errors
/// Returns the first `SchemaError::UnresolvedType` found.
pub fn validate_references(
    ir: &SchemaIr,
    operations: &[OperationDescriptor],
) -> Result<(), SchemaError> {
    match unresolved_references(ir, operations).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
