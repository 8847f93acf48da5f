//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use gqlshape::prelude::*;
//! ```

// Schema model and descriptors
pub use gqlshape_schema::{
    Definition, Document, FieldDescriptor, InputObjectDef, ObjectDef, OperationDescriptor,
    OperationKind, Schema, SchemaIr, TypeClass, TypeRef, parse_document, parse_schema,
};

// Resolution and collection
pub use gqlshape_schema::{
    DefinitionCollector, DependencyClosure, SchemaVisitor, TypeResolver, build_ir,
    collect_operations, filter_input_objects, resolve_type_ref,
};

// Errors
pub use gqlshape_codegen::CodegenError;
pub use gqlshape_schema::{ParseError, SchemaError};

// Generation and rendering
pub use gqlshape_codegen::{
    CodegenConfig, GenerationOutput, Generator, Step, TransformPipeline, generate_from_files,
    generate_from_sdl, reason, render,
};

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
        enum Status { OPEN CLOSED }
        input TicketFilter { status: [Status!], assignee: UserRef }
        input UserRef { id: ID! }
        input Unused { x: Int }
        type Ticket { id: ID!, title: String, status: Status!, tags: [String!] }
        type Query { tickets(filter: TicketFilter): [Ticket!]! }
    "#;

    #[test]
    fn test_end_to_end_reason_rendering() {
        let config = CodegenConfig::new().filter_input_types(true);
        let output = generate_from_sdl(
            SCHEMA,
            &["query Tickets($filter: TicketFilter) { tickets(filter: $filter) { id } }"],
            &config,
        )
        .expect("Failed to generate");

        let ticket = output
            .schema
            .get_object("Ticket")
            .expect("Ticket should exist");
        let rendered: Vec<String> = ticket.fields.iter().map(reason::accessor_type).collect();
        assert_eq!(
            rendered,
            vec![
                "string",
                "option(string)",
                "status_enum",
                "option(array(string))"
            ]
        );

        let names: Vec<&str> = output
            .input_objects
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["TicketFilter", "UserRef"]);

        let filter = &output.input_objects[0];
        assert_eq!(
            reason::input_field_type(&filter.fields[0]),
            "Js.Nullable.t(array(string))"
        );
        assert_eq!(
            reason::labeled_argument(&output.operations[0].variables[0]),
            "~filter: option(ticketFilter)=?"
        );
        assert!(output.validate().is_ok());
    }
}
