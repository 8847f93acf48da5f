//! GraphQL front-end adapter.
//!
//! Text parsing is done by `graphql-parser`; this module lowers its AST into
//! the core model from [`crate::types`], keeping only what the core uses.

use crate::error::ParseError;
use crate::types::{
    Definition, Document, EnumTypeDef, EnumValue, FieldDef, InputObjectTypeDef, ObjectTypeDef,
    OperationDef, OperationKind, ScalarDef, Schema, TypeRef, VariableDef,
};
use graphql_parser::query as q;
use graphql_parser::schema as s;

/// Parses a GraphQL schema from SDL text.
///
/// # Arguments
/// * `sdl` - Schema definition language source
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the SDL is syntactically invalid.
pub fn parse_schema(sdl: &str) -> Result<Schema, ParseError> {
    let document = graphql_parser::parse_schema::<String>(sdl)?;
    Ok(schema_from_ast(&document))
}

/// Parses an executable GraphQL document (queries, mutations, subscriptions).
///
/// # Errors
/// Returns `ParseError` if the document is syntactically invalid.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let document = graphql_parser::parse_query::<String>(source)?;
    Ok(document_from_ast(&document))
}

/// Lowers an already-parsed `graphql-parser` schema document.
///
/// Interfaces, unions, schema and directive definitions and type extensions
/// are skipped.
#[must_use]
pub fn schema_from_ast(document: &s::Document<'_, String>) -> Schema {
    let mut definitions = Vec::with_capacity(document.definitions.len());

    for def in &document.definitions {
        match def {
            s::Definition::TypeDefinition(type_def) => match type_def {
                s::TypeDefinition::Scalar(scalar) => {
                    definitions.push(Definition::Scalar(ScalarDef {
                        name: scalar.name.clone(),
                        description: scalar.description.clone(),
                    }))
                }
                s::TypeDefinition::Object(object) => {
                    definitions.push(Definition::Object(ObjectTypeDef {
                        name: object.name.clone(),
                        description: object.description.clone(),
                        fields: object
                            .fields
                            .iter()
                            .map(|f| FieldDef {
                                name: f.name.clone(),
                                ty: type_ref_from_ast(&f.field_type),
                                description: f.description.clone(),
                            })
                            .collect(),
                    }))
                }
                s::TypeDefinition::Enum(enum_type) => {
                    definitions.push(Definition::Enum(EnumTypeDef {
                        name: enum_type.name.clone(),
                        description: enum_type.description.clone(),
                        values: enum_type
                            .values
                            .iter()
                            .map(|v| EnumValue {
                                name: v.name.clone(),
                                description: v.description.clone(),
                            })
                            .collect(),
                    }))
                }
                s::TypeDefinition::InputObject(input) => {
                    definitions.push(Definition::InputObject(InputObjectTypeDef {
                        name: input.name.clone(),
                        description: input.description.clone(),
                        fields: input.fields.iter().map(input_value_to_field).collect(),
                    }))
                }
                s::TypeDefinition::Interface(i) => {
                    tracing::trace!("Skipping interface definition {}", i.name);
                }
                s::TypeDefinition::Union(u) => {
                    tracing::trace!("Skipping union definition {}", u.name);
                }
            },
            other => {
                tracing::trace!("Skipping non-type definition {:?}", definition_label(other));
            }
        }
    }

    Schema::new(definitions)
}

/// Lowers an already-parsed `graphql-parser` executable document.
#[must_use]
pub fn document_from_ast(document: &q::Document<'_, String>) -> Document {
    let operations = document
        .definitions
        .iter()
        .filter_map(|def| match def {
            q::Definition::Operation(op) => Some(operation_from_ast(op)),
            q::Definition::Fragment(_) => None,
        })
        .collect();

    Document { operations }
}

/// Lowers a `graphql-parser` type reference.
#[must_use]
pub fn type_ref_from_ast(ty: &s::Type<'_, String>) -> TypeRef {
    match ty {
        s::Type::NamedType(name) => TypeRef::Named(name.clone()),
        s::Type::ListType(inner) => TypeRef::list(type_ref_from_ast(inner)),
        s::Type::NonNullType(inner) => TypeRef::non_null(type_ref_from_ast(inner)),
    }
}

fn input_value_to_field(value: &s::InputValue<'_, String>) -> FieldDef {
    FieldDef {
        name: value.name.clone(),
        ty: type_ref_from_ast(&value.value_type),
        description: value.description.clone(),
    }
}

fn operation_from_ast(op: &q::OperationDefinition<'_, String>) -> OperationDef {
    let (name, kind, variables) = match op {
        q::OperationDefinition::SelectionSet(_) => (None, OperationKind::Query, &[][..]),
        q::OperationDefinition::Query(query) => (
            query.name.clone(),
            OperationKind::Query,
            query.variable_definitions.as_slice(),
        ),
        q::OperationDefinition::Mutation(mutation) => (
            mutation.name.clone(),
            OperationKind::Mutation,
            mutation.variable_definitions.as_slice(),
        ),
        q::OperationDefinition::Subscription(subscription) => (
            subscription.name.clone(),
            OperationKind::Subscription,
            subscription.variable_definitions.as_slice(),
        ),
    };

    OperationDef {
        name,
        kind,
        variables: variables
            .iter()
            .map(|v| VariableDef::new(v.name.clone(), type_ref_from_ast(&v.var_type)))
            .collect(),
    }
}

fn definition_label(def: &s::Definition<'_, String>) -> &'static str {
    match def {
        s::Definition::SchemaDefinition(_) => "schema",
        s::Definition::TypeDefinition(_) => "type",
        s::Definition::TypeExtension(_) => "extension",
        s::Definition::DirectiveDefinition(_) => "directive",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SCHEMA: &str = r#"
        scalar DateTime

        "A registered user"
        type User {
            id: ID!
            name: String
            role: Role!
            friends: [User!]
            createdAt: DateTime
        }

        enum Role {
            ADMIN
            "Regular member"
            MEMBER
        }

        input CreateUserInput {
            name: String!
            role: Role = MEMBER
        }

        interface Node {
            id: ID!
        }

        union SearchResult = User

        directive @auth on FIELD_DEFINITION
    "#;

    #[test]
    fn test_parse_simple_schema() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let names: Vec<&str> = schema.definitions.iter().map(Definition::name).collect();
        assert_eq!(names, vec!["DateTime", "User", "Role", "CreateUserInput"]);
    }

    #[test]
    fn test_parse_object_fields() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let Some(Definition::Object(user)) = schema.get_definition("User") else {
            panic!("User should be an object definition");
        };
        assert_eq!(user.description.as_deref(), Some("A registered user"));
        assert_eq!(user.fields.len(), 5);
        assert_eq!(user.fields[0].ty, TypeRef::non_null(TypeRef::named("ID")));
        assert_eq!(user.fields[3].ty.to_string(), "[User!]");
    }

    #[test]
    fn test_parse_enum_values() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let Some(Definition::Enum(role)) = schema.get_definition("Role") else {
            panic!("Role should be an enum definition");
        };
        let values: Vec<&str> = role.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(values, vec!["ADMIN", "MEMBER"]);
        assert_eq!(
            role.values[1].description.as_deref(),
            Some("Regular member")
        );
    }

    #[test]
    fn test_parse_input_fields() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let Some(Definition::InputObject(input)) = schema.get_definition("CreateUserInput") else {
            panic!("CreateUserInput should be an input definition");
        };
        assert_eq!(input.fields[0].ty.to_string(), "String!");
        assert_eq!(input.fields[1].ty, TypeRef::named("Role"));
    }

    #[test]
    fn test_parse_document_operations() {
        let source = r#"
            query GetUser($id: ID!) { user(id: $id) { ...UserParts } }
            fragment UserParts on User { name }
            mutation CreateUser($input: CreateUserInput!, $notify: Boolean) { createUser(input: $input) { id } }
            subscription OnUser { userCreated { id } }
            { viewer { id } }
        "#;

        let document = parse_document(source).expect("Failed to parse document");

        assert_eq!(document.operations.len(), 4);
        assert_eq!(document.operations[0].name.as_deref(), Some("GetUser"));
        assert_eq!(document.operations[0].kind, OperationKind::Query);
        assert_eq!(document.operations[1].kind, OperationKind::Mutation);
        assert_eq!(document.operations[1].variables.len(), 2);
        assert_eq!(document.operations[1].variables[0].name, "input");
        assert_eq!(document.operations[2].kind, OperationKind::Subscription);
        assert_eq!(document.operations[3].name, None);
        assert!(document.operations[3].variables.is_empty());
    }

    #[test]
    fn test_parse_invalid_schema() {
        let result = parse_schema("type User {");
        assert!(matches!(result, Err(ParseError::Schema(_))));
    }

    #[test]
    fn test_parse_invalid_document() {
        let result = parse_document("query Broken(");
        assert!(matches!(result, Err(ParseError::Query(_))));
    }
}
