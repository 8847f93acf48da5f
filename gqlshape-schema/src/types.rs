//! Schema and document model.
//!
//! This module contains the data structures the core consumes: schema
//! definitions with their field type references, and executable documents
//! with their operation definitions. Values are built once by the parser and
//! never mutated afterwards.

/// A GraphQL type reference as written in SDL or in a variable definition.
///
/// Nullability is a wrapper around the thing it modifies, so `[String!]` is
/// `List(NonNull(Named("String")))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Bare named type, e.g. `String`.
    Named(String),
    /// Ordered sequence of the inner type.
    List(Box<TypeRef>),
    /// The wrapped type must be present.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a type reference in a list.
    #[must_use]
    pub fn list(inner: TypeRef) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps a type reference in a non-null marker.
    #[must_use]
    pub fn non_null(inner: TypeRef) -> Self {
        Self::NonNull(Box::new(inner))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Parsed GraphQL schema: top-level type definitions in source order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Type definitions.
    pub definitions: Vec<Definition>,
}

impl Schema {
    /// Creates a schema from its definitions.
    #[must_use]
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get_definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| def.name() == name)
    }
}

/// Top-level type definition variants the core understands.
#[derive(Debug, Clone)]
pub enum Definition {
    /// Custom scalar definition.
    Scalar(ScalarDef),
    /// Object type definition.
    Object(ObjectTypeDef),
    /// Enum type definition.
    Enum(EnumTypeDef),
    /// Input object type definition.
    InputObject(InputObjectTypeDef),
}

impl Definition {
    /// Returns the name of the definition.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => &s.name,
            Self::Object(o) => &o.name,
            Self::Enum(e) => &e.name,
            Self::InputObject(i) => &i.name,
        }
    }

    /// Returns the definition kind.
    #[must_use]
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Scalar(_) => DefinitionKind::Scalar,
            Self::Object(_) => DefinitionKind::Object,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::InputObject(_) => DefinitionKind::InputObject,
        }
    }
}

/// Definition kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// `scalar`.
    Scalar,
    /// `type`.
    Object,
    /// `enum`.
    Enum,
    /// `input`.
    InputObject,
}

/// Custom scalar definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarDef {
    /// Scalar name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Field of an object or input object, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Description.
    pub description: Option<String>,
}

impl FieldDef {
    /// Creates a field definition without description.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }
}

/// Object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectTypeDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

/// Input object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectTypeDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumTypeDef {
    /// Enum name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

/// Single enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
}

/// Parsed executable document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Operation definitions in source order. Fragments are not kept.
    pub operations: Vec<OperationDef>,
}

/// Operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// `query`, including the anonymous `{ ... }` shorthand.
    Query,
    /// `mutation`.
    Mutation,
    /// `subscription`.
    Subscription,
}

impl OperationKind {
    /// Returns the GraphQL keyword for this kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

/// Operation definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDef {
    /// Operation name, `None` for anonymous operations.
    pub name: Option<String>,
    /// Operation kind.
    pub kind: OperationKind,
    /// Declared variables in order.
    pub variables: Vec<VariableDef>,
}

/// Variable declared by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDef {
    /// Variable name without the leading `$`.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl VariableDef {
    /// Creates a variable definition.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
