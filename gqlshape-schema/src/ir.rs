//! Intermediate representation for code generation.
//!
//! This module provides a flattened, resolved representation of the schema
//! that is easier to use for code generation: every field carries a
//! [`FieldDescriptor`] instead of a nested [`TypeRef`](crate::types::TypeRef).

use crate::resolver::TypeResolver;
use crate::types::{EnumTypeDef, OperationKind, ScalarDef};
use std::collections::{BTreeMap, HashSet};

/// Mapping from GraphQL scalar name to target type expression.
pub type ScalarMap = BTreeMap<String, String>;

/// Names of all enum types declared in a schema.
pub type EnumNames = HashSet<String>;

/// Built-in GraphQL scalars and their default target expressions.
pub const DEFAULT_SCALARS: [(&str, &str); 5] = [
    ("String", "string"),
    ("Int", "int"),
    ("Float", "float"),
    ("Boolean", "bool"),
    ("ID", "string"),
];

/// Returns the default scalar map.
#[must_use]
pub fn default_scalar_map() -> ScalarMap {
    DEFAULT_SCALARS
        .iter()
        .map(|(name, target)| ((*name).to_string(), (*target).to_string()))
        .collect()
}

/// Flat, resolved description of one field's or variable's type.
///
/// `is_nullable_list` only carries meaning when `is_list` is set. At most one
/// of `is_enum` and `scalar` is set; when neither is, the field is
/// object-typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field or variable name.
    pub name: String,
    /// Innermost named type.
    pub type_name: String,
    /// Whether the type is wrapped in a list.
    pub is_list: bool,
    /// Whether the list itself may be null.
    pub is_nullable_list: bool,
    /// Whether the named type (or list element) may be null.
    pub is_nullable: bool,
    /// Whether the named type is an enum.
    pub is_enum: bool,
    /// Target expression for scalar-typed fields.
    pub scalar: Option<String>,
}

impl FieldDescriptor {
    /// Returns true if the field is neither enum nor scalar typed.
    #[must_use]
    pub fn is_object_typed(&self) -> bool {
        !self.is_enum && self.scalar.is_none()
    }

    /// Returns true if the field is scalar typed.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.scalar.is_some()
    }

    /// Returns true if the value may be omitted: either the element or the
    /// list around it is nullable.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.is_nullable || (self.is_list && self.is_nullable_list)
    }

    /// Returns the starting point for rendering: the scalar mapping for
    /// scalar fields, otherwise the bare type name.
    #[must_use]
    pub fn base_type(&self) -> &str {
        self.scalar.as_deref().unwrap_or(&self.type_name)
    }

    /// Returns the exclusive classification of the named type.
    #[must_use]
    pub fn type_class(&self) -> TypeClass<'_> {
        match (&self.scalar, self.is_enum) {
            (Some(target), _) => TypeClass::Scalar(target),
            (None, true) => TypeClass::Enum,
            (None, false) => TypeClass::Object,
        }
    }
}

/// Classification of a descriptor's named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass<'a> {
    /// Scalar with its target expression.
    Scalar(&'a str),
    /// Enum.
    Enum,
    /// Object or input object (or unknown).
    Object,
}

/// Object type with resolved fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Resolved fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

/// Input object type with resolved fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Resolved fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

/// Operation with resolved variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name, `None` for anonymous operations.
    pub name: Option<String>,
    /// Operation kind.
    pub kind: OperationKind,
    /// Resolved variables in declaration order.
    pub variables: Vec<FieldDescriptor>,
}

/// Intermediate representation of a schema for one generation run.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// Custom scalar definitions.
    pub scalars: Vec<ScalarDef>,
    /// Enum definitions.
    pub enums: Vec<EnumTypeDef>,
    /// Object types with resolved fields.
    pub objects: Vec<ObjectDef>,
    /// Input object types with resolved fields.
    pub input_objects: Vec<InputObjectDef>,
    /// Scalar map used for resolution.
    pub scalar_map: ScalarMap,
    enum_names: EnumNames,
}

impl SchemaIr {
    pub(crate) fn new(
        scalars: Vec<ScalarDef>,
        enums: Vec<EnumTypeDef>,
        objects: Vec<ObjectDef>,
        input_objects: Vec<InputObjectDef>,
        scalar_map: ScalarMap,
        enum_names: EnumNames,
    ) -> Self {
        Self {
            scalars,
            enums,
            objects,
            input_objects,
            scalar_map,
            enum_names,
        }
    }

    /// Returns the names of all enums in the schema.
    #[must_use]
    pub fn enum_names(&self) -> &EnumNames {
        &self.enum_names
    }

    /// Returns a resolver over this schema's scalar map and enum names.
    #[must_use]
    pub fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(&self.scalar_map, &self.enum_names)
    }

    /// Gets an object type by name.
    #[must_use]
    pub fn get_object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Gets an input object type by name.
    #[must_use]
    pub fn get_input_object(&self, name: &str) -> Option<&InputObjectDef> {
        self.input_objects.iter().find(|i| i.name == name)
    }
}
