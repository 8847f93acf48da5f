//! Type-reference resolution.
//!
//! Turns a nested [`TypeRef`] into a flat [`FieldDescriptor`]. The wrapper
//! chain is folded outward-in while tracking the immediately enclosing
//! wrapper: a `NonNull` sets no flag itself, it makes whatever it wraps
//! non-nullable.

use crate::ir::{EnumNames, FieldDescriptor, ScalarMap};
use crate::types::{FieldDef, TypeRef, VariableDef};

/// Resolves a type reference against a scalar map and a set of enum names.
///
/// Enum classification wins over a scalar mapping for the same name, so a
/// descriptor never has both `is_enum` and `scalar` set.
#[must_use]
pub fn resolve_type_ref(
    ty: &TypeRef,
    name: &str,
    scalars: &ScalarMap,
    enums: &EnumNames,
) -> FieldDescriptor {
    let shape = fold(ty, Enclosing::Root, Shape::default());
    let is_enum = enums.contains(shape.type_name);
    let scalar = if is_enum {
        None
    } else {
        scalars.get(shape.type_name).cloned()
    };

    FieldDescriptor {
        name: name.to_string(),
        type_name: shape.type_name.to_string(),
        is_list: shape.is_list,
        is_nullable_list: shape.is_nullable_list,
        is_nullable: shape.is_nullable,
        is_enum,
        scalar,
    }
}

/// Resolver bound to one schema's scalar map and enum names.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    scalars: &'a ScalarMap,
    enums: &'a EnumNames,
}

impl<'a> TypeResolver<'a> {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(scalars: &'a ScalarMap, enums: &'a EnumNames) -> Self {
        Self { scalars, enums }
    }

    /// Resolves a type reference under the given field name.
    #[must_use]
    pub fn resolve(&self, ty: &TypeRef, name: &str) -> FieldDescriptor {
        resolve_type_ref(ty, name, self.scalars, self.enums)
    }

    /// Resolves an object or input object field.
    #[must_use]
    pub fn resolve_field(&self, field: &FieldDef) -> FieldDescriptor {
        self.resolve(&field.ty, &field.name)
    }

    /// Resolves an operation variable.
    #[must_use]
    pub fn resolve_variable(&self, variable: &VariableDef) -> FieldDescriptor {
        self.resolve(&variable.ty, &variable.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Enclosing {
    Root,
    List,
    NonNull,
}

#[derive(Debug, Clone, Copy)]
struct Shape<'t> {
    type_name: &'t str,
    is_list: bool,
    is_nullable_list: bool,
    is_nullable: bool,
}

impl Default for Shape<'_> {
    fn default() -> Self {
        Self {
            type_name: "",
            is_list: false,
            is_nullable_list: false,
            is_nullable: true,
        }
    }
}

fn fold<'t>(ty: &'t TypeRef, enclosing: Enclosing, shape: Shape<'t>) -> Shape<'t> {
    let nullable = enclosing != Enclosing::NonNull;
    match ty {
        TypeRef::List(inner) => fold(
            inner,
            Enclosing::List,
            Shape {
                is_list: true,
                is_nullable_list: nullable,
                ..shape
            },
        ),
        TypeRef::Named(name) => Shape {
            type_name: name,
            is_nullable: nullable,
            ..shape
        },
        TypeRef::NonNull(inner) => fold(inner, Enclosing::NonNull, shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::default_scalar_map;

    fn enums() -> EnumNames {
        ["Enum".to_string()].into_iter().collect()
    }

    fn named(name: &str) -> TypeRef {
        TypeRef::named(name)
    }

    fn resolve(ty: &TypeRef) -> FieldDescriptor {
        resolve_type_ref(ty, "field", &default_scalar_map(), &enums())
    }

    fn flags(field: &FieldDescriptor) -> (bool, bool, bool) {
        (field.is_list, field.is_nullable_list, field.is_nullable)
    }

    #[test]
    fn test_nullable_named() {
        let field = resolve(&named("String"));
        assert_eq!(flags(&field), (false, false, true));
        assert_eq!(field.type_name, "String");
        assert_eq!(field.scalar.as_deref(), Some("string"));
        assert!(!field.is_enum);
    }

    #[test]
    fn test_non_null_named() {
        let field = resolve(&TypeRef::non_null(named("String")));
        assert_eq!(flags(&field), (false, false, false));
    }

    #[test]
    fn test_nullable_list_of_nullable() {
        let field = resolve(&TypeRef::list(named("String")));
        assert_eq!(flags(&field), (true, true, true));
    }

    #[test]
    fn test_non_null_list_of_nullable() {
        let field = resolve(&TypeRef::non_null(TypeRef::list(named("String"))));
        assert_eq!(flags(&field), (true, false, true));
    }

    #[test]
    fn test_nullable_list_of_non_null() {
        let field = resolve(&TypeRef::list(TypeRef::non_null(named("String"))));
        assert_eq!(flags(&field), (true, true, false));
    }

    #[test]
    fn test_non_null_list_of_non_null() {
        let field = resolve(&TypeRef::non_null(TypeRef::list(TypeRef::non_null(
            named("String"),
        ))));
        assert_eq!(flags(&field), (true, false, false));
    }

    #[test]
    fn test_nested_list_takes_innermost_list_nullability() {
        // [[String]!]
        let field = resolve(&TypeRef::list(TypeRef::non_null(TypeRef::list(named(
            "String",
        )))));
        assert_eq!(flags(&field), (true, false, true));

        // [[String]]!
        let field = resolve(&TypeRef::non_null(TypeRef::list(TypeRef::list(named(
            "String",
        )))));
        assert_eq!(flags(&field), (true, true, true));

        // [[String!]]
        let field = resolve(&TypeRef::list(TypeRef::list(TypeRef::non_null(named(
            "String",
        )))));
        assert_eq!(flags(&field), (true, true, false));
    }

    #[test]
    fn test_enum_classification() {
        let field = resolve(&TypeRef::non_null(named("Enum")));
        assert!(field.is_enum);
        assert_eq!(field.scalar, None);
        assert_eq!(field.type_name, "Enum");
    }

    #[test]
    fn test_object_classification() {
        let field = resolve(&TypeRef::list(named("TestType")));
        assert!(!field.is_enum);
        assert_eq!(field.scalar, None);
        assert!(field.is_object_typed());
    }

    #[test]
    fn test_enum_wins_over_scalar_mapping() {
        let mut scalars = default_scalar_map();
        scalars.insert("Enum".to_string(), "string".to_string());

        let field = resolve_type_ref(&named("Enum"), "field", &scalars, &enums());
        assert!(field.is_enum);
        assert_eq!(field.scalar, None);
    }

    #[test]
    fn test_custom_scalar_mapping() {
        let mut scalars = default_scalar_map();
        scalars.insert("DateTime".to_string(), "Js.Date.t".to_string());

        let field = resolve_type_ref(&named("DateTime"), "createdAt", &scalars, &enums());
        assert_eq!(field.scalar.as_deref(), Some("Js.Date.t"));
        assert_eq!(field.name, "createdAt");
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::non_null(named("Enum"))));
        let scalars = default_scalar_map();
        let enums = enums();
        let resolver = TypeResolver::new(&scalars, &enums);

        assert_eq!(
            resolver.resolve(&ty, "values"),
            resolver.resolve(&ty, "values")
        );
    }

    #[test]
    fn test_classification_is_exclusive() {
        let scalars = default_scalar_map();
        let enums = enums();
        let resolver = TypeResolver::new(&scalars, &enums);
        let types = ["String", "Int", "Float", "Boolean", "ID", "Enum", "TestType"];

        for name in types {
            for ty in [
                named(name),
                TypeRef::non_null(named(name)),
                TypeRef::list(named(name)),
                TypeRef::non_null(TypeRef::list(TypeRef::non_null(named(name)))),
            ] {
                let field = resolver.resolve(&ty, "f");
                assert!(!(field.is_enum && field.scalar.is_some()), "{ty}");
            }
        }
    }

    #[test]
    fn test_resolve_field_and_variable() {
        let scalars = default_scalar_map();
        let enums = enums();
        let resolver = TypeResolver::new(&scalars, &enums);

        let def = FieldDef::new("count", TypeRef::non_null(named("Int")));
        let field = resolver.resolve_field(&def);
        assert_eq!(field.name, "count");
        assert_eq!(field.scalar.as_deref(), Some("int"));

        let variable = resolver.resolve_variable(&VariableDef::new("kind", named("Enum")));
        assert_eq!(variable.name, "kind");
        assert!(variable.is_enum);
    }
}
