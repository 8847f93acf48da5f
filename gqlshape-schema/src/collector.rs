//! Schema definition collection.
//!
//! Definitions are classified in a single streaming pass. Field resolution
//! happens afterwards in [`DefinitionCollector::finish`], once the full set of
//! enum names is known, so fields may reference types declared later.

use crate::ir::{EnumNames, InputObjectDef, ObjectDef, ScalarMap, SchemaIr};
use crate::types::{
    Definition, EnumTypeDef, InputObjectTypeDef, ObjectTypeDef, ScalarDef, Schema,
};

/// Visitor over top-level schema definitions.
pub trait SchemaVisitor<'a> {
    /// Called for each scalar definition.
    fn visit_scalar(&mut self, _def: &'a ScalarDef) {}

    /// Called for each object type definition.
    fn visit_object(&mut self, _def: &'a ObjectTypeDef) {}

    /// Called for each enum definition.
    fn visit_enum(&mut self, _def: &'a EnumTypeDef) {}

    /// Called for each input object definition.
    fn visit_input_object(&mut self, _def: &'a InputObjectTypeDef) {}
}

/// Drives a visitor over a schema's definitions in source order.
pub fn walk_schema<'a, V: SchemaVisitor<'a>>(schema: &'a Schema, visitor: &mut V) {
    for def in &schema.definitions {
        walk_definition(def, visitor);
    }
}

/// Dispatches a single definition to the matching visitor method.
pub fn walk_definition<'a, V: SchemaVisitor<'a>>(def: &'a Definition, visitor: &mut V) {
    match def {
        Definition::Scalar(s) => visitor.visit_scalar(s),
        Definition::Object(o) => visitor.visit_object(o),
        Definition::Enum(e) => visitor.visit_enum(e),
        Definition::InputObject(i) => visitor.visit_input_object(i),
    }
}

/// Collects definitions into ordered per-kind sequences.
#[derive(Debug, Default)]
pub struct DefinitionCollector<'a> {
    scalars: Vec<&'a ScalarDef>,
    objects: Vec<&'a ObjectTypeDef>,
    enums: Vec<&'a EnumTypeDef>,
    input_objects: Vec<&'a InputObjectTypeDef>,
}

impl<'a> DefinitionCollector<'a> {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every definition of a schema.
    #[must_use]
    pub fn collect(schema: &'a Schema) -> Self {
        let mut collector = Self::new();
        walk_schema(schema, &mut collector);
        collector
    }

    /// Collected scalar definitions.
    #[must_use]
    pub fn scalars(&self) -> &[&'a ScalarDef] {
        &self.scalars
    }

    /// Collected object definitions.
    #[must_use]
    pub fn objects(&self) -> &[&'a ObjectTypeDef] {
        &self.objects
    }

    /// Collected enum definitions.
    #[must_use]
    pub fn enums(&self) -> &[&'a EnumTypeDef] {
        &self.enums
    }

    /// Collected input object definitions.
    #[must_use]
    pub fn input_objects(&self) -> &[&'a InputObjectTypeDef] {
        &self.input_objects
    }

    /// Resolves all collected fields and builds the schema IR.
    #[must_use]
    pub fn finish(self, scalar_map: ScalarMap) -> SchemaIr {
        let enum_names: EnumNames = self.enums.iter().map(|e| e.name.clone()).collect();

        let (objects, input_objects) = {
            let resolver = crate::resolver::TypeResolver::new(&scalar_map, &enum_names);

            let objects = self
                .objects
                .iter()
                .map(|o| ObjectDef {
                    name: o.name.clone(),
                    description: o.description.clone(),
                    fields: o.fields.iter().map(|f| resolver.resolve_field(f)).collect(),
                })
                .collect::<Vec<_>>();

            let input_objects = self
                .input_objects
                .iter()
                .map(|i| InputObjectDef {
                    name: i.name.clone(),
                    description: i.description.clone(),
                    fields: i.fields.iter().map(|f| resolver.resolve_field(f)).collect(),
                })
                .collect::<Vec<_>>();

            (objects, input_objects)
        };

        tracing::debug!(
            "Collected {} scalars, {} enums, {} objects, {} input objects",
            self.scalars.len(),
            self.enums.len(),
            objects.len(),
            input_objects.len()
        );

        SchemaIr::new(
            self.scalars.into_iter().cloned().collect(),
            self.enums.into_iter().cloned().collect(),
            objects,
            input_objects,
            scalar_map,
            enum_names,
        )
    }
}

impl<'a> SchemaVisitor<'a> for DefinitionCollector<'a> {
    fn visit_scalar(&mut self, def: &'a ScalarDef) {
        self.scalars.push(def);
    }

    fn visit_object(&mut self, def: &'a ObjectTypeDef) {
        self.objects.push(def);
    }

    fn visit_enum(&mut self, def: &'a EnumTypeDef) {
        self.enums.push(def);
    }

    fn visit_input_object(&mut self, def: &'a InputObjectTypeDef) {
        self.input_objects.push(def);
    }
}

/// Builds the schema IR in one call.
#[must_use]
pub fn build_ir(schema: &Schema, scalar_map: ScalarMap) -> SchemaIr {
    DefinitionCollector::collect(schema).finish(scalar_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::default_scalar_map;
    use crate::parser::parse_schema;

    #[test]
    fn test_collect_preserves_order_per_kind() {
        let schema = parse_schema(
            r#"
            type B { id: ID }
            enum Second { X }
            input In2 { a: Int }
            type A { id: ID }
            scalar Json
            enum First { Y }
            input In1 { b: Int }
            "#,
        )
        .expect("Failed to parse");

        let collector = DefinitionCollector::collect(&schema);

        let objects: Vec<&str> = collector.objects().iter().map(|o| o.name.as_str()).collect();
        let enums: Vec<&str> = collector.enums().iter().map(|e| e.name.as_str()).collect();
        let inputs: Vec<&str> = collector
            .input_objects()
            .iter()
            .map(|i| i.name.as_str())
            .collect();

        assert_eq!(objects, vec!["B", "A"]);
        assert_eq!(enums, vec!["Second", "First"]);
        assert_eq!(inputs, vec!["In2", "In1"]);
        assert_eq!(collector.scalars().len(), 1);
    }

    #[test]
    fn test_forward_enum_reference_is_classified() {
        let schema = parse_schema(
            r#"
            type Post { status: Status! }
            enum Status { DRAFT PUBLISHED }
            "#,
        )
        .expect("Failed to parse");

        let ir = build_ir(&schema, default_scalar_map());
        let post = ir.get_object("Post").expect("Post should exist");

        assert!(post.fields[0].is_enum);
        assert!(!post.fields[0].is_nullable);
        assert!(ir.enum_names().contains("Status"));
    }

    #[test]
    fn test_build_ir_resolves_input_fields() {
        let schema = parse_schema(
            r#"
            scalar DateTime
            input Filter { since: DateTime, tags: [String!]! }
            "#,
        )
        .expect("Failed to parse");

        let mut scalars = default_scalar_map();
        scalars.insert("DateTime".to_string(), "Js.Date.t".to_string());
        let ir = build_ir(&schema, scalars);

        let filter = ir.get_input_object("Filter").expect("Filter should exist");
        assert_eq!(filter.fields[0].scalar.as_deref(), Some("Js.Date.t"));
        assert!(filter.fields[1].is_list);
        assert!(!filter.fields[1].is_nullable_list);
        assert!(!filter.fields[1].is_nullable);
        assert_eq!(ir.scalars[0].name, "DateTime");
    }

    #[test]
    fn test_custom_visitor() {
        #[derive(Default)]
        struct Counter {
            enums: usize,
            others: usize,
        }

        impl<'a> SchemaVisitor<'a> for Counter {
            fn visit_enum(&mut self, _def: &'a EnumTypeDef) {
                self.enums += 1;
            }

            fn visit_object(&mut self, _def: &'a ObjectTypeDef) {
                self.others += 1;
            }
        }

        let schema =
            parse_schema("enum A { X } enum B { Y } type C { a: A }").expect("Failed to parse");
        let mut counter = Counter::default();
        walk_schema(&schema, &mut counter);

        assert_eq!(counter.enums, 2);
        assert_eq!(counter.others, 1);
    }

    #[test]
    fn test_empty_schema() {
        let ir = build_ir(&Schema::default(), default_scalar_map());
        assert!(ir.objects.is_empty());
        assert!(ir.input_objects.is_empty());
        assert_eq!(ir.scalar_map.len(), 5);
    }
}
