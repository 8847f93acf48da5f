//! Step tables for the Reason output shapes.
//!
//! The same descriptor renders differently per shape: object accessors use
//! `option`, input objects use `Js.Nullable.t` and pass enums as strings, and
//! operation arguments additionally mark optional labels with `=?`.

use super::names::sanitize_field_name;
use super::transforms::{array, camel, enum_type, js_string, nullable, option, optional_arg};
use crate::pipeline::{Step, render};
use gqlshape_schema::{FieldDescriptor, TypeClass};

fn is_enum(f: &FieldDescriptor) -> bool {
    f.is_enum
}

fn is_object(f: &FieldDescriptor) -> bool {
    f.is_object_typed()
}

fn is_nullable(f: &FieldDescriptor) -> bool {
    f.is_nullable
}

fn is_list(f: &FieldDescriptor) -> bool {
    f.is_list
}

fn is_nullable_list(f: &FieldDescriptor) -> bool {
    f.is_list && f.is_nullable_list
}

fn is_optional(f: &FieldDescriptor) -> bool {
    f.is_optional()
}

/// Object accessor types, e.g. `option(array(option(string)))`.
pub const OBJECT_FIELD: &[Step] = &[
    Step::new(is_enum, enum_type),
    Step::new(is_object, camel),
    Step::new(is_nullable, option),
    Step::new(is_list, array),
    Step::new(is_nullable_list, option),
];

/// Input object field types as seen by JS, e.g. `Js.Nullable.t(string)`.
pub const INPUT_FIELD: &[Step] = &[
    Step::new(is_enum, js_string),
    Step::new(is_object, camel),
    Step::new(is_nullable, nullable),
    Step::new(is_list, array),
    Step::new(is_nullable_list, nullable),
];

/// Labeled argument types of `make` functions, e.g. `option(int)=?`.
pub const ARGUMENT: &[Step] = &[
    Step::new(is_enum, enum_type),
    Step::new(is_object, camel),
    Step::new(is_nullable, option),
    Step::new(is_list, array),
    Step::new(is_nullable_list, option),
    Step::new(is_optional, optional_arg),
];

/// Renders an object accessor type.
#[must_use]
pub fn accessor_type(field: &FieldDescriptor) -> String {
    render(field, OBJECT_FIELD)
}

/// Renders an input object field type.
#[must_use]
pub fn input_field_type(field: &FieldDescriptor) -> String {
    render(field, INPUT_FIELD)
}

/// Renders an operation or input `make` argument type.
#[must_use]
pub fn argument_type(field: &FieldDescriptor) -> String {
    render(field, ARGUMENT)
}

/// Renders a labeled argument, e.g. `~first: option(int)=?`.
#[must_use]
pub fn labeled_argument(field: &FieldDescriptor) -> String {
    format!(
        "~{}: {}",
        sanitize_field_name(&field.name),
        argument_type(field)
    )
}

/// Name of the runtime accessor that decodes this field, e.g.
/// `getNullableString` or `getArray`.
#[must_use]
pub fn field_getter_name(field: &FieldDescriptor) -> String {
    if field.is_list {
        let method = if field.is_nullable_list {
            "NullableArray"
        } else {
            "Array"
        };
        return format!("get{method}");
    }

    let method = match field.type_class() {
        TypeClass::Enum => "Enum".to_string(),
        TypeClass::Scalar(target) => capitalize(target),
        TypeClass::Object => "Field".to_string(),
    };

    if field.is_nullable {
        format!("getNullable{method}")
    } else {
        format!("get{method}")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.flat_map(char::to_lowercase).collect();
            format!("{}{rest}", first.to_uppercase())
        }
        None => String::new(),
    }
}
