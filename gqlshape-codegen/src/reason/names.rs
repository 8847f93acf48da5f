//! Identifier naming rules.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Field names that collide with Reason keywords.
pub const RESERVED_WORDS: [&str; 5] = ["type", "and", "or", "class", "end"];

/// camelCases a field name and suffixes `_` if it is a reserved word.
#[must_use]
pub fn sanitize_field_name(name: &str) -> String {
    let camel = name.to_lower_camel_case();
    if RESERVED_WORDS.contains(&camel.as_str()) {
        format!("{camel}_")
    } else {
        camel
    }
}

/// Module name for an operation, e.g. `getUser` becomes `GetUser`.
/// Anonymous operations get an empty name.
#[must_use]
pub fn module_name(operation_name: Option<&str>) -> String {
    operation_name
        .map(str::to_upper_camel_case)
        .unwrap_or_default()
}

/// Reason type name for an object or input type.
#[must_use]
pub fn type_name(name: &str) -> String {
    name.to_lower_camel_case()
}
