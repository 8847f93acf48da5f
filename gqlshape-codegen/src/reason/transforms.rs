//! String transforms used by the Reason step tables.

use heck::ToLowerCamelCase;

/// `option(x)`.
#[must_use]
pub fn option(s: &str) -> String {
    format!("option({s})")
}

/// `array(x)`.
#[must_use]
pub fn array(s: &str) -> String {
    format!("array({s})")
}

/// `Js.Nullable.t(x)`.
#[must_use]
pub fn nullable(s: &str) -> String {
    format!("Js.Nullable.t({s})")
}

/// Enum type name: camelCase with an `_enum` suffix, since GraphQL lets
/// enums share names with other types.
#[must_use]
pub fn enum_type(s: &str) -> String {
    format!("{}_enum", s.to_lower_camel_case())
}

/// Optional labeled argument marker, `x=?`.
#[must_use]
pub fn optional_arg(s: &str) -> String {
    format!("{s}=?")
}

/// camelCase type name for object and input types.
#[must_use]
pub fn camel(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Enums cross the JS boundary as strings.
#[must_use]
pub fn js_string(_: &str) -> String {
    "string".to_string()
}
