//! ReasonML / BuckleScript target rendering.
//!
//! Transform tables and naming rules for the three output shapes:
//! object accessor types, input object field types and operation argument
//! types.

pub mod fields;
pub mod names;
pub mod transforms;

pub use fields::{
    ARGUMENT, INPUT_FIELD, OBJECT_FIELD, accessor_type, argument_type, field_getter_name,
    input_field_type, labeled_argument,
};
pub use names::{RESERVED_WORDS, module_name, sanitize_field_name, type_name};
