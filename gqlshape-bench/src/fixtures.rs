//! Synthetic schema generation.

use std::fmt::Write;

/// Builds an SDL schema with `count` object types and `count` input types.
///
/// Input `InputN` references `InputN+1` and, every fourth type, back to
/// `Input0`, so the input graph contains cycles.
#[must_use]
pub fn synthetic_schema(count: usize) -> String {
    let mut sdl = String::from("enum Status { ACTIVE INACTIVE }\nscalar DateTime\n");

    for i in 0..count {
        let _ = writeln!(
            sdl,
            "type Object{i} {{ id: ID!, name: String, tags: [String!]!, status: Status, next: [Object{}] }}",
            (i + 1) % count.max(1)
        );
    }

    for i in 0..count {
        let next = (i + 1) % count.max(1);
        let back = if i % 4 == 3 { ", root: Input0" } else { "" };
        let _ = writeln!(
            sdl,
            "input Input{i} {{ value: Int!, at: DateTime, statuses: [Status!], next: Input{next}{back} }}"
        );
    }

    sdl
}

/// Builds a document with one query per `stride` input types, each taking
/// the input as its only variable.
#[must_use]
pub fn synthetic_document(count: usize, stride: usize) -> String {
    let mut doc = String::new();
    for i in (0..count).step_by(stride.max(1)) {
        let _ = writeln!(
            doc,
            "query Q{i}($input: Input{i}!) {{ object{i}(input: $input) {{ id }} }}"
        );
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlshape_schema::{parse_document, parse_schema};

    #[test]
    fn test_synthetic_schema_parses() {
        let schema = parse_schema(&synthetic_schema(8)).expect("Failed to parse");
        assert_eq!(schema.definitions.len(), 2 + 16);
    }

    #[test]
    fn test_synthetic_document_parses() {
        let document = parse_document(&synthetic_document(8, 4)).expect("Failed to parse");
        assert_eq!(document.operations.len(), 2);
    }
}
