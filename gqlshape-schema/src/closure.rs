//! Input-type dependency closure.
//!
//! Restricts input object types to those transitively reachable from the
//! variables of the supplied operations, so output scales with usage rather
//! than with schema size.

use crate::ir::{InputObjectDef, OperationDescriptor};
use std::collections::{HashMap, HashSet};

/// Visited-set state of one closure computation.
///
/// A name is marked visited before its fields are expanded, which makes the
/// walk terminate on cyclic input graphs.
#[derive(Debug)]
pub struct DependencyClosure<'a> {
    index: HashMap<&'a str, &'a InputObjectDef>,
    visited: HashSet<&'a str>,
}

impl<'a> DependencyClosure<'a> {
    /// Creates an empty closure over the given input objects.
    ///
    /// When several definitions share a name the first one is used.
    #[must_use]
    pub fn new(input_objects: &'a [InputObjectDef]) -> Self {
        let mut index = HashMap::with_capacity(input_objects.len());
        for input in input_objects {
            index.entry(input.name.as_str()).or_insert(input);
        }

        Self {
            index,
            visited: HashSet::new(),
        }
    }

    /// Computes the closure of the object-typed variables of `operations`.
    #[must_use]
    pub fn from_operations(
        input_objects: &'a [InputObjectDef],
        operations: &'a [OperationDescriptor],
    ) -> Self {
        Self::from_seeds(input_objects, seed_names(operations))
    }

    /// Computes the closure of an explicit set of seed type names.
    #[must_use]
    pub fn from_seeds<I>(input_objects: &'a [InputObjectDef], seeds: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut closure = Self::new(input_objects);
        for seed in seeds {
            closure.visit(seed);
        }
        closure
    }

    /// Expands `name` and everything it references, unless already visited.
    ///
    /// Pending names are kept on an explicit work-list, so the depth of the
    /// input graph does not grow the call stack.
    pub fn visit(&mut self, name: &'a str) {
        if !self.visited.insert(name) {
            return;
        }

        let mut pending = vec![name];
        while let Some(name) = pending.pop() {
            let Some(input) = self.index.get(name).copied() else {
                tracing::warn!("Input type '{}' has no definition; not expanding it", name);
                continue;
            };

            for field in input.fields.iter().filter(|f| f.is_object_typed()) {
                if self.visited.insert(field.type_name.as_str()) {
                    pending.push(field.type_name.as_str());
                }
            }
        }
    }

    /// Returns true if `name` was reached.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    /// Number of reached names, including names with no definition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns true if nothing was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Consumes the closure and returns the owned set of reached names.
    #[must_use]
    pub fn into_names(self) -> HashSet<String> {
        self.visited.into_iter().map(str::to_string).collect()
    }
}

/// Returns the unique object-typed variable type names across all
/// operations, in first-seen order.
#[must_use]
pub fn seed_names(operations: &[OperationDescriptor]) -> Vec<&str> {
    let mut seen = HashSet::new();
    operations
        .iter()
        .flat_map(|op| op.variables.iter())
        .filter(|v| v.is_object_typed())
        .map(|v| v.type_name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Filters `input_objects` down to those reachable from the operations'
/// variables, preserving the original relative order.
#[must_use]
pub fn filter_input_objects(
    input_objects: &[InputObjectDef],
    operations: &[OperationDescriptor],
) -> Vec<InputObjectDef> {
    let closure = DependencyClosure::from_operations(input_objects, operations);

    let filtered: Vec<InputObjectDef> = input_objects
        .iter()
        .filter(|input| closure.contains(&input.name))
        .cloned()
        .collect();

    tracing::debug!(
        "Input type closure kept {} of {} input objects",
        filtered.len(),
        input_objects.len()
    );

    filtered
}
