//! Ordered conditional transform pipeline.
//!
//! Renders a [`FieldDescriptor`] into a type expression by folding a list of
//! `(predicate, transform)` steps over a starting string: the scalar mapping
//! for scalar fields, otherwise the bare type name. Each transform is applied
//! only when its predicate holds. Step order changes the output, so every
//! output shape fixes one table.

use gqlshape_schema::FieldDescriptor;

/// Predicate over a field descriptor.
pub type Predicate = fn(&FieldDescriptor) -> bool;

/// String transform.
pub type Transform = fn(&str) -> String;

/// A single conditional step.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    /// Condition under which the transform applies.
    pub predicate: Predicate,
    /// Transform applied to the accumulator.
    pub transform: Transform,
}

impl Step {
    /// Creates a new step.
    #[must_use]
    pub const fn new(predicate: Predicate, transform: Transform) -> Self {
        Self {
            predicate,
            transform,
        }
    }

    /// Applies the step to an accumulator.
    #[must_use]
    pub fn apply(&self, field: &FieldDescriptor, acc: String) -> String {
        if (self.predicate)(field) {
            (self.transform)(&acc)
        } else {
            acc
        }
    }
}

/// Folds `steps` left to right over the field's base type.
#[must_use]
pub fn render(field: &FieldDescriptor, steps: &[Step]) -> String {
    let base = field.base_type().to_string();
    steps.iter().fold(base, |acc, step| step.apply(field, acc))
}

/// Reusable ordered list of steps.
#[derive(Debug, Clone, Default)]
pub struct TransformPipeline {
    steps: Vec<Step>,
}

impl TransformPipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline from a step table.
    #[must_use]
    pub fn from_steps(steps: &[Step]) -> Self {
        Self {
            steps: steps.to_vec(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn step(mut self, predicate: Predicate, transform: Transform) -> Self {
        self.steps.push(Step::new(predicate, transform));
        self
    }

    /// Returns the steps in evaluation order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Renders a field.
    #[must_use]
    pub fn render(&self, field: &FieldDescriptor) -> String {
        render(field, &self.steps)
    }
}
