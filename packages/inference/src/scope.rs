use crate::types::{ArgumentShape, InferredType};
use std::collections::HashSet;

/// Bindings collected while walking one pattern
///
/// Every placeable of the pattern, including those nested in select
/// variants, records into the same scope. The scope remembers which
/// variables have already been narrowed by a select expression so that
/// later discoveries cannot undo or replace that narrowing.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    bindings: ArgumentShape,
    selectors: HashSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plain `{ $name }` interpolation
    pub fn bind_reference(&mut self, name: &str) {
        if !self.contains(name) {
            self.bindings.insert(name.to_string(), InferredType::Opaque);
        }
    }

    /// Record `name` as the selector of a select expression whose variant
    /// keys form `candidate`
    ///
    /// The first select on a variable wins. A select always replaces an
    /// earlier plain reference.
    pub fn bind_selector(&mut self, name: &str, candidate: InferredType) {
        if self.selectors.insert(name.to_string()) {
            self.bindings.insert(name.to_string(), candidate);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&InferredType> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Whether `name` has been seen as a select discriminant
    pub fn is_selector(&self, name: &str) -> bool {
        self.selectors.contains(name)
    }

    pub fn into_shape(self) -> ArgumentShape {
        self.bindings
    }
}
