//! Run-scoped variable environment.

use planout_types::{Bindings, Value};

/// Variable state for one run.
///
/// Bindings are written only by `set`. Overrides and inputs are supplied by
/// the caller and never change during evaluation.
///
/// Lookup order is overrides, then bindings, then inputs.
#[derive(Debug, Clone)]
pub struct Environment<'a> {
    bindings: Bindings,
    overrides: &'a Bindings,
    inputs: &'a Bindings,
}

impl<'a> Environment<'a> {
    /// Create an empty environment over the caller's inputs and overrides.
    pub fn new(inputs: &'a Bindings, overrides: &'a Bindings) -> Self {
        Self {
            bindings: Bindings::new(),
            overrides,
            inputs,
        }
    }

    /// Bind `name`, replacing `value` with the override when one exists.
    /// Returns the value actually bound.
    pub fn assign(&mut self, name: &str, value: Value) -> Value {
        let value = match self.overrides.get(name) {
            Some(forced) => forced.clone(),
            None => value,
        };
        self.bindings.insert(name.to_string(), value.clone());
        value
    }

    /// Resolve `name` against overrides, bindings, then inputs.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.overrides
            .get(name)
            .or_else(|| self.bindings.get(name))
            .or_else(|| self.inputs.get(name))
    }

    pub fn has_override(&self, name: &str) -> bool {
        self.overrides.contains_key(name)
    }

    /// Variables bound so far in this run.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }
}
