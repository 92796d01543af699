//! Shared types for the PlanOut interpreter.
//!
//! This crate defines the runtime [`Value`] model, the scalar comparator
//! used to check evaluated values against authored literals, and the
//! error taxonomy for malformed operator nodes.

mod compare;
mod error;
mod value;

pub use compare::{compare, values_equal};
pub use error::{EvalError, EvalResult};
pub use value::{Bindings, Node, Value};

/// Key that marks a JSON map as an operator invocation.
pub const OP_KEY: &str = "op";
