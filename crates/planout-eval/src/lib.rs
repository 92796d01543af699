//! PlanOut tree-walking interpreter.
//!
//! Evaluates experiment programs expressed as JSON trees. A map with an
//! `"op"` key is an operator invocation; every other map is data.
//!
//! ```text
//! Interpreter::run → Evaluator::evaluate → Operators (set, seq, cond, get, …) → Environment
//! ```
//!
//! Evaluation never panics on a malformed program: bad operator nodes
//! evaluate to `null` and flip the run's success flag.

pub mod config;
pub mod env;
pub mod evaluator;
pub mod interpreter;
pub mod operators;
mod ops;

pub use config::{EvalConfig, DEFAULT_MAX_DEPTH};
pub use env::Environment;
pub use evaluator::Evaluator;
pub use interpreter::Interpreter;
pub use operators::{OpArgs, OperatorFn, Operators};
pub use planout_types::{
    compare, values_equal, Bindings, EvalError, EvalResult, Node, Value, OP_KEY,
};
