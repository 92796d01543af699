//! Operator dispatch table.
//!
//! Operators are plain function pointers keyed by the name found in a
//! node's `"op"` field. The core table is built once per process;
//! callers that need extra operator kinds clone it and register more.

use crate::evaluator::Evaluator;
use crate::ops;
use planout_types::{EvalError, EvalResult, Node, Value, OP_KEY};
use serde_json::Map;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Handler for one operator kind.
///
/// Receives the operator node's fields and the evaluator, which it uses to
/// evaluate sub-nodes and reach the environment.
pub type OperatorFn = for<'n, 'a> fn(&OpArgs<'n>, &mut Evaluator<'a>) -> EvalResult<Value>;

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Name → handler table consulted by the evaluator.
#[derive(Clone, Default)]
pub struct Operators {
    table: HashMap<&'static str, OperatorFn>,
}

impl Operators {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared table of built-in operators.
    pub fn core() -> &'static Operators {
        static CORE: OnceLock<Operators> = OnceLock::new();
        CORE.get_or_init(|| {
            let mut operators = Operators::new();
            ops::register_core(&mut operators);
            operators
        })
    }

    /// An owned copy of the built-in table, ready for extension.
    pub fn with_core() -> Self {
        Self::core().clone()
    }

    /// Register `handler` under `name`, returning any handler it replaces.
    pub fn register(&mut self, name: &'static str, handler: OperatorFn) -> Option<OperatorFn> {
        self.table.insert(name, handler)
    }

    pub fn get(&self, name: &str) -> Option<OperatorFn> {
        self.table.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Registered operator names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl fmt::Debug for Operators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operators")
            .field("names", &self.names())
            .finish()
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// OpArgs
// ══════════════════════════════════════════════════════════════════════════════

/// The fields of an operator node, with typed accessors for handlers.
#[derive(Debug, Clone, Copy)]
pub struct OpArgs<'n> {
    op: &'n str,
    fields: &'n Map<String, Node>,
}

impl<'n> OpArgs<'n> {
    pub fn new(op: &'n str, fields: &'n Map<String, Node>) -> Self {
        Self { op, fields }
    }

    /// Name of the operator being invoked.
    pub fn op(&self) -> &'n str {
        self.op
    }

    /// A parameter node, if present.
    pub fn node(&self, param: &str) -> Option<&'n Node> {
        self.fields.get(param)
    }

    /// A parameter node that must be present. An explicit `null` counts as
    /// present.
    pub fn required(&self, param: &str) -> EvalResult<&'n Node> {
        self.node(param)
            .ok_or_else(|| EvalError::missing(self.op, param))
    }

    /// A parameter that must be a literal string, such as a variable name.
    pub fn required_str(&self, param: &str) -> EvalResult<&'n str> {
        self.required(param)?
            .as_str()
            .ok_or_else(|| EvalError::invalid(self.op, param, "a string"))
    }

    /// A parameter that must be a literal list of nodes.
    pub fn required_list(&self, param: &str) -> EvalResult<&'n [Node]> {
        self.required(param)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| EvalError::invalid(self.op, param, "a list"))
    }

    /// Every parameter except the discriminator, in key order.
    pub fn params(&self) -> impl Iterator<Item = (&'n str, &'n Node)> {
        self.fields
            .iter()
            .filter(|(key, _)| key.as_str() != OP_KEY)
            .map(|(key, node)| (key.as_str(), node))
    }
}
