//! Recursive evaluation of program nodes.

use crate::config::EvalConfig;
use crate::env::Environment;
use crate::operators::{OpArgs, Operators};
use planout_types::{Bindings, EvalError, EvalResult, Node, Value, OP_KEY};
use serde_json::Map;
use tracing::{trace, warn};

/// Walks a program tree and produces Values.
///
/// Evaluation is total: a malformed operator node evaluates to `null` and
/// the failure is recorded in [`Evaluator::errors`]. Side effects already
/// applied to the environment are kept.
pub struct Evaluator<'a> {
    env: Environment<'a>,
    operators: &'a Operators,
    salt: &'a str,
    config: EvalConfig,
    depth: usize,
    errors: Vec<EvalError>,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        env: Environment<'a>,
        operators: &'a Operators,
        salt: &'a str,
        config: EvalConfig,
    ) -> Self {
        Self {
            env,
            operators,
            salt,
            config,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Evaluate a node.
    ///
    /// 1. A map with an `"op"` key invokes that operator.
    /// 2. Any other map is returned as data, entries unevaluated.
    /// 3. A list evaluates each element in order.
    /// 4. A scalar is returned as is.
    pub fn evaluate(&mut self, node: &Node) -> Value {
        if self.depth >= self.config.max_depth {
            return self.fail(EvalError::DepthExceeded(self.config.max_depth));
        }
        self.depth += 1;
        let value = match node {
            Node::Object(fields) => match fields.get(OP_KEY) {
                Some(op) => self.eval_operator(op, fields),
                None => Value::from(node),
            },
            Node::Array(items) => Value::List(items.iter().map(|item| self.evaluate(item)).collect()),
            data => Value::from(data),
        };
        self.depth -= 1;
        value
    }

    fn eval_operator(&mut self, op: &Node, fields: &Map<String, Node>) -> Value {
        match self.dispatch(op, fields) {
            Ok(value) => value,
            Err(error) => self.fail(error),
        }
    }

    fn dispatch(&mut self, op: &Node, fields: &Map<String, Node>) -> EvalResult<Value> {
        let name = op
            .as_str()
            .ok_or_else(|| EvalError::InvalidOperator(op.to_string()))?;
        let handler = self
            .operators
            .get(name)
            .ok_or_else(|| EvalError::UnknownOperator(name.to_string()))?;
        trace!(op = name, depth = self.depth, "dispatch");
        handler(&OpArgs::new(name, fields), self)
    }

    /// Record a structural failure and substitute `null`.
    fn fail(&mut self, error: EvalError) -> Value {
        warn!(%error, "operator failed; evaluating to null");
        self.errors.push(error);
        Value::Null
    }

    pub fn env(&self) -> &Environment<'a> {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment<'a> {
        &mut self.env
    }

    /// Seed string for randomization operators.
    pub fn salt(&self) -> &str {
        self.salt
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    /// Failures recorded so far.
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    /// Consume the evaluator, returning final bindings and recorded failures.
    pub fn finish(self) -> (Bindings, Vec<EvalError>) {
        (self.env.into_bindings(), self.errors)
    }
}
