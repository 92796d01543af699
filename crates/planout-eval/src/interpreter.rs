//! Interpreter — one evaluation of an experiment program.
//!
//! Holds the program, its inputs and overrides, and after the first
//! [`Interpreter::run`] the resulting outputs. Later runs return the cached
//! result without evaluating again.

use crate::config::EvalConfig;
use crate::env::Environment;
use crate::evaluator::Evaluator;
use crate::operators::Operators;
use planout_types::{Bindings, EvalError, Node, Value};
use sha2::{Digest, Sha256};
use tracing::{debug, debug_span};

/// Runtime record of an experiment program.
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Seed forwarded to randomization operators.
    salt: String,
    /// Set once the first run completes.
    evaluated: bool,
    /// Caller-supplied parameters, visible to `get`.
    inputs: Bindings,
    /// Forced values taking precedence over `set` and `get`.
    overrides: Bindings,
    /// Every variable bound during the run.
    outputs: Bindings,
    /// The program tree.
    code: Node,
    config: EvalConfig,
    /// Custom operator table; `None` uses [`Operators::core`].
    operators: Option<Operators>,
    errors: Vec<EvalError>,
    success: bool,
}

impl Interpreter {
    /// Create an interpreter for `code` with an empty salt, no inputs and
    /// no overrides.
    pub fn new(code: Node) -> Self {
        Self {
            salt: String::new(),
            evaluated: false,
            inputs: Bindings::new(),
            overrides: Bindings::new(),
            outputs: Bindings::new(),
            code,
            config: EvalConfig::default(),
            operators: None,
            errors: Vec::new(),
            success: false,
        }
    }

    /// Decode `code` from JSON text.
    pub fn from_json_str(code: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(code)?))
    }

    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = salt.into();
        self
    }

    pub fn with_inputs(mut self, inputs: Bindings) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_overrides(mut self, overrides: Bindings) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Evaluate with `operators` instead of the built-in table.
    pub fn with_operators(mut self, operators: Operators) -> Self {
        self.operators = Some(operators);
        self
    }

    /// Evaluate the program once and return `(outputs, success)`.
    ///
    /// `success` is false if any operator node was malformed or unknown.
    /// Repeated calls return the first result unchanged.
    pub fn run(&mut self) -> (&Bindings, bool) {
        if self.evaluated {
            debug!(salt = %self.salt, "already evaluated; returning cached outputs");
            return (&self.outputs, self.success);
        }

        let span = debug_span!("run", salt = %self.salt, checksum = %self.checksum());
        let _enter = span.enter();

        let operators = self.operators.as_ref().unwrap_or_else(|| Operators::core());
        let env = Environment::new(&self.inputs, &self.overrides);
        let mut evaluator = Evaluator::new(env, operators, &self.salt, self.config);
        evaluator.evaluate(&self.code);
        let (bindings, errors) = evaluator.finish();

        self.success = errors.is_empty();
        self.outputs = bindings;
        self.errors = errors;
        self.evaluated = true;
        debug!(
            success = self.success,
            bound = self.outputs.len(),
            failures = self.errors.len(),
            "run complete"
        );
        (&self.outputs, self.success)
    }

    /// Final value of `name`, overrides included. `None` before the first
    /// run or if the program never bound `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name)
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    pub fn outputs(&self) -> &Bindings {
        &self.outputs
    }

    /// Whether the completed run was free of malformed operators. Always
    /// false before the first run.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Failures recorded during the run.
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn inputs(&self) -> &Bindings {
        &self.inputs
    }

    pub fn overrides(&self) -> &Bindings {
        &self.overrides
    }

    pub fn code(&self) -> &Node {
        &self.code
    }

    /// Short fingerprint of the program: the first 8 hex digits of the
    /// SHA-256 of its compact JSON form. Object keys serialize sorted, so
    /// the fingerprint does not depend on source key order.
    pub fn checksum(&self) -> String {
        let digest = Sha256::digest(self.code.to_string().as_bytes());
        digest[..4].iter().map(|b| format!("{b:02x}")).collect()
    }
}
