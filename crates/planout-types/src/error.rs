//! Structural failures raised while dispatching operator nodes.

use thiserror::Error;

/// An operator node that could not be executed.
///
/// None of these abort a run: the evaluator replaces the failing node with
/// `null`, records the error, and marks the run unsuccessful. Value-level
/// mismatches (indexing a number, `length` of a string) are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The `op` field names no registered operator.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// The `op` field is present but is not a string.
    #[error("operator name must be a string, got {0}")]
    InvalidOperator(String),

    /// A required field is absent from an operator node.
    #[error("operator '{op}' is missing required parameter '{param}'")]
    MissingParameter { op: String, param: String },

    /// A required field has the wrong shape.
    #[error("operator '{op}' parameter '{param}' must be {expected}")]
    InvalidParameter {
        op: String,
        param: String,
        expected: &'static str,
    },

    /// The program nests deeper than the configured limit.
    #[error("maximum evaluation depth of {0} exceeded")]
    DepthExceeded(usize),
}

impl EvalError {
    pub fn missing(op: &str, param: &str) -> Self {
        Self::MissingParameter {
            op: op.to_string(),
            param: param.to_string(),
        }
    }

    pub fn invalid(op: &str, param: &str, expected: &'static str) -> Self {
        Self::InvalidParameter {
            op: op.to_string(),
            param: param.to_string(),
            expected,
        }
    }
}

/// Result alias for operator handlers.
pub type EvalResult<T> = Result<T, EvalError>;
