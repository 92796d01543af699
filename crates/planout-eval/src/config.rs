//! Evaluation limits.

use serde::{Deserialize, Serialize};

/// Default nesting limit for [`EvalConfig::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs applied to a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Deepest node nesting the evaluator will descend into. Deeper nodes
    /// evaluate to `null` and mark the run unsuccessful.
    pub max_depth: usize,
}

impl EvalConfig {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
