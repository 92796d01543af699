//! Scalar comparison between evaluated values and authored literals.

use crate::Value;
use std::cmp::Ordering;

/// Compare an evaluated value against a literal.
///
/// Returns `None` when the pair is incomparable: mixed types, NaN, or any
/// list/map operand. Numbers compare by quantity, so a `10.0` decoded from
/// JSON equals an authored `10`.
pub fn compare(value: &Value, literal: &Value) -> Option<Ordering> {
    match (value, literal) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Equality used by the `equals` operator.
///
/// Scalars go through [`compare`]; lists and maps fall back to structural
/// equality.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::List(_), Value::List(_)) | (Value::Map(_), Value::Map(_)) => a == b,
        _ => compare(a, b) == Some(Ordering::Equal),
    }
}
