//! Boolean connectives and comparisons.

use crate::evaluator::Evaluator;
use crate::operators::OpArgs;
use planout_types::{compare, values_equal, EvalResult, Value};
use std::cmp::Ordering;

/// `{"op": "and", "values": [node, ...]}` stops at the first falsy operand.
pub(crate) fn and(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    for node in args.required_list("values")? {
        if !ev.evaluate(node).is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

/// `{"op": "or", "values": [node, ...]}` stops at the first truthy operand.
pub(crate) fn or(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    for node in args.required_list("values")? {
        if ev.evaluate(node).is_truthy() {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// `{"op": "not", "value": node}`
pub(crate) fn not(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let value = ev.evaluate(args.required("value")?);
    Ok(Value::Bool(!value.is_truthy()))
}

/// `{"op": "equals", "left": node, "right": node}`
pub(crate) fn equals(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let (left, right) = operands(args, ev)?;
    Ok(Value::Bool(values_equal(&left, &right)))
}

pub(crate) fn greater_than(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    ordered(args, ev, Ordering::is_gt)
}

pub(crate) fn less_than(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    ordered(args, ev, Ordering::is_lt)
}

pub(crate) fn greater_than_or_equal(
    args: &OpArgs<'_>,
    ev: &mut Evaluator<'_>,
) -> EvalResult<Value> {
    ordered(args, ev, Ordering::is_ge)
}

pub(crate) fn less_than_or_equal(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    ordered(args, ev, Ordering::is_le)
}

/// Evaluate `left` then `right`.
pub(super) fn operands(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<(Value, Value)> {
    let left = args.required("left")?;
    let right = args.required("right")?;
    Ok((ev.evaluate(left), ev.evaluate(right)))
}

/// Incomparable operands give `null`, not `false`.
fn ordered(
    args: &OpArgs<'_>,
    ev: &mut Evaluator<'_>,
    test: fn(Ordering) -> bool,
) -> EvalResult<Value> {
    let (left, right) = operands(args, ev)?;
    Ok(compare(&left, &right).map_or(Value::Null, |ord| Value::Bool(test(ord))))
}
