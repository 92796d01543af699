//! Numeric operators. Any non-number operand makes the result `null`.

use super::logic::operands;
use crate::evaluator::Evaluator;
use crate::operators::OpArgs;
use planout_types::{EvalResult, Value};

/// Evaluate `values` and require every element to be a number.
fn numbers(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Option<Vec<f64>>> {
    Ok(match ev.evaluate(args.required("values")?) {
        Value::List(items) => items.iter().map(Value::as_f64).collect(),
        _ => None,
    })
}

fn number(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Option<f64>> {
    Ok(ev.evaluate(args.required("value")?).as_f64())
}

fn number_pair(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Option<(f64, f64)>> {
    let (left, right) = operands(args, ev)?;
    Ok(left.as_f64().zip(right.as_f64()))
}

/// `{"op": "sum", "values": node}`
pub(crate) fn sum(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(numbers(args, ev)?.map(|ns| ns.iter().sum::<f64>()).into())
}

/// `{"op": "product", "values": node}`
pub(crate) fn product(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(numbers(args, ev)?.map(|ns| ns.iter().product::<f64>()).into())
}

/// `{"op": "min", "values": node}`; empty input is `null`.
pub(crate) fn min(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(numbers(args, ev)?
        .and_then(|ns| ns.into_iter().reduce(f64::min))
        .into())
}

/// `{"op": "max", "values": node}`; empty input is `null`.
pub(crate) fn max(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(numbers(args, ev)?
        .and_then(|ns| ns.into_iter().reduce(f64::max))
        .into())
}

/// `{"op": "%", "left": node, "right": node}`
///
/// The result takes the sign of the divisor. A zero divisor is `null`.
pub(crate) fn modulo(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let result = number_pair(args, ev)?
        .filter(|&(_, b)| b != 0.0)
        .map(|(a, b)| {
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) {
                r + b
            } else {
                r
            }
        });
    Ok(result.into())
}

/// `{"op": "/", "left": node, "right": node}`; a zero divisor is `null`.
pub(crate) fn divide(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let result = number_pair(args, ev)?
        .filter(|&(_, b)| b != 0.0)
        .map(|(a, b)| a / b);
    Ok(result.into())
}

/// `{"op": "negative", "value": node}`
pub(crate) fn negative(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(number(args, ev)?.map(|n| -n).into())
}

/// `{"op": "round", "value": node}` rounds half away from zero.
pub(crate) fn round(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(number(args, ev)?.map(f64::round).into())
}
