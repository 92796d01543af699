//! Assignment, sequencing, branching and data-access operators.

use crate::evaluator::Evaluator;
use crate::operators::OpArgs;
use planout_types::{EvalError, EvalResult, Value};
use std::collections::BTreeMap;

// ── Environment ─────────────────────────────────────────────────────────────

/// `{"op": "set", "var": name, "value": node}`
///
/// The value is always evaluated; an override for `var` then replaces it.
pub(crate) fn set(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let var = args.required_str("var")?;
    let value = ev.evaluate(args.required("value")?);
    Ok(ev.env_mut().assign(var, value))
}

/// `{"op": "get", "var": name}`
pub(crate) fn get(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let var = args.required_str("var")?;
    Ok(ev.env().lookup(var).cloned().unwrap_or_default())
}

// ── Control flow ────────────────────────────────────────────────────────────

/// `{"op": "seq", "seq": [node, ...]}` evaluates to the last element.
pub(crate) fn seq(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let mut last = Value::Null;
    for node in args.required_list("seq")? {
        last = ev.evaluate(node);
    }
    Ok(last)
}

/// `{"op": "cond", "cond": [{"if": node, "then": node}, ...]}`
///
/// First truthy clause wins; later clauses are not looked at.
pub(crate) fn cond(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    for clause in args.required_list("cond")? {
        let clause = clause
            .as_object()
            .ok_or_else(|| EvalError::invalid(args.op(), "cond", "a list of {if, then} clauses"))?;
        let test = clause
            .get("if")
            .ok_or_else(|| EvalError::missing(args.op(), "if"))?;
        let then = clause
            .get("then")
            .ok_or_else(|| EvalError::missing(args.op(), "then"))?;
        if ev.evaluate(test).is_truthy() {
            return Ok(ev.evaluate(then));
        }
    }
    Ok(Value::Null)
}

// ── Data ────────────────────────────────────────────────────────────────────

/// `{"op": "array", "values": [node, ...]}`
pub(crate) fn array(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let values = args
        .required_list("values")?
        .iter()
        .map(|node| ev.evaluate(node))
        .collect();
    Ok(Value::List(values))
}

/// `{"op": "index", "base": node, "index": node}`
///
/// Lists take an integral in-range number, maps take a present string key.
/// Every other combination is `null`.
pub(crate) fn index(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let (base, index) = (args.required("base")?, args.required("index")?);
    let (base, index) = (ev.evaluate(base), ev.evaluate(index));
    let found = match (base, &index) {
        (Value::List(items), Value::Number(_)) => {
            index.as_index().and_then(|i| items.into_iter().nth(i))
        }
        (Value::Map(mut entries), Value::String(key)) => entries.remove(key),
        _ => None,
    };
    Ok(found.unwrap_or_default())
}

/// `{"op": "coalesce", "values": node}` picks the first non-null element.
pub(crate) fn coalesce(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let found = match ev.evaluate(args.required("values")?) {
        Value::List(items) => items.into_iter().find(|v| !v.is_null()),
        _ => None,
    };
    Ok(found.unwrap_or_default())
}

/// `{"op": "length", "values": node}`
pub(crate) fn length(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(match ev.evaluate(args.required("values")?) {
        Value::List(items) => Value::from(items.len()),
        _ => Value::Null,
    })
}

/// `{"op": "literal", "value": node}` returns `value` without evaluating it.
pub(crate) fn literal(args: &OpArgs<'_>, _ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    Ok(Value::from(args.required("value")?))
}

/// `{"op": "map", key: node, ...}` evaluates every field into a map.
pub(crate) fn map(args: &OpArgs<'_>, ev: &mut Evaluator<'_>) -> EvalResult<Value> {
    let mut entries = BTreeMap::new();
    for (key, node) in args.params() {
        entries.insert(key.to_string(), ev.evaluate(node));
    }
    Ok(Value::Map(entries))
}
