//! Core operator tests.
//!
//! Each program is authored as JSON and run through a fresh `Interpreter`:
//! - set / get / seq
//! - cond (first truthy clause wins)
//! - array / index / coalesce / length
//! - operator-vs-literal map disambiguation

use planout_eval::{compare, Interpreter, Node, Value};
use serde_json::json;
use std::cmp::Ordering;

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

/// Run a program with the test salt; returns the interpreter and success flag.
fn run_experiment(code: Node) -> (Interpreter, bool) {
    let mut expt = Interpreter::new(code).with_salt("test_salt");
    let (_, ok) = expt.run();
    (expt, ok)
}

/// Run `{"op": "set", "var": "x", "value": <config>}`.
fn run_config(config: Node) -> (Interpreter, bool) {
    run_experiment(json!({"op": "set", "var": "x", "value": config}))
}

/// Final value of `x` after `run_config`.
fn x_of(config: Node) -> Value {
    let (expt, ok) = run_config(config);
    assert!(ok, "run failed: {:?}", expt.errors());
    expt.get("x").cloned().expect("x was not bound")
}

fn assert_equal(actual: Option<&Value>, expected: impl Into<Value>) {
    let expected = expected.into();
    let actual = actual.unwrap_or_else(|| panic!("expected {expected}, variable unbound"));
    assert_eq!(
        compare(actual, &expected),
        Some(Ordering::Equal),
        "expected {expected}, got {actual}"
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// set / seq / get
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn set_binds_variable() {
    let (expt, ok) = run_experiment(json!({"op": "set", "value": "x_val", "var": "x"}));
    assert!(ok);
    assert_equal(expt.get("x"), "x_val");
}

#[test]
fn set_returns_bound_value() {
    let (expt, _) = run_experiment(json!({
        "op": "set", "var": "y",
        "value": {"op": "set", "var": "x", "value": 7}
    }));
    assert_equal(expt.get("x"), 7);
    assert_equal(expt.get("y"), 7);
}

#[test]
fn seq_runs_each_element() {
    let (expt, ok) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "value": "x_val", "var": "x"},
            {"op": "set", "value": "y_val", "var": "y"}
        ]
    }));
    assert!(ok);
    assert_equal(expt.get("x"), "x_val");
    assert_equal(expt.get("y"), "y_val");
}

#[test]
fn seq_assignments_happen_in_order() {
    let (expt, _) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "x", "value": 1},
            {"op": "set", "var": "y", "value": {"op": "get", "var": "x"}}
        ]
    }));
    assert_equal(expt.get("y"), 1);
}

#[test]
fn seq_value_is_last_element() {
    assert_eq!(
        x_of(json!({"op": "seq", "seq": [1, "two", {"op": "array", "values": [3]}]})),
        Value::List(vec![Value::Number(3.0)])
    );
}

#[test]
fn empty_seq_is_null() {
    assert_eq!(x_of(json!({"op": "seq", "seq": []})), Value::Null);
}

#[test]
fn get_reads_earlier_assignment() {
    let (expt, ok) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "x", "value": "x_val"},
            {"op": "set", "var": "y", "value": {"op": "get", "var": "x"}}
        ]
    }));
    assert!(ok);
    assert_equal(expt.get("x"), "x_val");
    assert_equal(expt.get("y"), "x_val");
}

#[test]
fn get_of_unbound_variable_is_null_not_failure() {
    let (expt, ok) = run_config(json!({"op": "get", "var": "nope"}));
    assert!(ok);
    assert_eq!(expt.get("x"), Some(&Value::Null));
}

#[test]
fn array_assignment() {
    assert_eq!(
        x_of(json!({"op": "array", "values": [4, 5, "a"]})),
        Value::List(vec![Value::from(4), Value::from(5), Value::from("a")])
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// cond
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn cond_takes_truthy_clause() {
    let (expt, ok) = run_experiment(json!({
        "op": "cond",
        "cond": [
            {"if": 0, "then": {"op": "set", "var": "x", "value": "x_0"}},
            {"if": 1, "then": {"op": "set", "var": "x", "value": "x_1"}}
        ]
    }));
    assert!(ok);
    assert_equal(expt.get("x"), "x_1");
}

#[test]
fn cond_stops_at_first_match() {
    let (expt, _) = run_experiment(json!({
        "op": "cond",
        "cond": [
            {"if": 1, "then": {"op": "set", "var": "x", "value": "x_0"}},
            {"if": 1, "then": {"op": "set", "var": "x", "value": "x_1"}}
        ]
    }));
    assert_equal(expt.get("x"), "x_0");
}

#[test]
fn cond_truthy_first_then_falsy() {
    let (expt, _) = run_experiment(json!({
        "op": "cond",
        "cond": [
            {"if": 1, "then": {"op": "set", "var": "x", "value": "x_0"}},
            {"if": 0, "then": {"op": "set", "var": "x", "value": "x_1"}}
        ]
    }));
    assert_equal(expt.get("x"), "x_0");
}

#[test]
fn cond_without_match_runs_nothing() {
    let (expt, ok) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "r", "value": {
                "op": "cond",
                "cond": [
                    {"if": null, "then": {"op": "set", "var": "x", "value": 1}},
                    {"if": "", "then": {"op": "set", "var": "x", "value": 2}},
                    {"if": [], "then": {"op": "set", "var": "x", "value": 3}},
                    {"if": false, "then": {"op": "set", "var": "x", "value": 4}}
                ]
            }}
        ]
    }));
    assert!(ok);
    assert_eq!(expt.get("x"), None);
    assert_eq!(expt.get("r"), Some(&Value::Null));
}

#[test]
fn cond_condition_may_be_an_operator() {
    let (expt, _) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "flag", "value": true},
            {"op": "cond", "cond": [
                {"if": {"op": "get", "var": "flag"},
                 "then": {"op": "set", "var": "x", "value": "on"}}
            ]}
        ]
    }));
    assert_equal(expt.get("x"), "on");
}

// ══════════════════════════════════════════════════════════════════════════════
// index
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn index_list() {
    assert_eq!(
        x_of(json!({"op": "index", "index": 0, "base": [10, 20, 30]})),
        Value::from(10)
    );
    assert_eq!(
        x_of(json!({"op": "index", "index": 2, "base": [10, 20, 30]})),
        Value::from(30)
    );
}

#[test]
fn index_list_out_of_range_is_null() {
    assert_eq!(
        x_of(json!({"op": "index", "index": 6, "base": [10, 20, 30]})),
        Value::Null
    );
    assert_eq!(
        x_of(json!({"op": "index", "index": -1, "base": [10, 20, 30]})),
        Value::Null
    );
}

#[test]
fn index_list_requires_integral_number() {
    assert_eq!(
        x_of(json!({"op": "index", "index": 1.5, "base": [10, 20, 30]})),
        Value::Null
    );
    assert_eq!(
        x_of(json!({"op": "index", "index": 1.0, "base": [10, 20, 30]})),
        Value::from(20)
    );
    assert_eq!(
        x_of(json!({"op": "index", "index": "1", "base": [10, 20, 30]})),
        Value::Null
    );
}

#[test]
fn index_map() {
    assert_eq!(
        x_of(json!({"op": "index", "index": "a", "base": {"a": 42, "b": 43}})),
        Value::from(42)
    );
    assert_eq!(
        x_of(json!({"op": "index", "index": "c", "base": {"a": 42, "b": 43}})),
        Value::Null
    );
}

#[test]
fn index_operator_base() {
    assert_eq!(
        x_of(json!({"op": "index", "index": 2, "base": {"op": "array", "values": [10, 20, 30]}})),
        Value::from(30)
    );
}

#[test]
fn index_scalar_base_degrades_without_failure() {
    assert_eq!(x_of(json!({"op": "index", "index": 0, "base": 5})), Value::Null);
    assert_eq!(
        x_of(json!({"op": "index", "index": 0, "base": {"a": 1}})),
        Value::Null
    );
}

// ══════════════════════════════════════════════════════════════════════════════
// coalesce
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn coalesce_picks_first_non_null() {
    assert_eq!(
        x_of(json!({"op": "coalesce", "values": {"op": "array", "values": [100, 200, 300]}})),
        Value::from(100)
    );
    assert_eq!(
        x_of(json!({"op": "coalesce", "values": [100, 200, 300, null]})),
        Value::from(100)
    );
    assert_eq!(
        x_of(json!({"op": "coalesce", "values": [null, 42, null]})),
        Value::from(42)
    );
    assert_eq!(
        x_of(json!({"op": "coalesce", "values": [null, null, 43]})),
        Value::from(43)
    );
}

#[test]
fn coalesce_all_null_or_empty() {
    assert_eq!(x_of(json!({"op": "coalesce", "values": [null]})), Value::Null);
    assert_eq!(x_of(json!({"op": "coalesce", "values": []})), Value::Null);
}

#[test]
fn coalesce_non_list_degrades() {
    assert_eq!(x_of(json!({"op": "coalesce", "values": 5})), Value::Null);
}

// ══════════════════════════════════════════════════════════════════════════════
// length
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn length_of_list() {
    assert_eq!(
        x_of(json!({"op": "length", "values": {"op": "array", "values": [1, 2, 3, 4, 5]}})),
        Value::from(5)
    );
    assert_eq!(
        x_of(json!({"op": "length", "values": [1, 2, 3, 4, 5]})),
        Value::from(5)
    );
}

#[test]
fn length_of_wrapped_variable_counts_wrapper() {
    let (expt, ok) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "arr", "value": {"op": "array", "values": [111, 222, 333]}},
            {"op": "set", "var": "x", "value": {"values": [{"op": "get", "var": "arr"}], "op": "length"}}
        ]
    }));
    assert!(ok);
    assert_equal(expt.get("x"), 1);
}

#[test]
fn length_of_nested_array_operator() {
    let (expt, _) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "a", "value": 111},
            {"op": "set", "var": "b", "value": 222},
            {"op": "set", "var": "c", "value": {"op": "array", "values": [
                {"op": "get", "var": "a"}, {"op": "get", "var": "b"}
            ]}},
            {"op": "set", "var": "n", "value": {"op": "length", "values": {"op": "get", "var": "c"}}},
            {"op": "set", "var": "x", "value": {"values": [{"op": "get", "var": "c"}], "op": "length"}}
        ]
    }));
    assert_equal(expt.get("n"), 2);
    assert_equal(expt.get("x"), 1);
}

#[test]
fn length_distinguishes_nesting() {
    assert_eq!(
        x_of(json!({"op": "length", "values": {"op": "array", "values": [111, 222]}})),
        Value::from(2)
    );
    assert_eq!(
        x_of(json!({"values": [{"op": "array", "values": [111, 222]}], "op": "length"})),
        Value::from(1)
    );
}

#[test]
fn length_of_non_list_is_null() {
    assert_eq!(x_of(json!({"op": "length", "values": "abc"})), Value::Null);
    assert_eq!(x_of(json!({"op": "length", "values": {"a": 1}})), Value::Null);
}

// ══════════════════════════════════════════════════════════════════════════════
// Operator vs literal maps
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn literal_map_entries_are_not_evaluated() {
    let value = x_of(json!({"a": {"op": "get", "var": "missing"}, "b": [1, 2]}));
    assert_eq!(
        value,
        Value::from(&json!({"a": {"op": "get", "var": "missing"}, "b": [1, 2]}))
    );
}

#[test]
fn list_elements_are_evaluated() {
    let (expt, _) = run_experiment(json!({
        "op": "seq",
        "seq": [
            {"op": "set", "var": "a", "value": 1},
            {"op": "set", "var": "x", "value": [{"op": "get", "var": "a"}, {"k": "v"}, null]}
        ]
    }));
    assert_eq!(
        expt.get("x"),
        Some(&Value::List(vec![
            Value::from(1),
            Value::from(&json!({"k": "v"})),
            Value::Null,
        ]))
    );
}

#[test]
fn scalars_evaluate_to_themselves() {
    assert_eq!(x_of(json!("s")), Value::from("s"));
    assert_eq!(x_of(json!(2.5)), Value::Number(2.5));
    assert_eq!(x_of(json!(true)), Value::Bool(true));
    assert_eq!(x_of(json!(null)), Value::Null);
}

#[test]
fn fractional_output_compares_equal_to_integer_literal() {
    let value = x_of(json!(10.0));
    assert_eq!(compare(&value, &Value::from(10)), Some(Ordering::Equal));
}
