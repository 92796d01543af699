//! Built-in operators.
//!
//! `structural` holds the assignment, control and data-access operators;
//! `logic` and `arith` hold boolean and numeric helpers. All of them are
//! total: type mismatches yield `null` rather than an error.

mod arith;
mod logic;
mod structural;

use crate::operators::Operators;

/// Register every built-in operator.
pub(crate) fn register_core(operators: &mut Operators) {
    operators.register("set", structural::set);
    operators.register("seq", structural::seq);
    operators.register("cond", structural::cond);
    operators.register("get", structural::get);
    operators.register("array", structural::array);
    operators.register("index", structural::index);
    operators.register("coalesce", structural::coalesce);
    operators.register("length", structural::length);
    operators.register("literal", structural::literal);
    operators.register("map", structural::map);

    operators.register("and", logic::and);
    operators.register("or", logic::or);
    operators.register("not", logic::not);
    operators.register("equals", logic::equals);
    operators.register(">", logic::greater_than);
    operators.register("<", logic::less_than);
    operators.register(">=", logic::greater_than_or_equal);
    operators.register("<=", logic::less_than_or_equal);

    operators.register("sum", arith::sum);
    operators.register("product", arith::product);
    operators.register("min", arith::min);
    operators.register("max", arith::max);
    operators.register("%", arith::modulo);
    operators.register("/", arith::divide);
    operators.register("negative", arith::negative);
    operators.register("round", arith::round);
}
