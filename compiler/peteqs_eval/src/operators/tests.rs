#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use peteqs_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn text(s: &str) -> Value {
    Value::Str(s.to_string())
}

#[test]
fn arithmetic_on_numbers() {
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::Add, num(3.0)).unwrap(), num(10.0));
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::Sub, num(3.0)).unwrap(), num(4.0));
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::Mul, num(3.0)).unwrap(), num(21.0));
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::Div, num(2.0)).unwrap(), num(3.5));
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::Mod, num(3.0)).unwrap(), num(1.0));
    assert_eq!(evaluate_binary(num(7.0), BinaryOp::FloorDiv, num(2.0)).unwrap(), num(3.0));
    assert_eq!(evaluate_binary(num(-7.0), BinaryOp::FloorDiv, num(2.0)).unwrap(), num(-4.0));
}

#[test]
fn plus_concatenates_when_either_side_is_text() {
    assert_eq!(evaluate_binary(text("a"), BinaryOp::Add, text("b")).unwrap(), text("ab"));
    assert_eq!(
        evaluate_binary(text("total: "), BinaryOp::Add, num(30.0)).unwrap(),
        text("total: 30")
    );
    assert_eq!(
        evaluate_binary(Value::Bool(true), BinaryOp::Add, text("!")).unwrap(),
        text("VERDADEIRO!")
    );
}

#[test]
fn plus_rejects_number_and_boolean() {
    let err = evaluate_binary(num(1.0), BinaryOp::Add, Value::Bool(true)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert_eq!(err.message, "operador `+` não pode ser aplicado a número e lógico");
}

#[test]
fn zero_divisors_are_runtime_errors() {
    for op in [BinaryOp::Div, BinaryOp::Mod, BinaryOp::FloorDiv] {
        let err = evaluate_binary(num(1.0), op, num(0.0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RuntimeError, "{op:?}");
    }
}

#[test]
fn equality_never_coerces() {
    assert_eq!(evaluate_binary(num(1.0), BinaryOp::Eq, text("1")).unwrap(), Value::Bool(false));
    assert_eq!(evaluate_binary(num(1.0), BinaryOp::NotEq, text("1")).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_binary(text("a"), BinaryOp::Eq, text("a")).unwrap(), Value::Bool(true));
}

#[test]
fn relational_requires_numbers() {
    assert_eq!(evaluate_binary(num(1.0), BinaryOp::Lt, num(2.0)).unwrap(), Value::Bool(true));
    assert_eq!(evaluate_binary(num(2.0), BinaryOp::GtEq, num(2.0)).unwrap(), Value::Bool(true));
    let err = evaluate_binary(Value::Bool(true), BinaryOp::Lt, num(3.0)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
}

#[test]
fn logical_operators_require_booleans() {
    assert_eq!(
        evaluate_binary(Value::Bool(true), BinaryOp::And, Value::Bool(false)).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        evaluate_binary(Value::Bool(false), BinaryOp::Or, Value::Bool(true)).unwrap(),
        Value::Bool(true)
    );
    let err = evaluate_binary(num(1.0), BinaryOp::Or, Value::Bool(true)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
    assert_eq!(err.message, "o operando de OU deve ser lógico, mas é número");
}
