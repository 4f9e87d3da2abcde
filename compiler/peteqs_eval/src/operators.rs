//! Binary operator implementations.
//!
//! `E` and `OU` short-circuit in the interpreter; they only reach
//! [`evaluate_binary`] when both operands are already values.

use peteqs_diagnostic::errors::{binary_type_mismatch, division_by_zero, expected_type, modulo_by_zero};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::BinaryOp;

use crate::Value;

/// Evaluate a binary operation on two evaluated operands.
pub fn evaluate_binary(left: Value, op: BinaryOp, right: Value) -> InterpretResult<Value> {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Sub => numeric(&left, op, &right, |a, b| Ok(a - b)),
        BinaryOp::Mul => numeric(&left, op, &right, |a, b| Ok(a * b)),
        BinaryOp::Div => numeric(&left, op, &right, |a, b| {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(a / b)
            }
        }),
        BinaryOp::Mod => numeric(&left, op, &right, |a, b| {
            if b == 0.0 {
                Err(modulo_by_zero())
            } else {
                Ok(a % b)
            }
        }),
        BinaryOp::FloorDiv => numeric(&left, op, &right, |a, b| {
            if b == 0.0 {
                Err(division_by_zero())
            } else {
                Ok((a / b).floor())
            }
        }),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Lt => compare(&left, op, &right, |a, b| a < b),
        BinaryOp::LtEq => compare(&left, op, &right, |a, b| a <= b),
        BinaryOp::Gt => compare(&left, op, &right, |a, b| a > b),
        BinaryOp::GtEq => compare(&left, op, &right, |a, b| a >= b),
        BinaryOp::And => {
            let l = logical_operand(op, &left)?;
            let r = logical_operand(op, &right)?;
            Ok(Value::Bool(l && r))
        }
        BinaryOp::Or => {
            let l = logical_operand(op, &left)?;
            let r = logical_operand(op, &right)?;
            Ok(Value::Bool(l || r))
        }
    }
}

/// `+`: numeric sum, or concatenation when either side is text.
fn add(left: Value, right: Value) -> InterpretResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::Str(mut a), other) => {
            a.push_str(&other.to_string());
            Ok(Value::Str(a))
        }
        (other, Value::Str(b)) => Ok(Value::Str(format!("{other}{b}"))),
        (left, right) => Err(binary_type_mismatch(
            BinaryOp::Add.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

fn numeric_operands(left: &Value, op: BinaryOp, right: &Value) -> InterpretResult<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(binary_type_mismatch(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

#[inline]
fn numeric(
    left: &Value,
    op: BinaryOp,
    right: &Value,
    f: impl FnOnce(f64, f64) -> InterpretResult<f64>,
) -> InterpretResult<Value> {
    let (a, b) = numeric_operands(left, op, right)?;
    f(a, b).map(Value::Number)
}

#[inline]
fn compare(
    left: &Value,
    op: BinaryOp,
    right: &Value,
    f: impl FnOnce(f64, f64) -> bool,
) -> InterpretResult<Value> {
    let (a, b) = numeric_operands(left, op, right)?;
    Ok(Value::Bool(f(a, b)))
}

/// Operand of `E` / `OU`, which must be a Boolean.
pub fn logical_operand(op: BinaryOp, value: &Value) -> InterpretResult<bool> {
    value.as_bool().ok_or_else(|| {
        expected_type(
            &format!("o operando de {}", op.as_symbol()),
            "lógico",
            value.type_name(),
        )
    })
}

#[cfg(test)]
mod tests;
