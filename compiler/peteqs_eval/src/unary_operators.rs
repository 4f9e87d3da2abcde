//! Unary operator implementations.

use peteqs_diagnostic::errors::unary_type_mismatch;
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::UnaryOp;

use crate::Value;

/// Evaluate a unary operation.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> InterpretResult<Value> {
    match (op, operand) {
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Plus, Value::Number(n)) => Ok(Value::Number(n)),
        (op, operand) => Err(unary_type_mismatch(op.as_symbol(), operand.type_name())),
    }
}
