//! Expression evaluation.

use peteqs_diagnostic::errors::{not_an_array, undefined_element};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{BinaryOp, Expr};
use peteqs_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::operators::{evaluate_binary, logical_operand};
use crate::unary_operators::evaluate_unary;
use crate::{ArrayKey, Value};

impl Interpreter<'_> {
    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` to survive deeply nested expressions
    /// and deep user recursion through function calls.
    pub fn eval_expr(&mut self, expr: &Expr) -> InterpretResult<Value> {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> InterpretResult<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Var(name) => self.env.lookup(name).cloned(),
            Expr::Index { name, index } => {
                let key = ArrayKey::from_value(self.eval_expr(index)?)?;
                self.element(name, &key)
            }
            Expr::Binary { op, left, right } if op.is_logical() => {
                self.eval_logical(*op, left, right)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, *op, right)
            }
            Expr::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, operand)
            }
            Expr::Call { name, args } => self.call_for_value(name, args),
        }
    }

    /// `E` / `OU` with short-circuit: the right operand is only evaluated
    /// when the left one does not decide the result.
    fn eval_logical(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> InterpretResult<Value> {
        let left = self.eval_expr(left)?;
        let l = logical_operand(op, &left)?;
        match (op, l) {
            (BinaryOp::And, false) => return Ok(Value::Bool(false)),
            (BinaryOp::Or, true) => return Ok(Value::Bool(true)),
            _ => {}
        }
        let right = self.eval_expr(right)?;
        Ok(Value::Bool(logical_operand(op, &right)?))
    }

    fn element(&self, name: &str, key: &ArrayKey) -> InterpretResult<Value> {
        match self.env.lookup(name)? {
            Value::Array(elements) => elements
                .get(key)
                .cloned()
                .ok_or_else(|| undefined_element(name, &key.to_string())),
            other => Err(not_an_array(name, other.type_name())),
        }
    }
}
