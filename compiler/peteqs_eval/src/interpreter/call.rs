//! Function and procedure calls.

use peteqs_diagnostic::errors::{
    call_depth_exceeded, procedure_has_no_value, undefined_callable, unset_result,
    wrong_arg_count,
};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{CallableKind, Expr, RESULT_BINDING};
use peteqs_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::Value;

impl Interpreter<'_> {
    /// Call a callable by name.
    ///
    /// Arguments are evaluated in the caller's scope, then bound by value
    /// in a fresh frame. Returns the callable kind and the value left in
    /// the result binding, if any.
    #[tracing::instrument(level = "debug", skip(self, args), fields(depth = self.call_depth))]
    pub(crate) fn call(
        &mut self,
        name: &str,
        args: &[Expr],
    ) -> InterpretResult<(CallableKind, Option<Value>)> {
        let registry = self.registry;
        let callable = registry.get(name).ok_or_else(|| undefined_callable(name))?;

        if args.len() != callable.params.len() {
            return Err(wrong_arg_count(name, callable.params.len(), args.len()));
        }
        if self.call_depth >= self.max_call_depth {
            tracing::warn!(limit = self.max_call_depth, callable = name, "call depth limit reached");
            return Err(call_depth_exceeded(self.max_call_depth));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval_expr(arg)?);
        }

        ensure_sufficient_stack(|| {
            let mut frame = self.enter_call_frame();
            for (param, value) in callable.params.iter().zip(values) {
                frame.env.define_local(param, value);
            }
            frame.exec_block(&callable.body)?;
            let result = frame.env.take_local(RESULT_BINDING);
            Ok((callable.kind, result))
        })
    }

    /// Call used inside an expression: must be a function that set its
    /// result binding.
    pub(crate) fn call_for_value(&mut self, name: &str, args: &[Expr]) -> InterpretResult<Value> {
        match self.call(name, args)? {
            (CallableKind::Function, Some(value)) => Ok(value),
            (CallableKind::Function, None) => Err(unset_result(name, RESULT_BINDING)),
            (CallableKind::Procedure, _) => Err(procedure_has_no_value(name)),
        }
    }
}
