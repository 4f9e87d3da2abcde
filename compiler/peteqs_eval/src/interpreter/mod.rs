//! Tree-walking interpreter.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Interpreter` state and the statement executor
//! - `expr.rs`: expression evaluation
//! - `call.rs`: function and procedure calls
//! - `scope_guard.rs`: RAII call frames
//! - `builder.rs`: `InterpreterBuilder`
//!
//! Any fault aborts the run immediately. The error is stamped with the line
//! of the innermost statement that was executing.

mod builder;
mod call;
mod expr;
mod scope_guard;

use std::collections::BTreeMap;

use peteqs_diagnostic::errors::{expected_type, not_an_array};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{AssignTarget, Expr, Stmt, StmtKind, RESULT_BINDING};
use peteqs_parse::DeclarationRegistry;
use peteqs_stack::ensure_sufficient_stack;

pub use builder::InterpreterBuilder;
pub use scope_guard::CallFrame;

use crate::input_handler::coerce_input;
use crate::{ArrayKey, Environment, InputHandler, SharedPrintHandler, Value, Watchdog};

/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// How a statement list finished.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Flow {
    /// Ran to the end.
    Normal,
    /// `RETORNE` unwound out of the current callable.
    Return,
}

/// Interpreter for one program run.
pub struct Interpreter<'p> {
    registry: &'p DeclarationRegistry,
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    input: InputHandler,
    watchdog: Watchdog,
    max_call_depth: usize,
    pub(crate) call_depth: usize,
}

impl<'p> Interpreter<'p> {
    /// Interpreter with default configuration: buffered output, empty
    /// input queue, 30 s loop ceiling.
    pub fn new(registry: &'p DeclarationRegistry) -> Self {
        InterpreterBuilder::new(registry).build()
    }

    /// Execute a main program body.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = main.len()))]
    pub fn run(&mut self, main: &[Stmt]) -> InterpretResult<()> {
        self.exec_block(main).map(|_| ())
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured so far (empty for a streaming sink).
    pub fn output(&self) -> String {
        self.print_handler.output()
    }

    /// Rendered global variables, sorted by name.
    pub fn variables(&self) -> BTreeMap<String, String> {
        self.env.snapshot_globals()
    }

    pub(crate) fn exec_block(&mut self, stmts: &[Stmt]) -> InterpretResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmts(stmts))
    }

    fn exec_stmts(&mut self, stmts: &[Stmt]) -> InterpretResult<Flow> {
        for stmt in stmts {
            let flow = self
                .exec_stmt(stmt)
                .map_err(|err| err.with_line_if_absent(stmt.line))?;
            if flow == Flow::Return {
                return Ok(Flow::Return);
            }
        }
        Ok(Flow::Normal)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> InterpretResult<Flow> {
        tracing::trace!(line = stmt.line, kind = stmt.kind.name(), "exec");

        match &stmt.kind {
            StmtKind::Print(args) => {
                let text = self.render_args(args)?;
                self.print_handler.print(&text);
            }
            StmtKind::PrintLine(args) => {
                let text = self.render_args(args)?;
                self.print_handler.println(&text);
            }
            StmtKind::Read(targets) => {
                for target in targets {
                    let raw = self.input.next_input(&describe_target(target))?;
                    self.assign_target(target, coerce_input(raw))?;
                }
            }
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.assign(name, value);
            }
            StmtKind::ArrayAssign { name, index, value } => {
                let key = ArrayKey::from_value(self.eval_expr(index)?)?;
                let value = self.eval_expr(value)?;
                self.assign_element(name, key, value)?;
            }
            StmtKind::If {
                cond,
                then_body,
                else_body,
            } => {
                if self.eval_condition(cond, "a condição do SE")? {
                    return self.exec_block(then_body);
                }
                if let Some(else_body) = else_body {
                    return self.exec_block(else_body);
                }
            }
            StmtKind::ForCount {
                var,
                start,
                end,
                body,
            } => return self.exec_for(var, start, end, body),
            StmtKind::WhileCond { cond, body } => {
                let clock = self.watchdog.start();
                loop {
                    clock.check()?;
                    if !self.eval_condition(cond, "a condição do ENQUANTO")? {
                        break;
                    }
                    if self.exec_block(body)? == Flow::Return {
                        return Ok(Flow::Return);
                    }
                }
            }
            StmtKind::RepeatN { count, body } => {
                let count = self.eval_number(count, "a quantidade do REPITA")?;
                let clock = self.watchdog.start();
                let mut remaining = count.trunc();
                while remaining >= 1.0 {
                    clock.check()?;
                    if self.exec_block(body)? == Flow::Return {
                        return Ok(Flow::Return);
                    }
                    remaining -= 1.0;
                }
            }
            StmtKind::Call { name, args } => {
                self.call(name, args)?;
            }
            StmtKind::Return(value) => {
                if let Some(expr) = value {
                    let value = self.eval_expr(expr)?;
                    self.env.define_local(RESULT_BINDING, value);
                }
                return Ok(Flow::Return);
            }
            // Hoisted into the registry before execution.
            StmtKind::ProcedureDef(_) | StmtKind::FunctionDef(_) => {}
        }

        Ok(Flow::Normal)
    }

    /// Counting loop. Bounds are evaluated once; the counter steps by one
    /// towards `end` and is copied into `var` before each iteration, so the
    /// body may change `var` without affecting the iteration count.
    fn exec_for(&mut self, var: &str, start: &Expr, end: &Expr, body: &[Stmt]) -> InterpretResult<Flow> {
        let start = self.eval_number(start, "o início do PARA")?;
        let end = self.eval_number(end, "o fim do PARA")?;
        let step = if end >= start { 1.0 } else { -1.0 };

        let clock = self.watchdog.start();
        let mut counter = start;
        while (step > 0.0 && counter <= end) || (step < 0.0 && counter >= end) {
            clock.check()?;
            self.assign(var, Value::Number(counter));
            if self.exec_block(body)? == Flow::Return {
                return Ok(Flow::Return);
            }
            counter += step;
        }
        Ok(Flow::Normal)
    }

    fn render_args(&mut self, args: &[Expr]) -> InterpretResult<String> {
        let mut text = String::new();
        for arg in args {
            let value = self.eval_expr(arg)?;
            text.push_str(&value.to_string());
        }
        Ok(text)
    }

    fn eval_condition(&mut self, cond: &Expr, context: &str) -> InterpretResult<bool> {
        let value = self.eval_expr(cond)?;
        value
            .as_bool()
            .ok_or_else(|| expected_type(context, "lógico", value.type_name()))
    }

    fn eval_number(&mut self, expr: &Expr, context: &str) -> InterpretResult<f64> {
        let value = self.eval_expr(expr)?;
        value
            .as_number()
            .ok_or_else(|| expected_type(context, "número", value.type_name()))
    }

    /// Variable assignment. Inside a call, the result binding always lives in
    /// the call frame.
    fn assign(&mut self, name: &str, value: Value) {
        if name == RESULT_BINDING && self.env.in_call() {
            self.env.define_local(name, value);
        } else {
            self.env.declare_or_assign(name, value);
        }
    }

    /// Element assignment, creating the array on first write.
    fn assign_element(&mut self, name: &str, key: ArrayKey, value: Value) -> InterpretResult<()> {
        let slot = if name == RESULT_BINDING && self.env.in_call() {
            self.env.local_mut(name)
        } else {
            self.env.get_mut(name)
        };
        match slot {
            Some(Value::Array(elements)) => {
                elements.insert(key, value);
                Ok(())
            }
            Some(other) => Err(not_an_array(name, other.type_name())),
            None => {
                let mut elements = BTreeMap::new();
                elements.insert(key, value);
                self.assign(name, Value::Array(elements));
                Ok(())
            }
        }
    }

    fn assign_target(&mut self, target: &AssignTarget, value: Value) -> InterpretResult<()> {
        match target {
            AssignTarget::Var(name) => {
                self.assign(name, value);
                Ok(())
            }
            AssignTarget::Element { name, index } => {
                let key = ArrayKey::from_value(self.eval_expr(index)?)?;
                self.assign_element(name, key, value)
            }
        }
    }
}

fn describe_target(target: &AssignTarget) -> String {
    match target {
        AssignTarget::Var(name) => name.clone(),
        AssignTarget::Element { name, .. } => format!("{name}[...]"),
    }
}
