//! Declaration registry.
//!
//! Functions and procedures are hoisted out of the statement tree before
//! execution, so a callable can be used before (or from inside a block
//! preceding) its definition.

use peteqs_diagnostic::errors::duplicate_callable;
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{Callable, Stmt, StmtKind};
use peteqs_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

/// Name-indexed table of every callable in a program.
#[derive(Clone, Debug, Default)]
pub struct DeclarationRegistry {
    callables: FxHashMap<String, Callable>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move every definition out of `stmts` (including definitions nested
    /// in top-level blocks) into a new registry.
    ///
    /// The remaining statements form the main program, in source order.
    pub fn collect(stmts: &mut Vec<Stmt>) -> InterpretResult<Self> {
        let mut registry = Self::new();
        registry.drain_definitions(stmts)?;
        Ok(registry)
    }

    fn drain_definitions(&mut self, stmts: &mut Vec<Stmt>) -> InterpretResult<()> {
        ensure_sufficient_stack(|| self.drain_block(stmts))
    }

    fn drain_block(&mut self, stmts: &mut Vec<Stmt>) -> InterpretResult<()> {
        let taken = std::mem::take(stmts);
        stmts.reserve(taken.len());

        for mut stmt in taken {
            match stmt.kind {
                StmtKind::FunctionDef(callable) | StmtKind::ProcedureDef(callable) => {
                    self.register(callable)?;
                    continue;
                }
                StmtKind::If {
                    ref mut then_body,
                    ref mut else_body,
                    ..
                } => {
                    self.drain_definitions(then_body)?;
                    if let Some(else_body) = else_body {
                        self.drain_definitions(else_body)?;
                    }
                }
                StmtKind::ForCount { ref mut body, .. }
                | StmtKind::WhileCond { ref mut body, .. }
                | StmtKind::RepeatN { ref mut body, .. } => {
                    self.drain_definitions(body)?;
                }
                _ => {}
            }
            stmts.push(stmt);
        }

        Ok(())
    }

    /// Add a callable; names are unique across functions and procedures.
    pub fn register(&mut self, callable: Callable) -> InterpretResult<()> {
        if let Some(existing) = self.callables.get(&callable.name) {
            return Err(duplicate_callable(
                &callable.name,
                existing.line,
                callable.line,
            ));
        }
        tracing::debug!(
            name = %callable.name,
            kind = ?callable.kind,
            params = callable.params.len(),
            line = callable.line,
            "registered callable"
        );
        self.callables.insert(callable.name.clone(), callable);
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Callable> {
        self.callables.get(name)
    }

    pub fn len(&self) -> usize {
        self.callables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callables.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.callables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests;
