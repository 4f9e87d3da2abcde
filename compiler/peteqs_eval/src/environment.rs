//! Environment for variable scoping in the interpreter.
//!
//! The global scope lives for the whole run. Each call pushes a frame;
//! lookups search the innermost frame, then the global scope. Frames never
//! see their caller's frame.

use std::collections::BTreeMap;

use peteqs_diagnostic::errors::undefined_variable;
use peteqs_diagnostic::InterpretResult;
use rustc_hash::FxHashMap;

use crate::Value;

type Scope = FxHashMap<String, Value>;

/// Variable storage for one run.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    global: Scope,
    frames: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a call frame.
    pub fn push_scope(&mut self) {
        self.frames.push(Scope::default());
    }

    /// Leave the innermost call frame. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        self.frames.pop();
    }

    #[inline]
    pub fn in_call(&self) -> bool {
        !self.frames.is_empty()
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.global,
        }
    }

    /// Scopes visible from the current frame, innermost first.
    fn chain(&self) -> impl Iterator<Item = &Scope> {
        self.frames.last().into_iter().chain(std::iter::once(&self.global))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|scope| scope.get(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        if let Some(frame) = self.frames.last_mut() {
            if frame.contains_key(name) {
                return frame.get_mut(name);
            }
        }
        self.global.get_mut(name)
    }

    /// Look up a variable, failing with a `NameError` if no visible scope
    /// binds it.
    pub fn lookup(&self, name: &str) -> InterpretResult<&Value> {
        self.get(name).ok_or_else(|| undefined_variable(name))
    }

    /// Overwrite `name` where it is visible, or create it in the innermost
    /// scope.
    pub fn declare_or_assign(&mut self, name: &str, value: Value) {
        match self.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.innermost_mut().insert(name.to_string(), value);
            }
        }
    }

    /// Bind `name` in the innermost scope, shadowing any global.
    pub fn define_local(&mut self, name: &str, value: Value) {
        self.innermost_mut().insert(name.to_string(), value);
    }

    pub fn local_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.innermost_mut().get_mut(name)
    }

    /// Remove and return `name` from the innermost scope.
    pub fn take_local(&mut self, name: &str) -> Option<Value> {
        self.innermost_mut().remove(name)
    }

    /// Rendered values of every global variable, sorted by name.
    pub fn snapshot_globals(&self) -> BTreeMap<String, String> {
        self.global
            .iter()
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect()
    }
}
