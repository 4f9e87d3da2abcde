//! RAII call frames.
//!
//! [`CallFrame`] pushes an environment scope and bumps the call depth on
//! creation, and undoes both on drop. Early `RETORNE`, errors propagated
//! with `?` and panics all leave the environment balanced.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Guard over an interpreter with one extra call frame.
///
/// Derefs to the interpreter, so the callable body runs through it directly.
pub struct CallFrame<'guard, 'p> {
    interpreter: &'guard mut Interpreter<'p>,
}

impl Drop for CallFrame<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
        self.interpreter.call_depth -= 1;
    }
}

impl<'p> Deref for CallFrame<'_, 'p> {
    type Target = Interpreter<'p>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallFrame<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'p> Interpreter<'p> {
    /// Enter a call frame that is left when the guard drops.
    pub fn enter_call_frame(&mut self) -> CallFrame<'_, 'p> {
        self.env.push_scope();
        self.call_depth += 1;
        CallFrame { interpreter: self }
    }
}
