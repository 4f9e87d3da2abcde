//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use peteqs_parse::DeclarationRegistry;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{
    buffer_handler, Clock, Environment, InputHandler, SharedPrintHandler, Watchdog,
    DEFAULT_CEILING,
};

/// Builder for creating Interpreter instances with various configurations.
///
/// Defaults suit an embedder: output is captured in a buffer, `LEIA` reads
/// from an empty queue, loops get the 30 s ceiling and calls nest up to
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder<'p> {
    registry: &'p DeclarationRegistry,
    print_handler: Option<SharedPrintHandler>,
    input: InputHandler,
    ceiling: Duration,
    clock: Option<Clock>,
    cancel: Option<Arc<AtomicBool>>,
    max_call_depth: usize,
}

impl<'p> InterpreterBuilder<'p> {
    pub fn new(registry: &'p DeclarationRegistry) -> Self {
        Self {
            registry,
            print_handler: None,
            input: InputHandler::default(),
            ceiling: DEFAULT_CEILING,
            clock: None,
            cancel: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Set the sink for `IMPRIMA` / `IMPRIMALN`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Queue pre-supplied inputs for `LEIA`.
    #[must_use]
    pub fn inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input = InputHandler::queue(inputs);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, input: InputHandler) -> Self {
        self.input = input;
        self
    }

    /// Set the per-loop wall-clock ceiling.
    #[must_use]
    pub fn watchdog(mut self, ceiling: Duration) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Replace the clock the watchdog reads.
    ///
    /// Needed on targets without `std::time::Instant`.
    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Token that aborts the run at the next loop iteration once set.
    #[must_use]
    pub fn cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'p> {
        let mut watchdog = Watchdog::new(self.ceiling);
        if let Some(clock) = self.clock {
            watchdog = watchdog.with_clock(clock);
        }
        if let Some(token) = self.cancel {
            watchdog = watchdog.with_cancel_token(token);
        }

        Interpreter {
            registry: self.registry,
            env: Environment::new(),
            print_handler: self.print_handler.unwrap_or_else(buffer_handler),
            input: self.input,
            watchdog,
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
