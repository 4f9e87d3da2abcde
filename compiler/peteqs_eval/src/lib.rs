//! PETEQS Eval - tree-walking interpreter for PETEQS programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: one global scope plus a frame per active call
//! - `evaluate_binary` / `evaluate_unary`: enum-based operator dispatch
//! - `PrintHandlerImpl`: output sink (stdout or captured buffer)
//! - `InputHandler`: value source for `LEIA`
//! - `Watchdog`: per-loop wall-clock ceiling and cancellation
//!
//! Callables come from the [`peteqs_parse::DeclarationRegistry`] built at
//! parse time, so a call may appear before its definition.

mod environment;
mod input_handler;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;
mod watchdog;

pub use environment::Environment;
pub use input_handler::{coerce_input, InputHandler};
pub use interpreter::{CallFrame, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_binary, logical_operand};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{format_number, ArrayKey, OrderedNumber, Value};
pub use watchdog::{monotonic_clock, Clock, LoopClock, Watchdog, DEFAULT_CEILING};
