//! Diagnostics for the PETEQS interpreter.
//!
//! Every fault, from a malformed line to a runaway loop, is normalized into a
//! single [`InterpretError`] carrying:
//! - an [`ErrorKind`] (what category of failure)
//! - a human-readable message (Portuguese, for the teaching audience)
//! - the originating source line, where derivable
//!
//! Errors are built through the factory functions in [`errors`] so message
//! wording lives in one place.

mod error;
pub mod errors;

pub use error::{ErrorKind, InterpretError, InterpretResult};
