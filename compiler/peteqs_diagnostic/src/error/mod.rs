//! Structured interpreter error type.

use std::fmt;

/// Error category reported to the embedding caller.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed statement text or unmatched block terminator.
    ParseError,
    /// Read of an undeclared variable, array element or callable.
    NameError,
    /// Operator applied to incompatible value types.
    TypeError,
    /// Loop watchdog ceiling exceeded.
    TimeoutError,
    /// Evaluator faults not covered by the other kinds.
    RuntimeError,
    /// `LEIA` found the input queue empty.
    ///
    /// Recoverable by the caller: re-run with more pre-supplied inputs.
    InputError,
}

impl ErrorKind {
    /// Stable name used in the result record.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "ParseError",
            Self::NameError => "NameError",
            Self::TypeError => "TypeError",
            Self::TimeoutError => "TimeoutError",
            Self::RuntimeError => "RuntimeError",
            Self::InputError => "InputError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault raised anywhere in the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct InterpretError {
    pub kind: ErrorKind,
    pub message: String,
    /// 1-based source line, when the fault can be attributed to one.
    pub line: Option<u32>,
}

/// Result alias used across the interpreter crates.
pub type InterpretResult<T> = Result<T, InterpretError>;

impl InterpretError {
    /// Create an error with no line attribution.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        InterpretError {
            kind,
            message: message.into(),
            line: None,
        }
    }

    /// Attach a source line, replacing any existing one.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a source line unless a more precise one is already set.
    ///
    /// Statement execution calls this on the way out, so the innermost
    /// statement that failed keeps its line.
    #[must_use]
    pub fn with_line_if_absent(mut self, line: u32) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }
}
