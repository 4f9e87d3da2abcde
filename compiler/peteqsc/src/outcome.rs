//! The result record handed back to embedders.

use std::collections::BTreeMap;
use std::fmt;

use peteqs_diagnostic::InterpretError;
use serde::{Deserialize, Serialize};

/// Outcome of one run.
///
/// `error` is absent on success. On failure `output` still holds everything
/// printed before the fault.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RunError>,
    /// Global variables at the end of the run, rendered, sorted by name.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl RunResult {
    /// Build the record, trimming trailing line terminators from `output`.
    pub fn new(
        output: &str,
        error: Option<InterpretError>,
        variables: BTreeMap<String, String>,
    ) -> Self {
        RunResult {
            output: output.trim_end_matches(['\n', '\r']).to_string(),
            error: error.map(RunError::from),
            variables,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Serialize as a JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            format!(r#"{{"output":"","error":{{"kind":"RuntimeError","message":"{err}"}}}}"#)
        })
    }
}

/// A fault, flattened for the embedding caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunError {
    /// `ParseError`, `NameError`, `TypeError`, `TimeoutError`,
    /// `RuntimeError` or `InputError`.
    pub kind: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl From<InterpretError> for RunError {
    fn from(err: InterpretError) -> Self {
        RunError {
            kind: err.kind.as_str().to_string(),
            message: err.message,
            line: err.line,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Erro de Execução (linha {line}): ")?,
            None => f.write_str("Erro de Execução: ")?,
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}
