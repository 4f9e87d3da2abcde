//! Input source for `LEIA`.
//!
//! Embedders normally supply every input up front as a queue. The CLI can
//! read interactively from stdin instead.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use peteqs_diagnostic::errors::{input_exhausted, input_failed};
use peteqs_diagnostic::InterpretResult;

use crate::Value;

/// Where `LEIA` takes its values from.
#[derive(Debug)]
pub enum InputHandler {
    /// Pre-supplied values, consumed front to back.
    Queue(VecDeque<String>),
    /// One line of stdin per value.
    Stdin,
}

impl Default for InputHandler {
    fn default() -> Self {
        InputHandler::Queue(VecDeque::new())
    }
}

impl InputHandler {
    pub fn queue<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputHandler::Queue(inputs.into_iter().map(Into::into).collect())
    }

    /// Take the next raw input for `target`.
    ///
    /// An exhausted queue (or stdin at EOF) is an `InputError`.
    pub fn next_input(&mut self, target: &str) -> InterpretResult<String> {
        match self {
            InputHandler::Queue(queue) => queue.pop_front().ok_or_else(|| input_exhausted(target)),
            InputHandler::Stdin => {
                let _ = std::io::stdout().flush();
                let mut line = String::new();
                let read = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|err| input_failed(&err.to_string()))?;
                if read == 0 {
                    return Err(input_exhausted(target));
                }
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Ok(line)
            }
        }
    }
}

/// Turn raw input into a value: numeric text (`-?\d+(\.\d+)?`, surrounding
/// whitespace ignored) becomes a number, anything else stays text.
pub fn coerce_input(raw: String) -> Value {
    let trimmed = raw.trim();
    if looks_numeric(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return Value::Number(n);
        }
    }
    Value::Str(raw)
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.map_or(true, all_digits)
}

#[cfg(test)]
mod tests;
