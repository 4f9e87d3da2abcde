//! Runtime values.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use peteqs_diagnostic::errors::invalid_index;
use peteqs_diagnostic::InterpretResult;

/// A PETEQS value.
///
/// There is no null: reading something that was never assigned is an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    Bool(bool),
    /// Sparse array keyed by any scalar value.
    Array(BTreeMap<ArrayKey, Value>),
}

impl Value {
    /// Portuguese type name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "número",
            Value::Str(_) => "texto",
            Value::Bool(_) => "lógico",
            Value::Array(_) => "vetor",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("VERDADEIRO"),
            Value::Bool(false) => f.write_str("FALSO"),
            Value::Array(elements) => {
                f.write_str("{")?;
                for (i, (key, value)) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Render a number the way PETEQS prints it: integers without a decimal
/// point, negative zero as `0`, and exponent form (`1e+24`, `1e-7`) for
/// magnitudes from `1e21` up or below `1e-6`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinito" } else { "-Infinito" }.to_string()
    } else if !(1e-6..1e21).contains(&n.abs()) {
        exponent_form(n)
    } else {
        format!("{n}")
    }
}

/// Shortest round-trip digits with a signed exponent.
fn exponent_form(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

/// Totally ordered wrapper so numbers can key a `BTreeMap`.
#[derive(Copy, Clone, Debug)]
pub struct OrderedNumber(f64);

impl OrderedNumber {
    /// Wrap a number, folding `-0` into `0`.
    pub fn new(n: f64) -> Self {
        OrderedNumber(if n == 0.0 { 0.0 } else { n })
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedNumber {}

impl PartialOrd for OrderedNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Array element key.
///
/// Keys are typed: `v[1]` and `v['1']` are different elements.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArrayKey {
    Number(OrderedNumber),
    Str(String),
    Bool(bool),
}

impl ArrayKey {
    /// Key for an evaluated index; arrays cannot be used as keys.
    pub fn from_value(value: Value) -> InterpretResult<Self> {
        match value {
            Value::Number(n) => Ok(ArrayKey::Number(OrderedNumber::new(n))),
            Value::Str(s) => Ok(ArrayKey::Str(s)),
            Value::Bool(b) => Ok(ArrayKey::Bool(b)),
            Value::Array(_) => Err(invalid_index(value.type_name())),
        }
    }
}

impl fmt::Display for ArrayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKey::Number(n) => f.write_str(&format_number(n.get())),
            ArrayKey::Str(s) => write!(f, "'{s}'"),
            ArrayKey::Bool(true) => f.write_str("VERDADEIRO"),
            ArrayKey::Bool(false) => f.write_str("FALSO"),
        }
    }
}

#[cfg(test)]
mod tests;
