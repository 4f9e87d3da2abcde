//! Centralized error constructors.
//!
//! Every message the interpreter can show lives here, grouped by kind, so the
//! wording can be reviewed (or translated) in one place.
//!
//! # Usage
//!
//! ```ignore
//! use peteqs_diagnostic::errors::{undefined_variable, division_by_zero};
//! ```

use std::time::Duration;

use crate::{ErrorKind, InterpretError};

// Parse Errors

/// Generic malformed-line error.
#[cold]
pub fn parse_error(message: impl Into<String>, line: u32) -> InterpretError {
    InterpretError::new(ErrorKind::ParseError, message).at_line(line)
}

/// A token other than the one the grammar requires.
#[cold]
pub fn unexpected_token(found: &str, expected: &str, column: u32, line: u32) -> InterpretError {
    parse_error(
        format!("esperado {expected}, encontrado {found} (coluna {column})"),
        line,
    )
}

/// The line ended where more input was required.
#[cold]
pub fn unexpected_end_of_line(expected: &str, line: u32) -> InterpretError {
    parse_error(format!("esperado {expected} antes do fim da linha"), line)
}

/// Extra tokens after a complete statement.
#[cold]
pub fn trailing_tokens(found: &str, column: u32, line: u32) -> InterpretError {
    parse_error(
        format!("texto inesperado após o comando: {found} (coluna {column})"),
        line,
    )
}

/// A block opener with no matching `FIM`.
#[cold]
pub fn unclosed_block(construct: &str, line: u32) -> InterpretError {
    parse_error(
        format!("bloco {construct} iniciado na linha {line} não foi fechado com FIM {construct}"),
        line,
    )
}

/// A `FIM ...` or `SENÃO` with no open block to close.
#[cold]
pub fn unmatched_terminator(text: &str, line: u32) -> InterpretError {
    parse_error(format!("`{text}` sem bloco correspondente"), line)
}

/// A line that matches no statement form.
#[cold]
pub fn unknown_statement(text: &str, line: u32) -> InterpretError {
    parse_error(format!("comando não reconhecido: {text}"), line)
}

/// Two callables with the same name.
#[cold]
pub fn duplicate_callable(name: &str, first_line: u32, line: u32) -> InterpretError {
    parse_error(
        format!("'{name}' já foi definido na linha {first_line}"),
        line,
    )
}

/// `FUNÇÃO` / `PROCEDIMENTO` inside another callable body.
#[cold]
pub fn nested_definition(keyword: &str, line: u32) -> InterpretError {
    parse_error(
        format!("{keyword} não pode ser definido dentro de outra função ou procedimento"),
        line,
    )
}

/// `RETORNE` in the main program body.
#[cold]
pub fn return_outside_callable(line: u32) -> InterpretError {
    parse_error("RETORNE fora de função ou procedimento", line)
}

/// Blocks nested past the parser's depth limit.
#[cold]
pub fn nesting_too_deep(limit: usize, line: u32) -> InterpretError {
    parse_error(
        format!("blocos aninhados demais (limite de {limit} níveis)"),
        line,
    )
}

/// Parentheses, indexes or prefix operators nested past the parser's limit.
#[cold]
pub fn expression_too_deep(limit: usize, line: u32) -> InterpretError {
    parse_error(
        format!("expressão aninhada demais (limite de {limit} níveis)"),
        line,
    )
}

/// More operators on one line than the parser accepts.
#[cold]
pub fn too_many_operators(limit: usize, line: u32) -> InterpretError {
    parse_error(
        format!("operadores demais na mesma linha (limite de {limit})"),
        line,
    )
}

// Name Errors

/// Read of a variable absent from every reachable scope.
#[cold]
pub fn undefined_variable(name: &str) -> InterpretError {
    InterpretError::new(ErrorKind::NameError, format!("variável não definida: {name}"))
}

/// Read of an array element that was never written.
#[cold]
pub fn undefined_element(name: &str, index: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::NameError,
        format!("elemento não definido: {name}[{index}]"),
    )
}

/// Call of a name with no registered function or procedure.
#[cold]
pub fn undefined_callable(name: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::NameError,
        format!("função ou procedimento não definido: {name}"),
    )
}

/// A function returned without assigning its result binding.
#[cold]
pub fn unset_result(function: &str, binding: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::NameError,
        format!("a função {function} terminou sem atribuir valor a '{binding}'"),
    )
}

// Type Errors

/// Binary operator applied to incompatible operand types.
#[cold]
pub fn binary_type_mismatch(op: &str, left: &str, right: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::TypeError,
        format!("operador `{op}` não pode ser aplicado a {left} e {right}"),
    )
}

/// Unary operator applied to an incompatible operand type.
#[cold]
pub fn unary_type_mismatch(op: &str, operand: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::TypeError,
        format!("operador `{op}` não pode ser aplicado a {operand}"),
    )
}

/// A construct required a value of a specific type.
#[cold]
pub fn expected_type(context: &str, expected: &str, got: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::TypeError,
        format!("{context} deve ser {expected}, mas é {got}"),
    )
}

/// Indexing a variable that holds a scalar.
#[cold]
pub fn not_an_array(name: &str, got: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::TypeError,
        format!("'{name}' não é um vetor (é {got})"),
    )
}

/// Using a value that cannot key an array.
#[cold]
pub fn invalid_index(got: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::TypeError,
        format!("{got} não pode ser usado como índice de vetor"),
    )
}

// Timeout Errors

/// Loop watchdog ceiling exceeded.
#[cold]
pub fn loop_timeout(ceiling: Duration) -> InterpretError {
    let limit = if ceiling.subsec_nanos() == 0 {
        format!("{} segundos", ceiling.as_secs())
    } else {
        format!("{} ms", ceiling.as_millis())
    };
    InterpretError::new(
        ErrorKind::TimeoutError,
        format!("Tempo máximo de execução excedido ({limit})"),
    )
}

// Runtime Errors

/// `/` with a zero divisor.
#[cold]
pub fn division_by_zero() -> InterpretError {
    InterpretError::new(ErrorKind::RuntimeError, "divisão por zero")
}

/// `MOD` with a zero divisor.
#[cold]
pub fn modulo_by_zero() -> InterpretError {
    InterpretError::new(ErrorKind::RuntimeError, "resto de divisão por zero (MOD)")
}

/// Call with the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> InterpretError {
    let arg_word = if expected == 1 {
        "argumento"
    } else {
        "argumentos"
    };
    InterpretError::new(
        ErrorKind::RuntimeError,
        format!("{name} espera {expected} {arg_word}, recebeu {got}"),
    )
}

/// Procedure used where a value is required.
#[cold]
pub fn procedure_has_no_value(name: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::RuntimeError,
        format!("o procedimento {name} não retorna valor"),
    )
}

/// Recursion deeper than the configured call depth.
#[cold]
pub fn call_depth_exceeded(limit: usize) -> InterpretError {
    InterpretError::new(
        ErrorKind::RuntimeError,
        format!("profundidade máxima de chamadas excedida ({limit})"),
    )
}

/// External cancellation observed by a loop.
#[cold]
pub fn cancelled() -> InterpretError {
    InterpretError::new(ErrorKind::RuntimeError, "execução cancelada")
}

// Input Errors

/// `LEIA` with an exhausted input queue.
#[cold]
pub fn input_exhausted(target: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::InputError,
        format!("nenhuma entrada disponível para LEIA {target}"),
    )
}

/// Failure reading from the interactive input source.
#[cold]
pub fn input_failed(reason: &str) -> InterpretError {
    InterpretError::new(
        ErrorKind::InputError,
        format!("falha ao ler entrada: {reason}"),
    )
}

#[cfg(test)]
mod tests;
