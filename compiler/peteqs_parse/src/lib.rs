//! Parser for PETEQS pseudocode.
//!
//! Turns lexed lines into a statement tree plus a registry of callables:
//! 1. block openers are matched to their `FIM` with [`find_block_end`]
//! 2. each line is parsed as a statement or block header
//! 3. [`DeclarationRegistry::collect`] hoists every `FUNÇÃO` and
//!    `PROCEDIMENTO` out of the tree
//!
//! What remains is the main program, executed in source order.

mod block;
mod cursor;
mod grammar;
mod registry;

use peteqs_diagnostic::errors::parse_error;
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{Line, Stmt};

pub use block::{find_block_end, BlockKind, BlockSpan};
pub use grammar::{MAX_BLOCK_DEPTH, MAX_EXPR_DEPTH, MAX_LINE_OPERATORS};
pub use registry::DeclarationRegistry;

use grammar::Context;

/// A parsed program: the main statement list and its callables.
#[derive(Clone, Debug, Default)]
pub struct Program {
    pub main: Vec<Stmt>,
    pub registry: DeclarationRegistry,
}

/// Lex and parse a whole source text.
///
/// Lexer failures are reported as parse errors on the offending line.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> InterpretResult<Program> {
    let lines =
        peteqs_lexer::tokenize(source).map_err(|err| parse_error(err.message(), err.line))?;
    parse_lines(&lines)
}

/// Parse already lexed lines.
pub fn parse_lines(lines: &[Line]) -> InterpretResult<Program> {
    let mut main = grammar::parse_body(lines, Context::Main)?;
    let registry = DeclarationRegistry::collect(&mut main)?;
    tracing::debug!(
        lines = lines.len(),
        statements = main.len(),
        callables = registry.len(),
        "parsed program"
    );
    Ok(Program { main, registry })
}
