//! Grammar.
//!
//! - `body.rs`: multi-line driver, splitting a line slice into statements
//!   and recursing into block bodies
//! - `stmt.rs`: single-line statement forms and block headers
//! - `expr/`: expression precedence chain

mod body;
mod expr;
mod stmt;

pub(crate) use body::parse_body;

/// Deepest block nesting accepted in one program.
pub const MAX_BLOCK_DEPTH: usize = 256;

/// Deepest nesting of parentheses, indexes, call arguments and prefix
/// operators inside one statement line.
pub const MAX_EXPR_DEPTH: usize = 256;

/// Most unary and binary operators accepted on one statement line.
pub const MAX_LINE_OPERATORS: usize = 1024;

use peteqs_ir::Line;

use crate::cursor::Cursor;

/// Where a statement body lives.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Context {
    /// The main program or a block nested in it.
    Main,
    /// The body of a `FUNÇÃO` or `PROCEDIMENTO`, at any nesting depth.
    Callable,
}

/// Parser for the tokens of one statement line.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    context: Context,
    /// Current expression nesting, bounded by [`MAX_EXPR_DEPTH`].
    depth: usize,
    /// Operators parsed so far on this line.
    operators: usize,
}

impl<'a> Parser<'a> {
    pub fn new(line: &'a Line, context: Context) -> Self {
        Parser {
            cursor: Cursor::new(line),
            context,
            depth: 0,
            operators: 0,
        }
    }
}

#[cfg(test)]
mod tests;
