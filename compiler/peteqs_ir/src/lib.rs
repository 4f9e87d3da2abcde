//! PETEQS IR - tokens, lexed lines and AST types.
//!
//! This crate contains the data structures shared by every interpreter phase:
//! - `Span` for column locations inside a line
//! - `Keyword`, `TokenKind` and `Token` for lexer output
//! - `Line`: one lexed statement line with its 1-based source line number
//! - AST nodes (`Expr`, `Stmt`, `Callable`)
//!
//! Unlike a file-oriented compiler, PETEQS is strictly one statement per line,
//! so locations are tracked as a line number plus a column span.

pub mod ast;
mod span;
mod token;

pub use ast::{
    AssignTarget, BinaryOp, Callable, CallableKind, Expr, Stmt, StmtKind, UnaryOp, RESULT_BINDING,
};
pub use span::Span;
pub use token::{Keyword, Line, Token, TokenKind};
