//! Multi-line driver.

use peteqs_diagnostic::errors::{nested_definition, nesting_too_deep};
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{Callable, CallableKind, Line, Stmt, StmtKind};
use peteqs_stack::ensure_sufficient_stack;

use super::{Context, Parser, MAX_BLOCK_DEPTH};
use crate::block::{find_block_end, BlockKind, BlockSpan};

/// Parse a slice of lines into statements.
///
/// Block openers are resolved with [`find_block_end`]; their bodies are
/// parsed recursively from the sub-slice between header and terminator.
pub(crate) fn parse_body(lines: &[Line], context: Context) -> InterpretResult<Vec<Stmt>> {
    parse_nested(lines, context, 0)
}

/// Parse a body that sits inside `depth` enclosing blocks.
fn parse_nested(lines: &[Line], context: Context, depth: usize) -> InterpretResult<Vec<Stmt>> {
    let mut stmts = Vec::with_capacity(lines.len());
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        match line.leading_keyword().and_then(BlockKind::from_opener) {
            Some(kind) => {
                if depth >= MAX_BLOCK_DEPTH {
                    return Err(nesting_too_deep(MAX_BLOCK_DEPTH, line.number));
                }
                let span = find_block_end(lines, index, kind)?;
                let block = ensure_sufficient_stack(|| {
                    parse_block(lines, index, span, kind, context, depth + 1)
                })?;
                stmts.push(block);
                index = span.end + 1;
            }
            None => {
                let kind = Parser::new(line, context).parse_simple_stmt(&line.text)?;
                stmts.push(Stmt::new(kind, line.number));
                index += 1;
            }
        }
    }

    Ok(stmts)
}

fn parse_block(
    lines: &[Line],
    start: usize,
    span: BlockSpan,
    kind: BlockKind,
    context: Context,
    depth: usize,
) -> InterpretResult<Stmt> {
    let header = &lines[start];
    let mut parser = Parser::new(header, context);
    let body = &lines[span.body(start)];

    let stmt = match kind {
        BlockKind::If => {
            let cond = parser.parse_if_header()?;
            let then_body = parse_nested(body, context, depth)?;
            let else_body = match (span.alt, span.alt_body()) {
                (Some(alt), Some(range)) => {
                    Parser::new(&lines[alt], context).parse_alternate_marker()?;
                    Some(parse_nested(&lines[range], context, depth)?)
                }
                _ => None,
            };
            StmtKind::If {
                cond,
                then_body,
                else_body,
            }
        }
        BlockKind::For => {
            let (var, from, to) = parser.parse_for_header()?;
            StmtKind::ForCount {
                var,
                start: from,
                end: to,
                body: parse_nested(body, context, depth)?,
            }
        }
        BlockKind::While => {
            let cond = parser.parse_while_header()?;
            StmtKind::WhileCond {
                cond,
                body: parse_nested(body, context, depth)?,
            }
        }
        BlockKind::Repeat => {
            let count = parser.parse_repeat_header()?;
            StmtKind::RepeatN {
                count,
                body: parse_nested(body, context, depth)?,
            }
        }
        BlockKind::Function | BlockKind::Procedure => {
            let callable_kind = if kind == BlockKind::Function {
                CallableKind::Function
            } else {
                CallableKind::Procedure
            };
            if context == Context::Callable {
                return Err(nested_definition(callable_kind.keyword(), header.number));
            }
            let (name, params) = parser.parse_callable_header(callable_kind)?;
            let callable = Callable {
                name,
                params,
                body: parse_nested(body, Context::Callable, depth)?,
                kind: callable_kind,
                line: header.number,
            };
            match callable_kind {
                CallableKind::Function => StmtKind::FunctionDef(callable),
                CallableKind::Procedure => StmtKind::ProcedureDef(callable),
            }
        }
    };

    Ok(Stmt::new(stmt, header.number))
}
