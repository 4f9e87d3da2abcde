//! Lexical normalization.
//!
//! Runs before tokenization, one physical line at a time:
//! - `\r\n` and lone `\r` become `\n`
//! - `//` comments are removed (quotes are respected)
//! - `←` and `:=` become `<-`
//! - keywords are rewritten to their canonical accented uppercase spelling
//!
//! A program written entirely on one line is reflowed so that each
//! statement lands on its own line. Reflow breaks before statement keywords,
//! after block-header keywords (`ENTÃO`, `FAÇA`, `VEZES`, `SENÃO`) and after
//! every `FIM <bloco>` pair. It is a heuristic: a statement that does not
//! start with a keyword (an assignment or a call) only gets its own line if
//! the preceding statement ended in one of those break points.

use peteqs_ir::Keyword;

use crate::keywords;
use crate::segment::SourceLine;

/// A lexically meaningful slice of one physical line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece<'a> {
    /// Run of letters, digits and `_`.
    Word(&'a str),
    /// Quoted literal, delimiters included. May be unterminated.
    Quoted(&'a str),
    /// An assignment glyph.
    Assign,
    /// Any other single character.
    Other(&'a str),
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a physical line into pieces, stopping at a `//` comment.
fn pieces(line: &str) -> Vec<Piece<'_>> {
    let mut out = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if is_word_char(c) {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if !is_word_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
            out.push(Piece::Word(&line[start..end]));
        } else if c == '\'' || c == '"' {
            let mut end = start + 1;
            let mut escaped = false;
            for (i, next) in chars.by_ref() {
                end = i + next.len_utf8();
                if escaped {
                    escaped = false;
                } else if next == '\\' {
                    escaped = true;
                } else if next == c {
                    break;
                }
            }
            out.push(Piece::Quoted(&line[start..end]));
        } else if c == '/' && matches!(chars.peek(), Some(&(_, '/'))) {
            break;
        } else if c == '←' {
            out.push(Piece::Assign);
        } else if c == ':' && matches!(chars.peek(), Some(&(_, '='))) {
            chars.next();
            out.push(Piece::Assign);
        } else {
            out.push(Piece::Other(&line[start..start + c.len_utf8()]));
        }
    }

    out
}

fn normalize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for piece in pieces(line) {
        match piece {
            Piece::Word(word) => match keywords::lookup(word) {
                Some(kw) => out.push_str(kw.as_str()),
                None => out.push_str(word),
            },
            Piece::Quoted(text) | Piece::Other(text) => out.push_str(text),
            Piece::Assign => out.push_str("<-"),
        }
    }
    out
}

/// Normalize raw source into one entry per physical line.
///
/// The result still contains blank lines; [`segment`](crate::segment) drops
/// them. A reflowed line carries embedded `\n` separators.
pub fn normalize(source: &str) -> Vec<SourceLine> {
    let unified = source.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<SourceLine> = unified
        .split('\n')
        .zip(1u32..)
        .map(|(text, number)| SourceLine::new(number, normalize_line(text)))
        .collect();

    let mut non_blank = lines.iter_mut().filter(|line| !line.text.trim().is_empty());
    if let (Some(only), None) = (non_blank.next(), non_blank.next()) {
        only.text = reflow(&only.text);
    }

    lines
}

/// Insert statement breaks into a single normalized line.
fn reflow(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 16);
    let mut after_fim = false;
    let mut break_pending = false;

    for piece in pieces(line) {
        match piece {
            Piece::Word(word) => {
                let kw = keywords::lookup(word);
                if break_pending || (kw.is_some_and(Keyword::starts_statement) && !after_fim) {
                    push_break(&mut out);
                }
                out.push_str(word);
                break_pending = after_fim || kw.is_some_and(Keyword::breaks_after);
                after_fim = kw == Some(Keyword::Fim);
            }
            Piece::Quoted(text) => {
                if break_pending {
                    push_break(&mut out);
                    break_pending = false;
                }
                out.push_str(text);
                after_fim = false;
            }
            Piece::Other(text) => {
                if break_pending && !text.trim().is_empty() {
                    push_break(&mut out);
                    break_pending = false;
                }
                out.push_str(text);
            }
            Piece::Assign => {
                out.push_str("<-");
                after_fim = false;
            }
        }
    }

    out
}

fn push_break(out: &mut String) {
    let kept = out.trim_end().len();
    out.truncate(kept);
    if !out.is_empty() {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests;
