//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output for a single
//! segmented line, before keyword resolution and literal unescaping.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoted,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    DoubleQuoted,

    // Shorter than the terminated forms, so only wins when the quote never closes.
    #[regex(r"'([^'\\\n]|\\.)*")]
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    Unterminated,

    /// Identifiers and keywords alike; keywords are resolved in `convert`.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Word,

    #[token("<-")]
    #[token("←")]
    #[token(":=")]
    Arrow,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
}
