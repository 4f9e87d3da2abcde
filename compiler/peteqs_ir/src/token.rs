//! Token definitions for lexed statement lines.

use std::fmt;

use crate::Span;

/// PETEQS reserved words.
///
/// Keywords are matched case- and accent-insensitively by the lexer; this
/// enum is the canonical form every spelling resolves to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    // Conditionals
    Se,
    Entao,
    Senao,
    Fim,
    // Loops
    Para,
    Ate,
    Faca,
    Enquanto,
    Repita,
    Vezes,
    // Callables
    Funcao,
    Procedimento,
    Retorne,
    // I/O
    Imprima,
    ImprimaLn,
    Leia,
    // Operators
    E,
    Ou,
    Nao,
    Mod,
    Div,
    // Literals
    Verdadeiro,
    Falso,
}

impl Keyword {
    /// Canonical source spelling, used by the normalizer and in messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Se => "SE",
            Self::Entao => "ENTÃO",
            Self::Senao => "SENÃO",
            Self::Fim => "FIM",
            Self::Para => "PARA",
            Self::Ate => "ATÉ",
            Self::Faca => "FAÇA",
            Self::Enquanto => "ENQUANTO",
            Self::Repita => "REPITA",
            Self::Vezes => "VEZES",
            Self::Funcao => "FUNÇÃO",
            Self::Procedimento => "PROCEDIMENTO",
            Self::Retorne => "RETORNE",
            Self::Imprima => "IMPRIMA",
            Self::ImprimaLn => "IMPRIMALN",
            Self::Leia => "LEIA",
            Self::E => "E",
            Self::Ou => "OU",
            Self::Nao => "NÃO",
            Self::Mod => "MOD",
            Self::Div => "DIV",
            Self::Verdadeiro => "VERDADEIRO",
            Self::Falso => "FALSO",
        }
    }

    /// Whether this keyword starts a statement.
    ///
    /// Used by the single-line reflow heuristic to decide where to break.
    pub const fn starts_statement(self) -> bool {
        matches!(
            self,
            Self::Se
                | Self::Senao
                | Self::Fim
                | Self::Para
                | Self::Enquanto
                | Self::Repita
                | Self::Funcao
                | Self::Procedimento
                | Self::Retorne
                | Self::Imprima
                | Self::ImprimaLn
                | Self::Leia
        )
    }

    /// Whether a statement may follow this keyword on the same line
    /// (block header terminators and `SENÃO`).
    pub const fn breaks_after(self) -> bool {
        matches!(self, Self::Entao | Self::Faca | Self::Vezes | Self::Senao)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds produced by the line lexer.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    // Literals
    Number(f64),
    Str(String),
    Ident(String),
    Keyword(Keyword),

    // Assignment
    Arrow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
}

impl TokenKind {
    /// Short description for "unexpected token" messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("número `{n}`"),
            Self::Str(s) => format!("texto '{s}'"),
            Self::Ident(name) => format!("`{name}`"),
            Self::Keyword(kw) => format!("`{kw}`"),
            Self::Arrow => "`<-`".to_string(),
            Self::Eq => "`=`".to_string(),
            Self::NotEq => "`<>`".to_string(),
            Self::Lt => "`<`".to_string(),
            Self::LtEq => "`<=`".to_string(),
            Self::Gt => "`>`".to_string(),
            Self::GtEq => "`>=`".to_string(),
            Self::Plus => "`+`".to_string(),
            Self::Minus => "`-`".to_string(),
            Self::Star => "`*`".to_string(),
            Self::Slash => "`/`".to_string(),
            Self::LParen => "`(`".to_string(),
            Self::RParen => "`)`".to_string(),
            Self::LBracket => "`[`".to_string(),
            Self::RBracket => "`]`".to_string(),
            Self::Comma => "`,`".to_string(),
        }
    }

    /// Returns the keyword if this token is one.
    #[inline]
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

/// A token with its column span.
#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// One lexed statement line.
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    /// 1-based physical line number in the program text.
    pub number: u32,
    /// Normalized, trimmed text of the line.
    pub text: String,
    pub tokens: Vec<Token>,
}

impl Line {
    /// Keyword of the first token, if the line starts with one.
    #[inline]
    pub fn leading_keyword(&self) -> Option<Keyword> {
        self.tokens.first().and_then(|t| t.kind.keyword())
    }

    /// Whether the line is exactly `FIM <kw>`.
    pub fn is_end_of(&self, kw: Keyword) -> bool {
        matches!(
            self.tokens.as_slice(),
            [first, second] if first.kind == TokenKind::Keyword(Keyword::Fim)
                && second.kind == TokenKind::Keyword(kw)
        )
    }
}
