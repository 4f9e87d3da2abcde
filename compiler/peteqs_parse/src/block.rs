//! Block resolution.
//!
//! Every block construct is closed by `FIM <opener>`. A single depth-counting
//! scan, parameterized by [`BlockKind`], finds the terminator for all of them.

use peteqs_diagnostic::errors::unclosed_block;
use peteqs_diagnostic::InterpretResult;
use peteqs_ir::{Keyword, Line};

/// Block-structured statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    If,
    For,
    While,
    Repeat,
    Function,
    Procedure,
}

impl BlockKind {
    /// Block kind opened by a leading keyword.
    pub const fn from_opener(kw: Keyword) -> Option<Self> {
        match kw {
            Keyword::Se => Some(Self::If),
            Keyword::Para => Some(Self::For),
            Keyword::Enquanto => Some(Self::While),
            Keyword::Repita => Some(Self::Repeat),
            Keyword::Funcao => Some(Self::Function),
            Keyword::Procedimento => Some(Self::Procedure),
            _ => None,
        }
    }

    /// Keyword that opens the block and follows `FIM` to close it.
    pub const fn opener(self) -> Keyword {
        match self {
            Self::If => Keyword::Se,
            Self::For => Keyword::Para,
            Self::While => Keyword::Enquanto,
            Self::Repeat => Keyword::Repita,
            Self::Function => Keyword::Funcao,
            Self::Procedure => Keyword::Procedimento,
        }
    }

    /// Keyword of the alternate-branch marker, if the construct has one.
    pub const fn alternate(self) -> Option<Keyword> {
        match self {
            Self::If => Some(Keyword::Senao),
            _ => None,
        }
    }

    fn opens(self, line: &Line) -> bool {
        line.leading_keyword() == Some(self.opener())
    }

    fn closes(self, line: &Line) -> bool {
        line.is_end_of(self.opener())
    }

    fn is_alternate(self, line: &Line) -> bool {
        self.alternate()
            .is_some_and(|alt| line.leading_keyword() == Some(alt))
    }
}

/// Resolved extent of a block, as indices into the scanned line slice.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BlockSpan {
    /// Index of the alternate-branch marker at the block's own depth.
    pub alt: Option<usize>,
    /// Index of the matching `FIM` line.
    pub end: usize,
}

impl BlockSpan {
    /// Index range of the primary body, given the opener index.
    pub fn body(&self, start: usize) -> std::ops::Range<usize> {
        start + 1..self.alt.unwrap_or(self.end)
    }

    /// Index range of the alternate body, if any.
    pub fn alt_body(&self) -> Option<std::ops::Range<usize>> {
        self.alt.map(|alt| alt + 1..self.end)
    }
}

/// Find the `FIM` that closes the block opened at `lines[start]`.
///
/// Nested blocks of the same kind raise the depth; only an alternate marker
/// seen at depth 1 belongs to this block. Running out of lines is a parse
/// error naming the construct and its opening line.
pub fn find_block_end(lines: &[Line], start: usize, kind: BlockKind) -> InterpretResult<BlockSpan> {
    let mut depth = 1usize;
    let mut alt = None;

    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if kind.opens(line) {
            depth += 1;
        } else if kind.closes(line) {
            depth -= 1;
            if depth == 0 {
                return Ok(BlockSpan { alt, end: index });
            }
        } else if depth == 1 && alt.is_none() && kind.is_alternate(line) {
            alt = Some(index);
        }
    }

    let opened_at = lines.get(start).map_or(0, |line| line.number);
    Err(unclosed_block(kind.opener().as_str(), opened_at))
}
