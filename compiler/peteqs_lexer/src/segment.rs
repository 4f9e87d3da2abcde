//! Statement segmentation.
//!
//! Splits normalized source into one statement per line, keeping the
//! physical line number each statement came from.

/// A trimmed source line tagged with its 1-based position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    pub number: u32,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        SourceLine {
            number,
            text: text.into(),
        }
    }
}

/// Split normalized lines into trimmed, non-empty statement lines.
///
/// A normalized line may hold several statements separated by `\n` when it
/// was reflowed; each piece keeps the number of the line it came from.
pub fn segment(lines: &[SourceLine]) -> Vec<SourceLine> {
    lines
        .iter()
        .flat_map(|line| {
            line.text
                .split('\n')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(move |piece| SourceLine::new(line.number, piece))
        })
        .collect()
}
