//! Keyword resolution.
//!
//! PETEQS keywords are case-insensitive and tolerate missing accents, so
//! `ENTÃO`, `ENTAO` and `então` all resolve to [`Keyword::Entao`]. Lookup
//! folds the word to unaccented uppercase, then matches against the folded
//! spellings of the keywords of that length.

use peteqs_ir::Keyword;

/// Fold a word to unaccented uppercase.
pub fn fold(word: &str) -> String {
    word.chars()
        .flat_map(char::to_uppercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        _ => c,
    }
}

/// Look up a keyword by source text.
///
/// Returns `None` for ordinary identifiers. Words whose length falls outside
/// the 1-12 char keyword range are rejected without folding.
pub fn lookup(word: &str) -> Option<Keyword> {
    let len = word.chars().count();
    if !(1..=12).contains(&len) {
        return None;
    }
    if !word.chars().next().is_some_and(char::is_alphabetic) {
        return None;
    }

    let folded = fold(word);
    match len {
        1 => match folded.as_str() {
            "E" => Some(Keyword::E),
            _ => None,
        },
        2 => match folded.as_str() {
            "SE" => Some(Keyword::Se),
            "OU" => Some(Keyword::Ou),
            _ => None,
        },
        3 => match folded.as_str() {
            "FIM" => Some(Keyword::Fim),
            "ATE" => Some(Keyword::Ate),
            "NAO" => Some(Keyword::Nao),
            "MOD" => Some(Keyword::Mod),
            "DIV" => Some(Keyword::Div),
            _ => None,
        },
        4 => match folded.as_str() {
            "PARA" => Some(Keyword::Para),
            "FACA" => Some(Keyword::Faca),
            "LEIA" => Some(Keyword::Leia),
            _ => None,
        },
        5 => match folded.as_str() {
            "ENTAO" => Some(Keyword::Entao),
            "SENAO" => Some(Keyword::Senao),
            "VEZES" => Some(Keyword::Vezes),
            "FALSO" => Some(Keyword::Falso),
            _ => None,
        },
        6 => match folded.as_str() {
            "REPITA" => Some(Keyword::Repita),
            "FUNCAO" => Some(Keyword::Funcao),
            _ => None,
        },
        7 => match folded.as_str() {
            "RETORNE" => Some(Keyword::Retorne),
            "IMPRIMA" => Some(Keyword::Imprima),
            _ => None,
        },
        8 => match folded.as_str() {
            "ENQUANTO" => Some(Keyword::Enquanto),
            _ => None,
        },
        9 => match folded.as_str() {
            "IMPRIMALN" => Some(Keyword::ImprimaLn),
            _ => None,
        },
        10 => match folded.as_str() {
            "VERDADEIRO" => Some(Keyword::Verdadeiro),
            _ => None,
        },
        12 => match folded.as_str() {
            "PROCEDIMENTO" => Some(Keyword::Procedimento),
            _ => None,
        },
        _ => None,
    }
}
