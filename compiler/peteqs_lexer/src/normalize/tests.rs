use super::*;
use crate::segment::segment;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn texts(source: &str) -> Vec<String> {
    segment(&normalize(source))
        .into_iter()
        .map(|line| line.text)
        .collect()
}

#[test]
fn line_endings_are_unified() {
    let lines = normalize("x <- 1\r\ny <- 2\rz <- 3");
    let numbers: Vec<u32> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(lines[2].text, "z <- 3");
}

#[test]
fn comments_are_stripped_outside_quotes() {
    assert_eq!(
        texts("x <- 1 // comentário\nIMPRIMA 'http://site' // fim\ny <- 2"),
        vec!["x <- 1", "IMPRIMA 'http://site'", "y <- 2"]
    );
}

#[test]
fn assignment_glyphs_are_canonical() {
    assert_eq!(texts("a ← 1\nb := 2\nc <- 3"), vec!["a <- 1", "b <- 2", "c <- 3"]);
}

#[test]
fn glyphs_inside_strings_are_untouched() {
    assert_eq!(texts("IMPRIMA 'a := b ← c'\nx <- 1"), vec!["IMPRIMA 'a := b ← c'", "x <- 1"]);
}

#[test]
fn keywords_get_canonical_spelling() {
    assert_eq!(
        texts("se x > 1 entao\nimprimaln 'sim'\nfim se"),
        vec!["SE x > 1 ENTÃO", "IMPRIMALN 'sim'", "FIM SE"]
    );
}

#[test]
fn single_line_program_is_reflowed() {
    assert_eq!(
        texts("PARA i <- 1 ATÉ 3 FAÇA IMPRIMALN i FIM PARA"),
        vec!["PARA i <- 1 ATÉ 3 FAÇA", "IMPRIMALN i", "FIM PARA"]
    );
}

#[test]
fn reflow_breaks_after_fim_pair_and_else() {
    assert_eq!(
        texts("SE x > 1 ENTÃO IMPRIMA 'a' SENÃO IMPRIMA 'b' FIM SE x <- 2"),
        vec![
            "SE x > 1 ENTÃO",
            "IMPRIMA 'a'",
            "SENÃO",
            "IMPRIMA 'b'",
            "FIM SE",
            "x <- 2",
        ]
    );
}

#[test]
fn reflow_keeps_the_physical_line_number() {
    let lines = segment(&normalize("\n\nREPITA 2 VEZES IMPRIMA 'x' FIM REPITA\n"));
    assert!(lines.iter().all(|l| l.number == 3));
    assert_eq!(lines.len(), 3);
}

#[test]
fn keywords_inside_strings_do_not_reflow() {
    assert_eq!(texts("IMPRIMA 'SE FIM PARA'"), vec!["IMPRIMA 'SE FIM PARA'"]);
}

#[test]
fn multi_line_programs_are_not_reflowed() {
    assert_eq!(
        texts("IMPRIMA 1 IMPRIMA 2\nx <- 1"),
        vec!["IMPRIMA 1 IMPRIMA 2", "x <- 1"]
    );
}

proptest! {
    #[test]
    fn segmented_lines_are_trimmed_and_ordered(
        source in proptest::collection::vec("[a-z0-9 <>=+'/]{0,12}", 1..8)
            .prop_map(|lines| lines.join("\n"))
    ) {
        let physical = u32::try_from(source.split('\n').count()).unwrap_or(u32::MAX);
        let lines = segment(&normalize(&source));
        let mut previous = 0;
        for line in &lines {
            prop_assert!(!line.text.is_empty());
            prop_assert_eq!(line.text.trim(), line.text.as_str());
            prop_assert!(!line.text.contains('\n'));
            prop_assert!(line.number >= previous);
            prop_assert!(line.number >= 1 && line.number <= physical);
            previous = line.number;
        }
    }
}
