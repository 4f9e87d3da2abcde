//! The `lex` command for inspecting the front end.

use peteqs_ir::Token;

use super::read_file;

/// Lex a file and display each statement line with its tokens.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let lines = match peteqs_lexer::tokenize(&source) {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    println!("Tokens de '{path}' ({} linhas):", lines.len());
    for line in &lines {
        println!("{:>4} | {}", line.number, line.text);
        for Token { kind, span } in &line.tokens {
            println!("     |   {} @ coluna {}", kind.describe(), span.column());
        }
    }
}
