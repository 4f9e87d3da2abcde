//! PETEQS Playground WASI Binary
//!
//! Reads PETEQS source from stdin, executes it, prints the output to stdout.
//! Designed to run in browser via @wasmer/wasi. `LEIA` inputs are passed as
//! command-line arguments.

use std::io::{self, Read};

fn main() {
    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Erro ao ler a entrada: {e}");
        std::process::exit(1);
    }

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let result = peteqsc::interpret(&source, inputs);

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    if let Some(error) = &result.error {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
