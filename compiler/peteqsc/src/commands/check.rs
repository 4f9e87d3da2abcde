//! The `check` command: parse without executing.

use super::read_file;

/// Parse a file and report its shape, or the first parse error.
pub fn check_file(path: &str) {
    let source = read_file(path);
    match peteqs_parse::parse(&source) {
        Ok(program) => {
            println!(
                "'{path}': {} instruções no programa principal",
                program.main.len()
            );
            let names = program.registry.names();
            if !names.is_empty() {
                println!("Sub-rotinas:");
                for name in names {
                    if let Some(callable) = program.registry.get(name) {
                        println!(
                            "  {} {}({}) [linha {}]",
                            callable.kind.keyword(),
                            name,
                            callable.params.join(", "),
                            callable.line
                        );
                    }
                }
            }
        }
        Err(err) => {
            eprintln!("{}", crate::RunError::from(err));
            std::process::exit(1);
        }
    }
}
