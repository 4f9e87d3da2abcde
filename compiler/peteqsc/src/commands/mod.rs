//! Command handlers for the `peteqs` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! `read_file` live here in the module root.

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::lex_file;
pub use run::{parse_run_flags, run_file, RunFlags};

/// Read a source file or exit with a readable message.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("arquivo não encontrado: '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permissão negada ao ler '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' não está codificado em UTF-8")
                }
                _ => format!("erro ao ler '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
