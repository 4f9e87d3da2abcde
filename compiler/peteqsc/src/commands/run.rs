//! The `run` command: execute a PETEQS source file.

use std::time::Duration;

use crate::{interpret_with, InputSource, RunOptions};

use super::read_file;

/// Parsed `run` flags.
#[derive(Clone, Debug)]
pub struct RunFlags {
    pub options: RunOptions,
    /// Print the result record as JSON instead of plain output.
    pub json: bool,
}

/// Parse the flags following `run <file>`.
///
/// Without any `--input=`, `LEIA` reads stdin and output is streamed so
/// prompts appear before the read. `--json` always captures output.
pub fn parse_run_flags(args: &[String]) -> Result<RunFlags, String> {
    let mut options = RunOptions::default();
    let mut inputs = Vec::new();
    let mut json = false;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--input=") {
            inputs.push(value.to_string());
        } else if arg == "--json" {
            json = true;
        } else if arg == "--stream" {
            options.stream = true;
        } else if let Some(secs) = arg.strip_prefix("--timeout=") {
            let secs: f64 = secs
                .parse()
                .map_err(|_| format!("valor inválido para --timeout: '{secs}'"))?;
            options.timeout = Duration::try_from_secs_f64(secs)
                .map_err(|_| format!("valor inválido para --timeout: '{secs}'"))?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.max_call_depth = depth
                .parse()
                .map_err(|_| format!("valor inválido para --max-depth: '{depth}'"))?;
        } else {
            return Err(format!("opção desconhecida: {arg}"));
        }
    }

    if inputs.is_empty() {
        options.input = InputSource::Stdin;
        options.stream = true;
    } else {
        options.input = InputSource::Queue(inputs);
    }
    if json {
        options.stream = false;
    }

    Ok(RunFlags { options, json })
}

/// Run a source file, printing its output and exiting with status 1 on
/// fault.
pub fn run_file(path: &str, flags: RunFlags) {
    let source = read_file(path);
    let streamed = flags.options.stream;
    let result = interpret_with(&source, flags.options);

    if flags.json {
        println!("{}", result.to_json());
    } else {
        if !streamed && !result.output.is_empty() {
            println!("{}", result.output);
        }
        if let Some(error) = &result.error {
            if streamed {
                // Streamed output may end mid-line.
                println!();
            }
            eprintln!("{error}");
        }
    }

    if !result.is_success() {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
