//! PETEQS - interpreter for Portuguese teaching pseudocode.
//!
//! Embedding API over the interpreter pipeline:
//!
//! ```text
//! source -> normalize -> segment -> lex -> parse (+ registry) -> execute
//! ```
//!
//! [`interpret`] never panics on bad programs and never returns an `Err`:
//! every fault is folded into [`RunResult::error`], alongside the output
//! produced before it.

pub mod commands;
mod options;
mod outcome;

use std::sync::Once;

use peteqs_eval::{stdout_handler, InputHandler, InterpreterBuilder};

pub use options::{InputSource, RunOptions};
pub use outcome::{RunError, RunResult};

/// Run `source` with pre-supplied `LEIA` inputs and default limits.
pub fn interpret<I, S>(source: &str, inputs: I) -> RunResult
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    interpret_with(source, RunOptions::with_inputs(inputs))
}

/// Run `source` with explicit options.
///
/// Each call builds a fresh program, registry and environment; nothing
/// carries over between runs.
#[tracing::instrument(level = "debug", skip_all)]
pub fn interpret_with(source: &str, options: RunOptions) -> RunResult {
    let program = match peteqs_parse::parse(source) {
        Ok(program) => program,
        Err(err) => return RunResult::new("", Some(err), Default::default()),
    };

    let mut builder = InterpreterBuilder::new(&program.registry)
        .watchdog(options.timeout)
        .max_call_depth(options.max_call_depth);
    builder = match options.input {
        InputSource::Queue(values) => builder.inputs(values),
        InputSource::Stdin => builder.input_handler(InputHandler::Stdin),
    };
    if options.stream {
        builder = builder.print_handler(stdout_handler());
    }
    if let Some(clock) = options.clock {
        builder = builder.clock(clock);
    }
    if let Some(token) = options.cancel {
        builder = builder.cancel_token(token);
    }

    let mut interpreter = builder.build();
    let result = interpreter.run(&program.main);
    if let Err(err) = &result {
        tracing::debug!(kind = %err.kind, line = ?err.line, "run failed");
    }
    RunResult::new(&interpreter.output(), result.err(), interpreter.variables())
}

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Example: `RUST_LOG=peteqs_eval=trace peteqs run prog.ptq`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
