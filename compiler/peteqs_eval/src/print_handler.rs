//! Output sink for `IMPRIMA` / `IMPRIMALN`.
//!
//! - `Stdout`: streams to the terminal as the program runs (CLI `--stream`)
//! - `Buffer`: captures everything for the result record (library, WASM, tests)
//!
//! Enum dispatch keeps the per-print path free of vtable calls.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn print(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // Write failures are ignored.
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }

    pub fn println(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }
}

/// Accumulates output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    pub fn println(&self, text: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(text);
        buf.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Output sink selected at interpreter construction.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Append text with no line terminator.
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout(h) => h.print(text),
            Self::Buffer(h) => h.print(text),
        }
    }

    /// Append text followed by `\n`.
    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout(h) => h.println(text),
            Self::Buffer(h) => h.println(text),
        }
    }

    /// Captured output; empty for a streaming sink.
    pub fn output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.output(),
        }
    }
}

/// Print handler shared between the interpreter and its embedder.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
