//! PETEQS Playground WASM Bindings
//!
//! Exposes the PETEQS interpreter to JavaScript for browser-based execution.

use std::time::Duration;

use peteqsc::{interpret_with, RunOptions, RunResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Initialize the WASM module (called once on load).
#[wasm_bindgen(start)]
pub fn init() {
    std::panic::set_hook(Box::new(console_error_panic_hook));
}

fn console_error_panic_hook(info: &std::panic::PanicHookInfo) {
    log(&info.to_string());
}

/// Browser wall clock for the loop watchdog; `Instant` is unavailable here.
fn browser_clock() -> Duration {
    Duration::try_from_secs_f64(date_now() / 1000.0).unwrap_or_default()
}

/// Run PETEQS source and return the result record as JSON.
///
/// `inputs_json` is a JSON array of strings consumed by `LEIA`; anything
/// else is treated as no input. The result has `output`, `variables` and,
/// on failure, `error: { kind, message, line? }`.
#[wasm_bindgen]
pub fn run_peteqs(source: &str, inputs_json: &str) -> String {
    run_peteqs_internal(source, inputs_json).to_json()
}

fn run_peteqs_internal(source: &str, inputs_json: &str) -> RunResult {
    let inputs: Vec<String> = serde_json::from_str(inputs_json).unwrap_or_default();
    let options = RunOptions::with_inputs(inputs).clock(browser_clock);
    interpret_with(source, options)
}

/// Get version information.
#[wasm_bindgen]
pub fn version() -> String {
    format!("PETEQS {}", env!("CARGO_PKG_VERSION"))
}

