//! Per-run configuration for [`crate::interpret_with`].

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use peteqs_eval::{Clock, DEFAULT_CEILING, DEFAULT_MAX_CALL_DEPTH};

/// Where `LEIA` takes its values from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Values supplied up front, consumed in order.
    Queue(Vec<String>),
    /// One line of stdin per value (interactive CLI).
    Stdin,
}

impl Default for InputSource {
    fn default() -> Self {
        InputSource::Queue(Vec::new())
    }
}

/// Knobs for one `interpret_with` call.
///
/// The defaults match [`crate::interpret`]: buffered output, 30 s loop
/// ceiling, 1000 nested calls.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub input: InputSource,
    /// Write output straight to stdout instead of capturing it.
    pub stream: bool,
    /// Wall-clock ceiling for each loop statement.
    pub timeout: Duration,
    pub max_call_depth: usize,
    /// Replacement time source, for targets without `Instant`.
    pub clock: Option<Clock>,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            input: InputSource::default(),
            stream: false,
            timeout: DEFAULT_CEILING,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            clock: None,
            cancel: None,
        }
    }
}

impl RunOptions {
    /// Options with a pre-supplied input queue.
    pub fn with_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RunOptions {
            input: InputSource::Queue(inputs.into_iter().map(Into::into).collect()),
            ..RunOptions::default()
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel = Some(token);
        self
    }
}
