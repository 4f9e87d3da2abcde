//! Wall-clock guard for loops.
//!
//! Each loop statement starts its own [`LoopClock`] on entry and checks it
//! before every iteration. Exceeding the ceiling aborts the run with a
//! `TimeoutError`; a set cancel token aborts it with a `RuntimeError`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use peteqs_diagnostic::errors::{cancelled, loop_timeout};
use peteqs_diagnostic::InterpretResult;

/// Ceiling applied when none is configured.
pub const DEFAULT_CEILING: Duration = Duration::from_secs(30);

/// Monotonic time since an arbitrary fixed origin.
pub type Clock = fn() -> Duration;

/// Process-wide monotonic clock.
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
pub fn monotonic_clock() -> Duration {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed()
}

/// `std::time::Instant` is unavailable on `wasm32-unknown-unknown`; the
/// embedder installs its own clock through the builder. Without one, time
/// stands still and only the cancel token can stop a loop.
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub fn monotonic_clock() -> Duration {
    Duration::ZERO
}

/// Loop time limit plus optional external cancellation.
#[derive(Clone, Debug)]
pub struct Watchdog {
    ceiling: Duration,
    clock: Clock,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new(DEFAULT_CEILING)
    }
}

impl Watchdog {
    pub fn new(ceiling: Duration) -> Self {
        Watchdog {
            ceiling,
            clock: monotonic_clock,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: Arc<AtomicBool>) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn ceiling(&self) -> Duration {
        self.ceiling
    }

    /// Start timing a loop.
    ///
    /// The returned clock is detached from `self`, so the loop body is free
    /// to borrow the interpreter mutably.
    pub fn start(&self) -> LoopClock {
        LoopClock {
            watchdog: self.clone(),
            started: (self.clock)(),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|token| token.load(Ordering::Relaxed))
    }
}

/// Timer for one loop statement.
pub struct LoopClock {
    watchdog: Watchdog,
    started: Duration,
}

impl LoopClock {
    /// Fail if the loop has run past the ceiling or the run was cancelled.
    pub fn check(&self) -> InterpretResult<()> {
        if self.watchdog.is_cancelled() {
            tracing::warn!("execution cancelled by embedder");
            return Err(cancelled());
        }
        let elapsed = (self.watchdog.clock)().saturating_sub(self.started);
        if elapsed > self.watchdog.ceiling {
            tracing::warn!(
                elapsed_ms = elapsed.as_millis(),
                ceiling_ms = self.watchdog.ceiling.as_millis(),
                "loop watchdog tripped"
            );
            return Err(loop_timeout(self.watchdog.ceiling));
        }
        Ok(())
    }
}
