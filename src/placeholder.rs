//! Rotating hint text for the note input.
//!
//! The rotator owns its timer task: `start` spawns it, `stop` (or drop)
//! aborts it. Pages read whichever hint is current when they render.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const PLACEHOLDERS: [&str; 10] = [
    "What's weighing on you today?",
    "Spill it all here, no judgment...",
    "Your thoughts are safe in this space",
    "What's been on your mind?",
    "Let it all out, one thought at a time",
    "What's bothering you right now?",
    "Dump whatever's in your head",
    "What do you need to get off your chest?",
    "Your mental clutter belongs here",
    "What's eating at you?",
];

pub struct PlaceholderRotator {
    index: Arc<AtomicUsize>,
    period: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PlaceholderRotator {
    pub fn new(period: Duration) -> Self {
        Self {
            index: Arc::new(AtomicUsize::new(0)),
            period,
            task: Mutex::new(None),
        }
    }

    pub fn current(&self) -> &'static str {
        PLACEHOLDERS[self.index.load(Ordering::Relaxed) % PLACEHOLDERS.len()]
    }

    /// Step to the next hint, wrapping around. Returns the new index.
    pub fn advance(&self) -> usize {
        advance_index(&self.index)
    }

    /// Spawn the timer task. Does nothing if it is already running.
    /// Must be called from within a tokio runtime.
    pub fn start(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if task.as_ref().is_some_and(|t| !t.is_finished()) {
            return;
        }

        let index = Arc::clone(&self.index);
        let period = self.period;
        *task = Some(tokio::spawn(async move {
            let mut ticker =
                tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                ticker.tick().await;
                advance_index(&index);
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, "placeholder rotation started");
    }

    pub fn stop(&self) {
        let mut task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(handle) = task.take() {
            handle.abort();
            tracing::debug!("placeholder rotation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        let task = self.task.lock().unwrap_or_else(|e| e.into_inner());
        task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for PlaceholderRotator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn advance_index(index: &AtomicUsize) -> usize {
    let mut current = index.load(Ordering::Relaxed);
    loop {
        let next = (current + 1) % PLACEHOLDERS.len();
        match index.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => current = actual,
        }
    }
}
