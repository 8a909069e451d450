//! Transient notifications
//!
//! A single toast slot with a fixed display window. Showing a new toast
//! replaces the pending one and discards its deadline, so a stale
//! dismissal can never clear a newer message. Time is passed in by the
//! caller so tests control it.

use std::time::{Duration, Instant};

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

/// The single transient-notification slot
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, superseding any pending toast
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        });
    }

    /// The currently visible message, if its window has not elapsed
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| now < toast.expires_at)
            .map(|toast| toast.message.as_str())
    }
}
