//! Search-input debouncing
//!
//! Collapses bursts of input events into a single value: each submission
//! resets the window, and the latest text is released only once the window
//! elapses quietly.

use std::time::{Duration, Instant};

/// Window applied to purchase-history search input
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Submit a new value, restarting the window
    pub fn submit(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now + self.window));
    }

    /// Release the pending value if its window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(text, _)| text),
            _ => None,
        }
    }

    /// Release the pending value immediately, window or not
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_latest_value() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        debouncer.submit("s", start);
        debouncer.submit("se", start + Duration::from_millis(50));
        debouncer.submit("sec", start + Duration::from_millis(100));

        // Nothing released while events keep arriving
        assert_eq!(debouncer.poll(start + Duration::from_millis(120)), None);

        // Once the window elapses quietly, only the latest value comes out
        let quiet = start + Duration::from_millis(100) + SEARCH_DEBOUNCE;
        assert_eq!(debouncer.poll(quiet), Some("sec".to_string()));

        // And only once
        assert_eq!(debouncer.poll(quiet + Duration::from_millis(1)), None);
    }

    #[test]
    fn test_flush_releases_immediately() {
        let mut debouncer = Debouncer::default();
        debouncer.submit("vpn", Instant::now());
        assert_eq!(debouncer.flush(), Some("vpn".to_string()));
        assert_eq!(debouncer.flush(), None);
    }
}
