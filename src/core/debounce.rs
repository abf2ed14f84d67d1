//! Single-slot debouncer for the search query.
//!
//! Every keystroke replaces the pending slot (cancel-and-replace), so at most
//! one pending commit exists at any time. Once the quiet period elapses with
//! no further input, `poll` hands back the trimmed text as the committed
//! query. Time is passed in by the caller, so tests never sleep and the event
//! loop decides how often to check.

use std::time::{Duration, Instant};

/// Quiet period before a search edit becomes the committed query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

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

    /// Record a new raw value, replacing (and thereby cancelling) any pending
    /// one. The commit deadline restarts from `now`.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.pending = Some((text.to_string(), now + self.window));
    }

    /// Commit the pending value if its quiet period has elapsed.
    /// Returns the trimmed text at most once per input.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|(_, d)| now >= *d);
        if due {
            self.pending.take().map(|(text, _)| text.trim().to_string())
        } else {
            None
        }
    }

    /// Discard the pending value without committing. Used on teardown so no
    /// stale commit lands after the screen is gone.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> Debouncer {
        Debouncer::new(SEARCH_DEBOUNCE)
    }

    #[test]
    fn test_commits_after_quiet_period() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.input("shoes", t0);

        assert_eq!(d.poll(t0 + Duration::from_millis(349)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(350)),
            Some("shoes".to_string())
        );
        // The slot is consumed; nothing more to commit.
        assert_eq!(d.poll(t0 + Duration::from_secs(10)), None);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_rapid_input_never_commits_intermediate_values() {
        let mut d = debouncer();
        let t0 = Instant::now();

        // Keystrokes arriving every 100ms, each within the quiet window.
        for (i, text) in ["s", "sh", "sho", "shoe"].iter().enumerate() {
            let now = t0 + Duration::from_millis(100 * i as u64);
            d.input(text, now);
            assert_eq!(d.poll(now), None);
        }

        // Only the final value commits, 350ms after the last keystroke.
        let last = t0 + Duration::from_millis(300);
        assert_eq!(d.poll(last + Duration::from_millis(349)), None);
        assert_eq!(
            d.poll(last + Duration::from_millis(350)),
            Some("shoe".to_string())
        );
    }

    #[test]
    fn test_committed_value_is_trimmed() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.input("  blue hat  ", t0);
        assert_eq!(
            d.poll(t0 + SEARCH_DEBOUNCE),
            Some("blue hat".to_string())
        );
    }

    #[test]
    fn test_cancel_discards_pending_value() {
        let mut d = debouncer();
        let t0 = Instant::now();
        d.input("stale", t0);
        d.cancel();
        assert_eq!(d.poll(t0 + Duration::from_secs(1)), None);
    }
}
