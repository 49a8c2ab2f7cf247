use std::time::{Duration, Instant};

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two clear gestures on the same buffer at most this far apart form a
/// double tap
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(400);

/// What a clear gesture empties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearScope {
    /// Only the buffer the gesture was made on
    #[display(fmt = "this buffer")]
    ThisBuffer,

    /// Both buffers
    #[display(fmt = "both buffers")]
    BothBuffers,
}

/// Double-tap tracking for one buffer.
///
/// The state is armed while the last gesture is inside the window. Every
/// gesture re-arms it, so a run of rapid taps keeps clearing both buffers
/// until the user pauses for longer than [`DOUBLE_TAP_WINDOW`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearGestureState {
    last_trigger: Option<Instant>,
}

impl ClearGestureState {
    /// Get the time of the previous gesture
    pub fn last_trigger(&self) -> Option<Instant> {
        self.last_trigger
    }

    /// Whether a gesture at `now` would be a double tap. A `now` earlier
    /// than the previous gesture counts as no time elapsed.
    pub fn is_armed(&self, now: Instant) -> bool {
        self.last_trigger
            .is_some_and(|last| now.saturating_duration_since(last) <= DOUBLE_TAP_WINDOW)
    }

    /// Classify a gesture at `now` and re-arm
    pub fn register(&mut self, now: Instant) -> ClearScope {
        let scope = if self.is_armed(now) {
            ClearScope::BothBuffers
        } else {
            ClearScope::ThisBuffer
        };
        self.last_trigger = Some(now);
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tap_is_single() {
        let mut state = ClearGestureState::default();
        let t0 = Instant::now();

        assert!(!state.is_armed(t0));
        assert_eq!(state.register(t0), ClearScope::ThisBuffer);
        assert_eq!(state.last_trigger(), Some(t0));
    }

    #[test]
    fn test_window_boundary() {
        let t0 = Instant::now();
        let mut state = ClearGestureState::default();
        state.register(t0);

        assert!(state.is_armed(t0 + DOUBLE_TAP_WINDOW));
        assert!(!state.is_armed(t0 + DOUBLE_TAP_WINDOW + Duration::from_millis(1)));
    }

    #[test]
    fn test_rapid_taps_stay_armed() {
        let t0 = Instant::now();
        let mut state = ClearGestureState::default();

        let scopes: Vec<_> = [0, 300, 600, 900, 1400]
            .into_iter()
            .map(|ms| state.register(t0 + Duration::from_millis(ms)))
            .collect();

        assert_eq!(
            scopes,
            vec![
                ClearScope::ThisBuffer,
                ClearScope::BothBuffers,
                ClearScope::BothBuffers,
                ClearScope::BothBuffers,
                ClearScope::ThisBuffer,
            ]
        );
    }

    #[test]
    fn test_earlier_timestamp_counts_as_double_tap() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut state = ClearGestureState::default();
        state.register(t0);

        assert_eq!(
            state.register(t0 - Duration::from_millis(50)),
            ClearScope::BothBuffers
        );
    }
}
