//! Game configuration types.
//!
//! Hosts configure the core at startup:
//! - `RoundConfig`: countdown and result-pause durations for the RPS game
//! - `TrackerConfig`: hand-tracker settings the core passes through unmodified
//!
//! Durations are never hardcoded in the round machine - they come from here.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing configuration for the rock-paper-scissors round machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// How long each counting phase runs before the round resolves.
    pub countdown: Duration,

    /// How long the result stays on screen before the next round starts.
    pub result_pause: Duration,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            countdown: Duration::from_secs(3),
            result_pause: Duration::from_secs(2),
        }
    }
}

impl RoundConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown duration.
    #[must_use]
    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }

    /// Set the post-resolution pause duration.
    #[must_use]
    pub fn with_result_pause(mut self, pause: Duration) -> Self {
        self.result_pause = pause;
        self
    }
}

/// Settings forwarded to the external hand tracker.
///
/// The core never interprets the confidence thresholds - they exist so the
/// host has one place to configure the whole pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum hands to track per frame (1 for RPS, 2 for the catch game).
    pub max_hands: usize,

    /// Minimum detection confidence, passed through to the tracker.
    pub min_detection_confidence: f32,

    /// Minimum tracking confidence, passed through to the tracker.
    pub min_tracking_confidence: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_hands: 1,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl TrackerConfig {
    /// Single-hand tracking for the RPS game.
    #[must_use]
    pub fn rps() -> Self {
        Self::default()
    }

    /// Two-hand tracking for the catch game.
    #[must_use]
    pub fn catch() -> Self {
        Self { max_hands: 2, ..Self::default() }
    }

    /// Set the maximum tracked hands (1 or 2).
    #[must_use]
    pub fn with_max_hands(mut self, max_hands: usize) -> Self {
        assert!((1..=2).contains(&max_hands), "max_hands must be 1 or 2");
        self.max_hands = max_hands;
        self
    }

    /// Set both confidence thresholds.
    #[must_use]
    pub fn with_confidence(mut self, detection: f32, tracking: f32) -> Self {
        self.min_detection_confidence = detection;
        self.min_tracking_confidence = tracking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_config_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.countdown, Duration::from_secs(3));
        assert_eq!(config.result_pause, Duration::from_secs(2));
    }

    #[test]
    fn test_round_config_builder() {
        let config = RoundConfig::new()
            .with_countdown(Duration::from_secs(5))
            .with_result_pause(Duration::from_millis(1500));

        assert_eq!(config.countdown, Duration::from_secs(5));
        assert_eq!(config.result_pause, Duration::from_millis(1500));
    }

    #[test]
    fn test_tracker_presets() {
        assert_eq!(TrackerConfig::rps().max_hands, 1);
        assert_eq!(TrackerConfig::catch().max_hands, 2);

        let config = TrackerConfig::rps().with_confidence(0.7, 0.6);
        assert_eq!(config.min_detection_confidence, 0.7);
        assert_eq!(config.min_tracking_confidence, 0.6);
    }

    #[test]
    #[should_panic(expected = "max_hands must be 1 or 2")]
    fn test_tracker_rejects_zero_hands() {
        let _ = TrackerConfig::default().with_max_hands(0);
    }
}
