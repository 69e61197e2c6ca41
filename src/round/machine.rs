//! The round state machine for the gesture-matching game.
//!
//! ## Phases
//!
//! ```text
//! Waiting --first tick--> Counting --countdown expires--> Resolved
//!    ^                       ^                               |
//!    |                       |                          (next tick)
//!    |                       +--pause expires-- Paused <-----+
//! ```
//!
//! `Waiting` exists only before the first tick; the reference behavior
//! starts counting immediately and continuously, so the first tick
//! enters `Counting` right away. `Resolved` is reported exactly on the
//! transition tick, `Paused` on every following tick inside the pause
//! window; both display the same result.
//!
//! Timestamps are `Duration` offsets from an epoch the caller picks
//! (typically `Instant` at session start). The machine never reads a
//! clock and expects `now` to be monotonic.

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::outcome::{resolve, Outcome};
use crate::classifier::{Gesture, PlayerSign};
use crate::core::config::RoundConfig;
use crate::core::rng::GameRng;

const THROWS: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

/// Timing phase of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Machine created, no tick yet.
    Waiting,
    /// Countdown running; the round resolves when it expires.
    Counting,
    /// The tick on which the round resolved.
    Resolved,
    /// Result on display until the pause expires.
    Paused,
}

/// Read-only projection of the machine after one tick.
///
/// `opponent` and `outcome` are `None` outside {Resolved, Paused};
/// the label helpers render the sentinels the way the reference UI
/// spells them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    /// Whole seconds left on the countdown, clamped at zero.
    pub countdown: u64,
    /// The player's most recently sampled sign.
    pub player: PlayerSign,
    /// The opponent's throw, present while the result is on display.
    pub opponent: Option<Gesture>,
    /// The round outcome, present while the result is on display.
    pub outcome: Option<Outcome>,
}

impl RoundSnapshot {
    /// Opponent display label: the throw, or "waiting".
    #[must_use]
    pub fn opponent_label(&self) -> String {
        match self.opponent {
            Some(gesture) => gesture.to_string(),
            None => "waiting".to_string(),
        }
    }

    /// Outcome display label: the result, or "Waiting...".
    #[must_use]
    pub fn outcome_label(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => "Waiting...".to_string(),
        }
    }
}

/// Internal mutable round state. One instance per machine, mutated only
/// by `tick`.
#[derive(Clone, Debug)]
struct RoundState {
    phase: RoundPhase,
    /// Start of the current phase; the resolution time while the result
    /// is on display.
    phase_start: Duration,
    player: PlayerSign,
    opponent: Option<Gesture>,
    outcome: Option<Outcome>,
}

/// Round sequencing for the gesture-matching game.
///
/// Owns the only mutable round state in a session. Single-threaded and
/// frame-driven: the host calls `tick` once per processed frame with
/// the current timestamp and the classifier's sign for that frame.
#[derive(Clone, Debug)]
pub struct RoundMachine {
    config: RoundConfig,
    rng: GameRng,
    state: RoundState,
}

impl RoundMachine {
    /// Create a machine with the given timing configuration and an
    /// injected RNG for the opponent's draws.
    #[must_use]
    pub fn new(config: RoundConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            state: RoundState {
                phase: RoundPhase::Waiting,
                phase_start: Duration::ZERO,
                player: PlayerSign::Waiting,
                opponent: None,
                outcome: None,
            },
        }
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Advance the machine by one frame.
    ///
    /// Samples the player's sign, applies any due phase transition, and
    /// returns the resulting snapshot. The sign present on the tick
    /// where the countdown expires is the one the round is scored with;
    /// earlier signs within the phase are overwritten.
    pub fn tick(&mut self, now: Duration, player: PlayerSign) -> RoundSnapshot {
        self.state.player = player;

        match self.state.phase {
            RoundPhase::Waiting => {
                self.state.phase = RoundPhase::Counting;
                self.state.phase_start = now;
            }
            RoundPhase::Resolved => {
                // The result stays on display; only the reported phase moves on.
                self.state.phase = RoundPhase::Paused;
            }
            RoundPhase::Counting | RoundPhase::Paused => {}
        }

        let elapsed = now.saturating_sub(self.state.phase_start);

        match self.state.phase {
            RoundPhase::Counting if elapsed >= self.config.countdown => {
                self.resolve_round(now);
            }
            RoundPhase::Paused if elapsed >= self.config.result_pause => {
                self.state.phase = RoundPhase::Counting;
                self.state.phase_start = now;
                self.state.opponent = None;
                self.state.outcome = None;
            }
            _ => {}
        }

        self.snapshot(now)
    }

    /// Current projection without advancing the machine.
    #[must_use]
    pub fn snapshot(&self, now: Duration) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.state.phase,
            countdown: self.countdown(now),
            player: self.state.player,
            opponent: self.state.opponent,
            outcome: self.state.outcome,
        }
    }

    fn resolve_round(&mut self, now: Duration) {
        let opponent = THROWS[self.rng.gen_range_usize(0..THROWS.len())];
        let outcome = resolve(self.state.player, opponent);

        debug!(
            "round resolved: player={} opponent={} outcome={}",
            self.state.player, opponent, outcome
        );

        self.state.phase = RoundPhase::Resolved;
        self.state.phase_start = now;
        self.state.opponent = Some(opponent);
        self.state.outcome = Some(outcome);
    }

    fn countdown(&self, now: Duration) -> u64 {
        match self.state.phase {
            // Full countdown before the first tick starts the clock.
            RoundPhase::Waiting => self.config.countdown.as_secs(),
            RoundPhase::Counting => {
                let elapsed = now.saturating_sub(self.state.phase_start);
                self.config.countdown.saturating_sub(elapsed).as_secs()
            }
            RoundPhase::Resolved | RoundPhase::Paused => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    fn millis(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn machine() -> RoundMachine {
        RoundMachine::new(RoundConfig::default(), GameRng::new(42))
    }

    #[test]
    fn test_first_tick_starts_counting() {
        let mut m = machine();
        let snap = m.tick(secs(10), PlayerSign::Waiting);

        assert_eq!(snap.phase, RoundPhase::Counting);
        assert_eq!(snap.countdown, 3);
        assert_eq!(snap.opponent, None);
        assert_eq!(snap.outcome, None);
    }

    #[test]
    fn test_countdown_floors_seconds() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Waiting);

        assert_eq!(m.tick(millis(500), PlayerSign::Waiting).countdown, 2);
        assert_eq!(m.tick(millis(1400), PlayerSign::Waiting).countdown, 1);
        assert_eq!(m.tick(millis(2999), PlayerSign::Waiting).countdown, 0);
        // Still counting: expiry is at 3000 ms, not before.
        assert_eq!(m.snapshot(millis(2999)).phase, RoundPhase::Counting);
    }

    #[test]
    fn test_resolves_exactly_at_expiry() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Waiting);

        let snap = m.tick(secs(3), PlayerSign::Seen(Gesture::Rock));
        assert_eq!(snap.phase, RoundPhase::Resolved);
        assert!(matches!(
            snap.opponent,
            Some(Gesture::Rock | Gesture::Paper | Gesture::Scissors)
        ));
        assert!(snap.outcome.is_some());
        assert_eq!(snap.countdown, 0);
    }

    #[test]
    fn test_sign_at_expiry_wins_over_earlier_signs() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Seen(Gesture::Paper));
        m.tick(secs(1), PlayerSign::Seen(Gesture::Scissors));

        // The sign sampled on the expiry tick is the one scored.
        let snap = m.tick(secs(3), PlayerSign::Seen(Gesture::Rock));
        assert_eq!(snap.player, PlayerSign::Seen(Gesture::Rock));
    }

    #[test]
    fn test_resolved_then_paused_keeps_result() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Seen(Gesture::Rock));
        let resolved = m.tick(secs(3), PlayerSign::Seen(Gesture::Rock));

        let paused = m.tick(secs(4), PlayerSign::Waiting);
        assert_eq!(paused.phase, RoundPhase::Paused);
        assert_eq!(paused.opponent, resolved.opponent);
        assert_eq!(paused.outcome, resolved.outcome);
        assert_eq!(paused.countdown, 0);
    }

    #[test]
    fn test_pause_expiry_restarts_countdown() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Seen(Gesture::Rock));
        m.tick(secs(3), PlayerSign::Seen(Gesture::Rock));

        let snap = m.tick(secs(5), PlayerSign::Waiting);
        assert_eq!(snap.phase, RoundPhase::Counting);
        assert_eq!(snap.countdown, 3);
        assert_eq!(snap.opponent, None);
        assert_eq!(snap.outcome, None);
    }

    #[test]
    fn test_machine_cycles_indefinitely() {
        let mut m = machine();
        let mut resolutions = 0;

        // 30 seconds at 10 ticks/second; each cycle is 5 seconds.
        for tick_index in 0..300 {
            let now = millis(tick_index * 100);
            let snap = m.tick(now, PlayerSign::Seen(Gesture::Rock));
            if snap.phase == RoundPhase::Resolved {
                resolutions += 1;
            }
        }

        assert_eq!(resolutions, 6);
    }

    #[test]
    fn test_countdown_non_increasing_within_phase() {
        let mut m = machine();
        m.tick(Duration::ZERO, PlayerSign::Waiting);

        let mut last = u64::MAX;
        for ms in (0..3000).step_by(64) {
            let snap = m.tick(millis(ms), PlayerSign::Waiting);
            assert!(snap.countdown <= last);
            last = snap.countdown;
        }
    }

    #[test]
    fn test_same_seed_same_opponents() {
        let run = |seed: u64| -> Vec<Gesture> {
            let mut m = RoundMachine::new(RoundConfig::default(), GameRng::new(seed));
            let mut throws = Vec::new();
            for tick_index in 0..300 {
                let snap = m.tick(millis(tick_index * 100), PlayerSign::Seen(Gesture::Paper));
                if snap.phase == RoundPhase::Resolved {
                    throws.push(snap.opponent.unwrap());
                }
            }
            throws
        };

        assert_eq!(run(7), run(7));
        assert_eq!(run(7).len(), 6);
    }

    #[test]
    fn test_custom_durations() {
        let config = RoundConfig::new()
            .with_countdown(secs(1))
            .with_result_pause(millis(500));
        let mut m = RoundMachine::new(config, GameRng::new(1));

        m.tick(Duration::ZERO, PlayerSign::Waiting);
        assert_eq!(m.tick(secs(1), PlayerSign::Waiting).phase, RoundPhase::Resolved);
        assert_eq!(m.tick(millis(1600), PlayerSign::Waiting).phase, RoundPhase::Counting);
    }

    #[test]
    fn test_snapshot_labels() {
        let mut m = machine();
        let snap = m.tick(Duration::ZERO, PlayerSign::Waiting);
        assert_eq!(snap.opponent_label(), "waiting");
        assert_eq!(snap.outcome_label(), "Waiting...");

        let snap = m.tick(secs(3), PlayerSign::Seen(Gesture::Rock));
        assert_ne!(snap.opponent_label(), "waiting");
        assert_ne!(snap.outcome_label(), "Waiting...");
    }
}
