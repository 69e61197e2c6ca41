//! # hand-games
//!
//! Core logic for two small gesture-controlled games driven by an
//! external hand tracker (MediaPipe-style: 21 normalized landmarks plus
//! a Left/Right label per observed hand).
//!
//! ## Design Principles
//!
//! 1. **Pure decisions**: classification and outcome rules are total,
//!    deterministic functions; the only randomness is an injected,
//!    seeded RNG.
//!
//! 2. **Explicit state**: round and playfield state live in values
//!    owned by their machines and mutated only by `tick`/`step` - no
//!    hidden session globals.
//!
//! 3. **Frame-driven**: the host loop owns the camera, the clock, and
//!    the renderer; it calls into this crate once per processed frame
//!    and draws the returned snapshot.
//!
//! ## Modules
//!
//! - `core`: landmarks, observations, frames, configuration, RNG
//! - `classifier`: finger extension tests and the gesture table
//! - `round`: the countdown/resolve/pause machine for the RPS game
//! - `direction`: fist/open movement intents for the catch game
//! - `catch`: the falling-apple playfield simulation

pub mod catch;
pub mod classifier;
pub mod core;
pub mod direction;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Frame, GameRng, GameRngState, HandObservation, Handedness, Landmark, ObservationError,
    RoundConfig, TrackerConfig, LANDMARK_COUNT, MAX_HANDS,
};

pub use crate::classifier::{classify, classify_raw, is_fist, FingerExtensions, Gesture, PlayerSign};

pub use crate::round::{resolve, Outcome, RoundMachine, RoundPhase, RoundSnapshot};

pub use crate::direction::{map_direction, MoveIntent};

pub use crate::catch::{CatchConfig, CatchGame, CatchSnapshot};
