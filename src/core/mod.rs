//! Core types: landmarks, observations, configuration, RNG.
//!
//! This module contains the building blocks shared by both games. The
//! games consume these via their own modules; nothing here knows about
//! gestures or rounds.

pub mod config;
pub mod landmark;
pub mod rng;

pub use config::{RoundConfig, TrackerConfig};
pub use landmark::{
    Frame, HandObservation, Handedness, Landmark, ObservationError, LANDMARK_COUNT, MAX_HANDS,
};
pub use rng::{GameRng, GameRngState};
