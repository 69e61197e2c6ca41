//! Directional mapping for the catch game.
//!
//! Maps a frame of hand observations to a movement intent: an open hand
//! steers toward its own side (right hand moves right, left hand moves
//! left); fists and empty frames stop the basket.

use serde::{Deserialize, Serialize};

use crate::classifier::is_fist;
use crate::core::landmark::{Frame, Handedness};

/// Movement intent for the basket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveIntent {
    Left,
    Right,
    Stop,
}

impl std::fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MoveIntent::Left => "left",
            MoveIntent::Right => "right",
            MoveIntent::Stop => "stop",
        };
        write!(f, "{label}")
    }
}

/// Derive the movement intent for one frame.
///
/// Every non-fist hand assigns an intent from its handedness, in
/// observation order, and the last assignment stands; fists never
/// override an intent. All fists, or no hands at all, mean `Stop`.
#[must_use]
pub fn map_direction(frame: &Frame) -> MoveIntent {
    let mut intent = MoveIntent::Stop;

    for hand in frame.hands() {
        if !is_fist(hand) {
            intent = match hand.handedness() {
                Handedness::Right => MoveIntent::Right,
                Handedness::Left => MoveIntent::Left,
            };
        }
    }

    intent
}
