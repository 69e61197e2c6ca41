//! Gesture classification: hand observation in, named gesture out.
//!
//! ## Key Types
//!
//! - `Gesture`: the RPS gesture vocabulary, `Unknown` included
//! - `PlayerSign`: gesture plus the "no hand this tick" sentinel
//! - `FingerExtensions`: per-finger extension flags (from `fingers`)
//!
//! `classify` is a pure total function: any valid observation maps to
//! exactly one gesture, `Unknown` being a first-class stable output
//! rather than an error. The round machine treats it like any other
//! throw.

mod fingers;

pub use fingers::{is_fist, FingerExtensions};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::landmark::{Frame, HandObservation, Handedness, Landmark};

/// A recognized hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// Valid observation whose finger pattern matches no known gesture.
    Unknown,
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// The player's sign for one tick: a classified gesture, or `Waiting`
/// when no hand was observed.
///
/// `Waiting` is distinct from `Gesture::Unknown`: the former means the
/// tracker saw nothing, the latter means it saw a hand the classifier
/// could not name. Both participate in outcome comparison as their own
/// categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSign {
    /// No hand observed this tick.
    Waiting,
    /// Classifier output for the most recently processed hand.
    Seen(Gesture),
}

impl PlayerSign {
    /// Derive the sign for a frame: classify every observed hand in
    /// tracker order and keep the last result, or `Waiting` for an
    /// empty frame.
    #[must_use]
    pub fn from_frame(frame: &Frame) -> Self {
        let mut sign = PlayerSign::Waiting;
        for hand in frame.hands() {
            sign = PlayerSign::Seen(classify(hand));
        }
        sign
    }
}

impl std::fmt::Display for PlayerSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSign::Waiting => write!(f, "waiting"),
            PlayerSign::Seen(gesture) => write!(f, "{gesture}"),
        }
    }
}

/// Classify one hand observation into a gesture.
///
/// Measures the five finger extension flags and matches them against the
/// fixed gesture table. Pure and deterministic: the same observation
/// always yields the same gesture.
#[must_use]
pub fn classify(observation: &HandObservation) -> Gesture {
    match FingerExtensions::measure(observation).as_array() {
        [false, false, false, false, false] => Gesture::Rock,
        [true, true, true, true, true] => Gesture::Paper,
        [false, true, true, false, false] => Gesture::Scissors,
        _ => Gesture::Unknown,
    }
}

/// Lenient boundary classifier for raw tracker output.
///
/// A malformed observation (wrong landmark count, unrecognized
/// handedness label) is logged and classified as `Unknown` instead of
/// failing the tick.
#[must_use]
pub fn classify_raw(points: &[Landmark], handedness_label: &str) -> Gesture {
    let Some(handedness) = Handedness::from_label(handedness_label) else {
        warn!("unrecognized handedness label {handedness_label:?}, classifying as unknown");
        return Gesture::Unknown;
    };

    match HandObservation::from_points(points, handedness) {
        Ok(observation) => classify(&observation),
        Err(err) => {
            warn!("malformed hand observation ({err}), classifying as unknown");
            Gesture::Unknown
        }
    }
}
