//! Hand landmark geometry: points, joint indices, observations, frames.
//!
//! ## Coordinate convention
//!
//! Landmarks arrive normalized to `[0, 1]` relative to the camera frame,
//! with the y-axis increasing downward (image coordinates). A smaller y
//! therefore means "higher on screen", which is what the extension tests
//! in `classifier` rely on.
//!
//! ## Topology
//!
//! The 21-point hand model follows the MediaPipe layout: wrist, then four
//! joints per finger from knuckle to tip. The index constants below name
//! every joint; the classifier only reads tips, the thumb IP, and the
//! PIP joints.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single tracked joint position, normalized to the camera frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Number of landmarks in one hand observation.
pub const LANDMARK_COUNT: usize = 21;

/// Maximum concurrently tracked hands per frame.
pub const MAX_HANDS: usize = 2;

// MediaPipe hand landmark indices.
pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// (tip, PIP) index pairs for the four non-thumb fingers,
/// in index/middle/ring/pinky order.
pub const FINGER_TIP_PIP: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

/// Chirality of an observed hand, as reported by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse the tracker's string label ("Left" / "Right").
    ///
    /// Returns `None` for anything else; callers at the boundary treat
    /// that as a malformed observation.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Handedness::Left),
            "Right" => Some(Handedness::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Handedness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handedness::Left => write!(f, "Left"),
            Handedness::Right => write!(f, "Right"),
        }
    }
}

/// Rejected raw observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationError {
    /// The tracker delivered a landmark list that is not 21 points long.
    WrongLandmarkCount { actual: usize },
}

impl std::fmt::Display for ObservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObservationError::WrongLandmarkCount { actual } => {
                write!(f, "expected {LANDMARK_COUNT} landmarks, got {actual}")
            }
        }
    }
}

impl std::error::Error for ObservationError {}

/// One validated hand observation: 21 landmarks plus chirality.
///
/// Construction is the only place landmark count is checked; everything
/// downstream indexes by the constants above without re-validating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    landmarks: [Landmark; LANDMARK_COUNT],
    handedness: Handedness,
}

impl HandObservation {
    /// Create an observation from an exact-size landmark array.
    #[must_use]
    pub const fn new(landmarks: [Landmark; LANDMARK_COUNT], handedness: Handedness) -> Self {
        Self { landmarks, handedness }
    }

    /// Create an observation from a raw landmark slice, validating length.
    pub fn from_points(
        points: &[Landmark],
        handedness: Handedness,
    ) -> Result<Self, ObservationError> {
        let landmarks: [Landmark; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| ObservationError::WrongLandmarkCount { actual: points.len() })?;
        Ok(Self { landmarks, handedness })
    }

    /// Get the landmark at a joint index (see the index constants).
    #[must_use]
    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    #[must_use]
    pub fn handedness(&self) -> Handedness {
        self.handedness
    }
}

/// All hand observations delivered for one processed frame.
///
/// Holds 0, 1, or 2 hands in tracker observation order; order matters to
/// the direction mapper (later hands override earlier ones).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    hands: SmallVec<[HandObservation; MAX_HANDS]>,
}

impl Frame {
    /// Empty frame: no hand visible this tick.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Frame from observations in tracker order.
    ///
    /// Panics if more than [`MAX_HANDS`] observations are supplied.
    pub fn from_observations(observations: impl IntoIterator<Item = HandObservation>) -> Self {
        let hands: SmallVec<[HandObservation; MAX_HANDS]> = observations.into_iter().collect();
        assert!(
            hands.len() <= MAX_HANDS,
            "at most {MAX_HANDS} hands per frame, got {}",
            hands.len()
        );
        Self { hands }
    }

    /// Append one observation, preserving order.
    ///
    /// Panics if the frame already holds [`MAX_HANDS`] observations.
    pub fn push(&mut self, observation: HandObservation) {
        assert!(self.hands.len() < MAX_HANDS, "at most {MAX_HANDS} hands per frame");
        self.hands.push(observation);
    }

    /// Iterate observations in tracker order.
    pub fn hands(&self) -> impl Iterator<Item = &HandObservation> {
        self.hands.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }
}
