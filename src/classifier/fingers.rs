//! Per-finger extension tests over a hand observation.
//!
//! ## Geometry
//!
//! The four non-thumb fingers move mostly vertically when curling, so a
//! finger counts as extended when its tip sits above its PIP joint
//! (smaller y in image coordinates). The thumb moves laterally instead,
//! and which horizontal direction means "extended" flips with chirality:
//! on a right hand the extended thumb tip sits at a smaller x than the
//! IP joint, on a left hand at a greater x. Swapping the comparison
//! would silently break recognition for one hand without affecting the
//! other, so the mirrored form is load-bearing.

use serde::{Deserialize, Serialize};

use crate::core::landmark::{HandObservation, Handedness, FINGER_TIP_PIP, THUMB_IP, THUMB_TIP};

/// Which of the five fingers are extended, thumb first.
///
/// Intermediate classifier value, public so the gesture table is
/// testable without synthesizing landmark geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerExtensions {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerExtensions {
    /// Measure extension of all five fingers on one observation.
    #[must_use]
    pub fn measure(observation: &HandObservation) -> Self {
        let thumb_tip = observation.landmark(THUMB_TIP);
        let thumb_ip = observation.landmark(THUMB_IP);

        let thumb = match observation.handedness() {
            Handedness::Right => thumb_tip.x < thumb_ip.x,
            Handedness::Left => thumb_tip.x > thumb_ip.x,
        };

        let mut fingers = [false; 4];
        for (slot, &(tip, pip)) in fingers.iter_mut().zip(FINGER_TIP_PIP.iter()) {
            *slot = observation.landmark(tip).y < observation.landmark(pip).y;
        }

        Self {
            thumb,
            index: fingers[0],
            middle: fingers[1],
            ring: fingers[2],
            pinky: fingers[3],
        }
    }

    /// The extension flags in fixed thumb/index/middle/ring/pinky order.
    #[must_use]
    pub const fn as_array(self) -> [bool; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }

    /// Build from a fixed-order flag array (test construction helper).
    #[must_use]
    pub const fn from_array([thumb, index, middle, ring, pinky]: [bool; 5]) -> Self {
        Self { thumb, index, middle, ring, pinky }
    }
}

/// Is this hand making a fist?
///
/// A fist curls all four non-thumb fingertips strictly below their PIP
/// joints; the thumb is ignored. The comparison is strict, so a tip
/// level with its joint counts as open.
#[must_use]
pub fn is_fist(observation: &HandObservation) -> bool {
    FINGER_TIP_PIP
        .iter()
        .all(|&(tip, pip)| observation.landmark(tip).y > observation.landmark(pip).y)
}
