//! Hand anchor derived from tracker landmarks.

use super::constants::{LANDMARK_COUNT, MIDDLE_MCP, WRIST};
use crate::error::{Result, SwarmError};
use glam::Vec3;

/// Normalized hand reference point plus presence flag.
///
/// `anchor` components live in \[-1, 1\] for a hand inside the camera frame:
/// x is mirrored so moving the hand right moves the swarm right, y points up
/// and z grows as the hand approaches the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandSignal {
    pub anchor: Vec3,
    pub present: bool,
}

impl HandSignal {
    /// Signal for a frame with no hand. The anchor keeps its last known value.
    pub fn absent(last_anchor: Vec3) -> Self {
        Self {
            anchor: last_anchor,
            present: false,
        }
    }

    /// Derive the anchor from the midpoint of the wrist and the middle-finger base.
    pub fn from_landmarks(landmarks: &[Vec3]) -> Result<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return Err(SwarmError::TooFewLandmarks {
                found: landmarks.len(),
                required: LANDMARK_COUNT,
            });
        }
        let mid = (landmarks[WRIST] + landmarks[MIDDLE_MCP]) / 2.0;
        Ok(Self {
            anchor: Vec3::new(
                (1.0 - mid.x) * 2.0 - 1.0,
                -(mid.y * 2.0 - 1.0),
                (-mid.z).clamp(-1.0, 1.0),
            ),
            present: true,
        })
    }

    /// Anchor scaled into formation world units.
    #[inline]
    pub fn world(&self, scale: f32) -> Vec3 {
        self.anchor * scale
    }
}
