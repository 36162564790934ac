use super::constants::*;
use crate::constants::{FINGER_EXTENSION_MARGIN, THUMB_EXTENSION_MARGIN};
use crate::error::{Result, SwarmError};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// One tracked hand: 21 normalized image-space points (x right, y down, z depth).
pub type HandLandmarks = SmallVec<[Vec3; LANDMARK_COUNT]>;

/// Discrete hand pose driving formation selection.
///
/// `None` is reserved for "no hand"; an ambiguous pose never produces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureSymbol {
    #[default]
    None,
    Fist,
    Open,
    Peace,
    Metal,
}

impl GestureSymbol {
    pub const ALL: [GestureSymbol; 5] = [
        GestureSymbol::None,
        GestureSymbol::Fist,
        GestureSymbol::Open,
        GestureSymbol::Peace,
        GestureSymbol::Metal,
    ];

    /// Lowercase name used by UI buttons and logs.
    pub fn name(self) -> &'static str {
        match self {
            GestureSymbol::None => "none",
            GestureSymbol::Fist => "fist",
            GestureSymbol::Open => "open",
            GestureSymbol::Peace => "peace",
            GestureSymbol::Metal => "metal",
        }
    }

    /// Scene tint for this gesture as packed 0xRRGGBB.
    pub fn tint_hex(self) -> u32 {
        match self {
            GestureSymbol::None => TINT_NONE_HEX,
            GestureSymbol::Fist => TINT_FIST_HEX,
            GestureSymbol::Open => TINT_OPEN_HEX,
            GestureSymbol::Peace => TINT_PEACE_HEX,
            GestureSymbol::Metal => TINT_METAL_HEX,
        }
    }

    /// Scene tint for this gesture as 0..1 RGB.
    #[inline]
    pub fn tint(self) -> Vec3 {
        hex_to_rgb(self.tint_hex())
    }
}

impl fmt::Display for GestureSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GestureSymbol {
    type Err = SwarmError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        GestureSymbol::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SwarmError::UnknownGesture(s.to_string()))
    }
}

/// Extension state of each finger for a single landmark set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerState {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerState {
    /// Measure finger extension from a landmark set.
    ///
    /// Fingers count as extended when the tip sits above the base knuckle by
    /// more than the margin (image y grows downward). The thumb extends
    /// sideways, so it is measured on x instead.
    pub fn from_landmarks(landmarks: &[Vec3]) -> Result<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return Err(SwarmError::TooFewLandmarks {
                found: landmarks.len(),
                required: LANDMARK_COUNT,
            });
        }
        let finger = |tip: usize, base: usize| {
            landmarks[tip].y < landmarks[base].y - FINGER_EXTENSION_MARGIN
        };
        Ok(Self {
            thumb: (landmarks[THUMB_TIP].x - landmarks[THUMB_MCP].x).abs() > THUMB_EXTENSION_MARGIN,
            index: finger(INDEX_TIP, INDEX_MCP),
            middle: finger(MIDDLE_TIP, MIDDLE_MCP),
            ring: finger(RING_TIP, RING_MCP),
            pinky: finger(PINKY_TIP, PINKY_MCP),
        })
    }

    /// Map the four non-thumb fingers to a gesture, if the pattern is recognized.
    pub fn gesture(&self) -> Option<GestureSymbol> {
        match (self.index, self.middle, self.ring, self.pinky) {
            (true, false, false, true) => Some(GestureSymbol::Metal),
            (true, true, false, false) => Some(GestureSymbol::Peace),
            (false, false, false, false) => Some(GestureSymbol::Fist),
            (true, true, true, true) => Some(GestureSymbol::Open),
            _ => None,
        }
    }
}

/// Classify a landmark set, falling back to `previous` on unrecognized poses.
pub fn classify(landmarks: &[Vec3], previous: GestureSymbol) -> Result<GestureSymbol> {
    let fingers = FingerState::from_landmarks(landmarks)?;
    Ok(fingers.gesture().unwrap_or(previous))
}

/// Build a plausible upright hand whose fingers follow `fingers`.
///
/// `wrist` is in normalized image coordinates. Used by simulated trackers and
/// host-side tests in place of a camera.
pub fn synthetic_hand(fingers: FingerState, wrist: Vec2) -> HandLandmarks {
    let mut lm: HandLandmarks = SmallVec::from_elem(Vec3::new(wrist.x, wrist.y, 0.0), LANDMARK_COUNT);
    let at = |dx: f32, dy: f32| Vec3::new(wrist.x + dx, wrist.y + dy, 0.0);

    // Thumb chain (1..=4) runs sideways from the wrist.
    lm[1] = at(-0.04, -0.04);
    lm[THUMB_MCP] = at(-0.06, -0.07);
    lm[3] = at(if fingers.thumb { -0.10 } else { -0.07 }, -0.09);
    lm[THUMB_TIP] = at(if fingers.thumb { -0.14 } else { -0.08 }, -0.10);

    // Non-thumb chains: base knuckle, two joints, tip.
    let chains = [
        (INDEX_MCP, -0.04, fingers.index),
        (MIDDLE_MCP, -0.01, fingers.middle),
        (RING_MCP, 0.02, fingers.ring),
        (PINKY_MCP, 0.05, fingers.pinky),
    ];
    for (base, dx, extended) in chains {
        let base_y = -0.15;
        lm[base] = at(dx, base_y);
        for joint in 1..=3 {
            let dy = if extended {
                base_y - 0.04 * joint as f32
            } else {
                // curled fingers fold back toward the palm
                base_y + 0.02 * joint as f32
            };
            lm[base + joint] = at(dx, dy);
        }
    }
    lm
}
