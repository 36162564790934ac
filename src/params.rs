use crate::constants::*;
use crate::core::{particle_count_for_width, FormationParams};
use crate::error::{Result, SwarmError};

/// Engine-wide tunables.
///
/// - `compact_breakpoint_px`: viewports narrower than this get `compact_count` particles
/// - `recreate_threshold`: minimum population change that rebuilds the store
/// - `override_duration_sec`: lifetime of a manual override
/// - `spawn_edge`: edge of the cube new particles are scattered over
/// - `formation`: blend, tint and scale factors of the formation engine
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmParams {
    pub compact_breakpoint_px: u32,
    pub compact_count: usize,
    pub full_count: usize,
    pub recreate_threshold: usize,
    pub override_duration_sec: f64,
    pub spawn_edge: f32,
    pub formation: FormationParams,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            compact_breakpoint_px: COMPACT_VIEWPORT_WIDTH_PX,
            compact_count: COMPACT_PARTICLE_COUNT,
            full_count: FULL_PARTICLE_COUNT,
            recreate_threshold: RECREATE_COUNT_THRESHOLD,
            override_duration_sec: OVERRIDE_DURATION_SEC,
            spawn_edge: SPAWN_CUBE_EDGE,
            formation: FormationParams::default(),
        }
    }
}

impl SwarmParams {
    /// Particle population for a viewport width.
    pub fn particle_count(&self, width_px: u32) -> usize {
        particle_count_for_width(
            width_px,
            self.compact_breakpoint_px,
            self.compact_count,
            self.full_count,
        )
    }

    /// Reject values the frame loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        fn invalid(name: &'static str, reason: impl Into<String>) -> Result<()> {
            Err(SwarmError::InvalidParam {
                name,
                reason: reason.into(),
            })
        }

        if self.compact_count == 0 || self.full_count == 0 {
            return invalid("particle_count", "particle counts must be non-zero");
        }
        if !(self.override_duration_sec.is_finite() && self.override_duration_sec > 0.0) {
            return invalid(
                "override_duration_sec",
                format!("expected a positive duration, got {}", self.override_duration_sec),
            );
        }
        if !(self.spawn_edge.is_finite() && self.spawn_edge > 0.0) {
            return invalid("spawn_edge", format!("expected > 0, got {}", self.spawn_edge));
        }
        let f = &self.formation;
        if !(f.blend_per_frame > 0.0 && f.blend_per_frame <= 1.0) {
            return invalid(
                "blend_per_frame",
                format!("expected (0, 1], got {}", f.blend_per_frame),
            );
        }
        if !(0.0..=1.0).contains(&f.tint_mix) {
            return invalid("tint_mix", format!("expected [0, 1], got {}", f.tint_mix));
        }
        if !(f.time_scale.is_finite() && f.time_scale > 0.0) {
            return invalid("time_scale", format!("expected > 0, got {}", f.time_scale));
        }
        if !f.hand_world_scale.is_finite() || !f.jitter_amplitude.is_finite() {
            return invalid("formation", "scales must be finite");
        }
        Ok(())
    }
}
