use crate::constants::*;
use glam::{Vec3, Vec4};
use rand::prelude::*;

/// Four independent uniforms in \[0, 1) fixed at particle creation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleSeed {
    /// `r`: placement along the formation (angle, radius, slot).
    pub offset: f32,
    /// Drift speed, mapped to `0.5 + speed * 0.8`.
    pub speed: f32,
    /// Drift phase, mapped to `phase * 2π`.
    pub phase: f32,
    /// `w`: picks the sub-formation (ring vs core, shell vs wanderer).
    pub selector: f32,
}

impl ParticleSeed {
    pub fn new(offset: f32, speed: f32, phase: f32, selector: f32) -> Self {
        Self {
            offset,
            speed,
            phase,
            selector,
        }
    }

    pub fn as_vec4(&self) -> Vec4 {
        Vec4::new(self.offset, self.speed, self.phase, self.selector)
    }
}

/// One swarm particle.
///
/// Only `position` changes after creation.
#[derive(Clone, Debug)]
pub struct ParticleRecord {
    /// Blended position, updated every frame (jitter is not stored here).
    pub position: Vec3,
    /// Spawn point; idle drift hovers around it.
    pub home: Vec3,
    pub base_color: Vec3,
    pub size: f32,
    pub seed: ParticleSeed,
}

/// Fixed-size arena of particles for one session.
///
/// Never resized in place: a large viewport change replaces the whole store.
#[derive(Clone, Debug)]
pub struct ParticleStore {
    particles: Vec<ParticleRecord>,
    seed: u64,
}

impl ParticleStore {
    /// Spawn `count` particles scattered over a cube of edge `spawn_edge`.
    pub fn new(count: usize, spawn_edge: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let home = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * spawn_edge,
                    (rng.gen::<f32>() - 0.5) * spawn_edge,
                    (rng.gen::<f32>() - 0.5) * spawn_edge,
                );
                let hue = BASE_HUE + (rng.gen::<f32>() - 0.5) * BASE_HUE_JITTER;
                let base_color = hsl_to_rgb(hue, 1.0, 0.5);
                let size = SIZE_MIN + rng.gen::<f32>() * SIZE_SPAN;
                let seed = ParticleSeed::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
                ParticleRecord {
                    position: home,
                    home,
                    base_color,
                    size,
                    seed,
                }
            })
            .collect();
        Self { particles, seed }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// RNG seed the store was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn particles(&self) -> &[ParticleRecord] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [ParticleRecord] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticleRecord> {
        self.particles.iter()
    }
}

/// Particle population for a viewport width.
#[inline]
pub fn particle_count_for_width(width_px: u32, breakpoint_px: u32, compact: usize, full: usize) -> usize {
    if width_px < breakpoint_px {
        compact
    } else {
        full
    }
}

/// Recreate only when the population changes by more than `threshold`.
#[inline]
pub fn needs_recreate(current: usize, wanted: usize, threshold: usize) -> bool {
    current.abs_diff(wanted) > threshold
}

/// HSL (all components 0..1) to RGB. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    if s <= 0.0 {
        return Vec3::splat(l);
    }
    let h = h.rem_euclid(1.0);
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f32| {
        let t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    Vec3::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}
