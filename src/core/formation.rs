//! Per-frame formation math.
//!
//! `formation_target` is a pure closed-form function of gesture, particle seed,
//! spawn point, phase and hand position; `FormationEngine` applies it to a
//! whole store and blends each particle toward its target.

use super::gesture::GestureSymbol;
use super::particles::{ParticleRecord, ParticleSeed, ParticleStore};
use crate::constants::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Target position of one particle for `gesture`.
///
/// - `home`: the particle's spawn point (idle drift centers on it)
/// - `t`: formation phase, i.e. elapsed seconds times the time scale
/// - `hand`: hand anchor already scaled into world units
pub fn formation_target(
    gesture: GestureSymbol,
    seed: &ParticleSeed,
    home: Vec3,
    t: f32,
    hand: Vec3,
) -> Vec3 {
    let r = seed.offset;
    let w = seed.selector;
    match gesture {
        GestureSymbol::None => {
            let sp = 0.5 + seed.speed * 0.8;
            let ph = seed.phase * TAU;
            home + Vec3::new(
                (t * sp + ph).sin() * DRIFT_AMPLITUDE,
                (t * sp * DRIFT_Y_RATE + ph).cos() * DRIFT_AMPLITUDE,
                (t * DRIFT_Z_RATE + r * 8.0).sin() * DRIFT_Z_AMPLITUDE,
            )
        }
        GestureSymbol::Fist => {
            if w >= FIST_RING_SELECTOR {
                let angle = r * TAU + t * FIST_RING_SPIN;
                let radius = FIST_RING_RADIUS + r * FIST_RING_RADIUS_SPAN;
                hand + Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius * FIST_RING_SQUASH,
                    (angle * 0.5).sin() * FIST_RING_WOBBLE,
                )
            } else {
                let radius = r * FIST_CORE_RADIUS;
                let theta = w * PI;
                let phi = r * TAU + t * FIST_CORE_SPIN;
                hand + spherical(radius, theta, phi)
            }
        }
        GestureSymbol::Open => {
            if w >= OPEN_SHELL_SELECTOR {
                let radius = OPEN_SHELL_RADIUS + r * OPEN_SHELL_RADIUS_SPAN;
                let theta = r * PI;
                let phi = w * TAU + t * OPEN_SHELL_SPIN;
                hand + spherical(radius, theta, phi)
            } else {
                let ph = seed.phase * TAU;
                let radius = OPEN_WANDER_RADIUS + r * OPEN_WANDER_RADIUS_SPAN;
                let a = t * OPEN_WANDER_SPIN + ph;
                hand + Vec3::new(
                    a.cos() * radius,
                    (a * 1.2).sin() * radius * OPEN_WANDER_SQUASH,
                    (t + r * 10.0).sin() * OPEN_WANDER_DEPTH,
                )
            }
        }
        GestureSymbol::Peace => {
            let slot = (r * PEACE_SLOTS).floor();
            let slot_x = (slot - (PEACE_SLOTS - 1.0) / 2.0) * PEACE_SLOT_SPACING;
            let wave = (r * 20.0 + t).sin() * PEACE_WAVE;
            hand + Vec3::new(
                slot_x + (w - 0.5) * PEACE_SLOT_WIDTH,
                wave + (r - 0.5) * PEACE_SLOT_HEIGHT,
                (t * 2.0 + r * 10.0).sin() * PEACE_DEPTH,
            )
        }
        GestureSymbol::Metal => {
            let theta = r * TAU;
            let (hx, hy) = heart_curve(theta);
            let scale = HEART_SCALE * heart_beat(t);
            hand + Vec3::new(
                hx * scale,
                -hy * scale + HEART_Y_LIFT,
                (theta * 3.0 + t).sin() * HEART_DEPTH,
            )
        }
    }
}

/// Classic parametric heart, unscaled. `y` grows toward the lobes.
#[inline]
pub fn heart_curve(theta: f32) -> (f32, f32) {
    let hx = 16.0 * theta.sin().powi(3);
    let hy = 13.0 * theta.cos()
        - 5.0 * (2.0 * theta).cos()
        - 2.0 * (3.0 * theta).cos()
        - (4.0 * theta).cos();
    (hx, hy)
}

/// Pulsing scale multiplier of the heart at phase `t`.
#[inline]
pub fn heart_beat(t: f32) -> f32 {
    1.0 + (t * HEART_BEAT_RATE).sin() * HEART_BEAT_DEPTH
}

/// Micro-motion added on top of the blended position; never stored.
#[inline]
pub fn jitter(seed: &ParticleSeed, t: f32, amplitude: f32) -> Vec3 {
    let k = seed.offset * 10.0;
    Vec3::new(
        (t + k).sin() * amplitude,
        (t + k).cos() * amplitude,
        (t * 0.5 + k).sin() * amplitude,
    )
}

/// Per-particle display color: the base color pulled toward the scene tint.
#[inline]
pub fn render_color(base: Vec3, tint: Vec3, mix: f32) -> Vec3 {
    base.lerp(tint, mix)
}

#[inline]
fn spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    )
}

/// Tuning for [`FormationEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormationParams {
    pub time_scale: f32,
    pub blend_per_frame: f32,
    pub jitter_amplitude: f32,
    pub tint_mix: f32,
    pub hand_world_scale: f32,
}

impl Default for FormationParams {
    fn default() -> Self {
        Self {
            time_scale: TIME_SCALE,
            blend_per_frame: BLEND_PER_FRAME,
            jitter_amplitude: JITTER_AMPLITUDE,
            tint_mix: TINT_MIX,
            hand_world_scale: HAND_WORLD_SCALE,
        }
    }
}

/// Drives every particle toward the active gesture's formation.
#[derive(Clone, Debug)]
pub struct FormationEngine {
    pub params: FormationParams,
    elapsed_sec: f64,
    tint: Vec3,
}

impl FormationEngine {
    pub fn new(params: FormationParams) -> Self {
        Self {
            params,
            elapsed_sec: 0.0,
            tint: GestureSymbol::None.tint(),
        }
    }

    /// Current formation phase (`elapsed * time_scale`).
    #[inline]
    pub fn phase(&self) -> f32 {
        (self.elapsed_sec * self.params.time_scale as f64) as f32
    }

    #[inline]
    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    /// Scene-wide tint selected by the most recent update.
    #[inline]
    pub fn tint(&self) -> Vec3 {
        self.tint
    }

    /// Advance time by `dt` and blend every particle toward its target.
    ///
    /// A zero `dt` means no frame elapsed, so time and positions stay put (the
    /// tint still follows `gesture`). Otherwise each call covers
    /// `blend_per_frame` of the remaining distance.
    pub fn update(
        &mut self,
        dt: Duration,
        hand_anchor: Vec3,
        gesture: GestureSymbol,
        store: &mut ParticleStore,
    ) {
        self.tint = gesture.tint();
        if dt.is_zero() {
            return;
        }
        self.elapsed_sec += dt.as_secs_f64();

        let t = self.phase();
        let hand = hand_anchor * self.params.hand_world_scale;
        let blend = self.params.blend_per_frame;
        for p in store.particles_mut() {
            let target = formation_target(gesture, &p.seed, p.home, t, hand);
            p.position = p.position.lerp(target, blend);
        }
    }

    /// Where the renderer should draw `p` this frame (blended position plus jitter).
    #[inline]
    pub fn render_position(&self, p: &ParticleRecord) -> Vec3 {
        p.position + jitter(&p.seed, self.phase(), self.params.jitter_amplitude)
    }

    /// Display color of `p` under the current scene tint.
    #[inline]
    pub fn render_color(&self, p: &ParticleRecord) -> Vec3 {
        render_color(p.base_color, self.tint, self.params.tint_mix)
    }
}
