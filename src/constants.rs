/// Formation and frame tuning constants.
///
/// These constants express intended behavior (e.g., blend factors, orbit
/// radii, timer lengths) and keep magic numbers out of the formation code.
// Scales accumulated seconds into formation phase
pub const TIME_SCALE: f32 = 2.0;

// Fraction of the remaining distance covered per frame (geometric decay)
pub const BLEND_PER_FRAME: f32 = 0.12;

// Micro-motion layered over the blended position (world units)
pub const JITTER_AMPLITUDE: f32 = 1.6;

// How far the per-particle color moves toward the scene tint
pub const TINT_MIX: f32 = 0.45;

// Normalized hand anchor -> world units
pub const HAND_WORLD_SCALE: f32 = 500.0;

// Manual override lifetime (seconds)
pub const OVERRIDE_DURATION_SEC: f64 = 4.5;

// Finger extension margins (normalized image coordinates)
pub const FINGER_EXTENSION_MARGIN: f32 = 0.04;
pub const THUMB_EXTENSION_MARGIN: f32 = 0.05;

// Particle population by viewport width
pub const COMPACT_VIEWPORT_WIDTH_PX: u32 = 768;
pub const COMPACT_PARTICLE_COUNT: usize = 2500;
pub const FULL_PARTICLE_COUNT: usize = 4000;
pub const RECREATE_COUNT_THRESHOLD: usize = 500; // hysteresis on recreation

// Spawn distribution
pub const SPAWN_CUBE_EDGE: f32 = 1200.0;
pub const BASE_HUE: f32 = 0.55; // cyan
pub const BASE_HUE_JITTER: f32 = 0.08;
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_SPAN: f32 = 3.0;

// NONE: idle drift around the spawn point
pub const DRIFT_AMPLITUDE: f32 = 48.0;
pub const DRIFT_Y_RATE: f32 = 0.7;
pub const DRIFT_Z_AMPLITUDE: f32 = 24.0;
pub const DRIFT_Z_RATE: f32 = 0.3;

// FIST: flattened ring around a dense core
pub const FIST_RING_SELECTOR: f32 = 0.3;
pub const FIST_RING_RADIUS: f32 = 120.0;
pub const FIST_RING_RADIUS_SPAN: f32 = 80.0;
pub const FIST_RING_SQUASH: f32 = 0.22;
pub const FIST_RING_SPIN: f32 = 0.35;
pub const FIST_RING_WOBBLE: f32 = 60.0;
pub const FIST_CORE_RADIUS: f32 = 60.0;
pub const FIST_CORE_SPIN: f32 = 0.6;

// OPEN: spherical shell with far wanderers
pub const OPEN_SHELL_SELECTOR: f32 = 0.28;
pub const OPEN_SHELL_RADIUS: f32 = 40.0;
pub const OPEN_SHELL_RADIUS_SPAN: f32 = 80.0;
pub const OPEN_SHELL_SPIN: f32 = 0.2;
pub const OPEN_WANDER_RADIUS: f32 = 160.0;
pub const OPEN_WANDER_RADIUS_SPAN: f32 = 200.0;
pub const OPEN_WANDER_SQUASH: f32 = 0.25;
pub const OPEN_WANDER_SPIN: f32 = 0.18;
pub const OPEN_WANDER_DEPTH: f32 = 100.0;

// PEACE: glyph slots
pub const PEACE_SLOTS: f32 = 6.0;
pub const PEACE_SLOT_SPACING: f32 = 48.0;
pub const PEACE_SLOT_WIDTH: f32 = 36.0;
pub const PEACE_SLOT_HEIGHT: f32 = 68.0;
pub const PEACE_WAVE: f32 = 6.0;
pub const PEACE_DEPTH: f32 = 30.0;

// METAL: beating heart
pub const HEART_SCALE: f32 = 5.2;
pub const HEART_BEAT_DEPTH: f32 = 0.12;
pub const HEART_BEAT_RATE: f32 = 8.0;
pub const HEART_Y_LIFT: f32 = 18.0;
pub const HEART_DEPTH: f32 = 30.0;

// Follow camera
pub const CAMERA_BASE_Z: f32 = 600.0;
pub const CAMERA_FOLLOW_XY: f32 = 150.0;
pub const CAMERA_FOLLOW_Z: f32 = 220.0;
pub const CAMERA_EASE_XY: f32 = 0.06;
pub const CAMERA_EASE_Z: f32 = 0.03;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 3000.0;
pub const SCENE_YAW_PER_FRAME: f32 = 0.0006;
