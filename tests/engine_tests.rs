// Host-side integration tests for the frame coordinator.

use glam::{Vec2, Vec3};
use std::time::Duration;
use swarm_core::{
    gesture_code, synthetic_hand, FingerState, GestureSymbol, HandLandmarks, SwarmEngine,
    SwarmParams, TrackerSample, TrackingStatus, MIDDLE_MCP, WRIST,
};

const FRAME: Duration = Duration::from_millis(16);

fn make_engine() -> SwarmEngine {
    SwarmEngine::new(SwarmParams::default(), (1024, 768), 42).unwrap()
}

fn pose(index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
    let fingers = FingerState {
        thumb: false,
        index,
        middle,
        ring,
        pinky,
    };
    synthetic_hand(fingers, Vec2::new(0.5, 0.7))
}

fn open() -> HandLandmarks {
    pose(true, true, true, true)
}

fn fist() -> HandLandmarks {
    pose(false, false, false, false)
}

/// Deliver a tracker sample through the mailbox and run one frame.
fn feed(engine: &mut SwarmEngine, sample: TrackerSample) {
    engine.mailbox().publish(sample);
    engine.frame(FRAME);
}

fn run_for(engine: &mut SwarmEngine, seconds: f64) {
    let until = engine.clock().elapsed_sec() + seconds;
    while engine.clock().elapsed_sec() < until {
        engine.frame(FRAME);
    }
}

#[test]
fn starts_idle_with_full_population() {
    let engine = make_engine();
    assert_eq!(engine.gesture(), GestureSymbol::None);
    assert_eq!(engine.hand_anchor(), Vec3::ZERO);
    assert_eq!(engine.store().len(), 4000);
    assert_eq!(engine.status(), TrackingStatus::Waiting);
    assert_eq!(engine.custom_text(), "I LOVE U");
}

#[test]
fn invalid_params_fail_construction() {
    let mut params = SwarmParams::default();
    params.formation.blend_per_frame = 2.0;
    assert!(SwarmEngine::new(params, (1024, 768), 1).is_err());
}

#[test]
fn tracked_pose_becomes_effective_gesture() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(open()));
    assert_eq!(engine.gesture(), GestureSymbol::Open);
    assert_eq!(engine.status(), TrackingStatus::Detected(GestureSymbol::Open));
    feed(&mut engine, TrackerSample::with_hand(fist()));
    assert_eq!(engine.gesture(), GestureSymbol::Fist);
}

#[test]
fn ambiguous_pose_sticks_to_previous_gesture() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(open()));
    feed(&mut engine, TrackerSample::with_hand(pose(true, false, false, false)));
    assert_eq!(engine.gesture(), GestureSymbol::Open);
}

#[test]
fn losing_the_hand_resets_to_none_but_keeps_anchor() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(fist()));
    let anchor = engine.hand_anchor();
    assert_ne!(anchor, Vec3::ZERO);

    feed(&mut engine, TrackerSample::empty());
    assert_eq!(engine.gesture(), GestureSymbol::None);
    assert_eq!(engine.hand_anchor(), anchor);
    assert!(!engine.state().hand.present);
    assert_eq!(engine.status(), TrackingStatus::Waiting);
}

#[test]
fn centered_hand_anchors_at_origin() {
    let mut engine = make_engine();
    let mut lm = open();
    lm[WRIST] = Vec3::new(0.5, 0.5, 0.0);
    lm[MIDDLE_MCP] = Vec3::new(0.5, 0.5, 0.0);
    engine.apply_sample(&TrackerSample::with_hand(lm));
    assert_eq!(engine.hand_anchor(), Vec3::ZERO);
    assert!(engine.state().hand.present);
}

#[test]
fn override_supersedes_tracking_until_expiry() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(open()));
    engine.force_shape(GestureSymbol::Peace);
    assert_eq!(engine.gesture(), GestureSymbol::Peace);
    assert_eq!(engine.status(), TrackingStatus::Manual(GestureSymbol::Peace));

    // Classifier output and hand loss are both ignored while overridden.
    feed(&mut engine, TrackerSample::with_hand(fist()));
    assert_eq!(engine.gesture(), GestureSymbol::Peace);
    feed(&mut engine, TrackerSample::empty());
    assert_eq!(engine.gesture(), GestureSymbol::Peace);
}

#[test]
fn repeated_force_takes_latest_symbol_and_resets_timer() {
    let mut engine = make_engine();
    engine.force_shape(GestureSymbol::Fist);
    run_for(&mut engine, 3.0);
    engine.force_shape(GestureSymbol::Metal);
    assert_eq!(engine.gesture(), GestureSymbol::Metal);
    let remaining = engine
        .overrides()
        .remaining(engine.clock().elapsed_sec())
        .unwrap();
    assert!((remaining - 4.5).abs() < 1e-9);

    // Past the first deadline, the second override is still in charge.
    run_for(&mut engine, 2.0);
    assert_eq!(engine.gesture(), GestureSymbol::Metal);
    assert!(engine.overrides().is_active());

    run_for(&mut engine, 2.6);
    assert_eq!(engine.gesture(), GestureSymbol::None);
    assert!(!engine.overrides().is_active());
}

#[test]
fn expiry_reverts_to_idle_even_with_a_recognizable_hand() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(open()));
    engine.force_shape(GestureSymbol::Metal);

    // The hand keeps showing OPEN right up to and including the expiry frame.
    let deadline = engine.clock().elapsed_sec() + 4.5;
    while engine.clock().elapsed_sec() + FRAME.as_secs_f64() < deadline {
        feed(&mut engine, TrackerSample::with_hand(open()));
        assert_eq!(engine.gesture(), GestureSymbol::Metal);
    }
    feed(&mut engine, TrackerSample::with_hand(open()));
    assert!(!engine.overrides().is_active());
    assert_eq!(engine.gesture(), GestureSymbol::None);
    assert!(engine.state().hand.present);

    // With no further samples it stays idle.
    run_for(&mut engine, 1.0);
    assert_eq!(engine.gesture(), GestureSymbol::None);

    // A later tracker sample resumes classification.
    feed(&mut engine, TrackerSample::with_hand(open()));
    assert_eq!(engine.gesture(), GestureSymbol::Open);
}

#[test]
fn malformed_sample_is_dropped() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(fist()));
    let anchor = engine.hand_anchor();

    let mut short = open();
    short.truncate(12);
    feed(&mut engine, TrackerSample::with_hand(short));
    assert_eq!(engine.gesture(), GestureSymbol::Fist);
    assert_eq!(engine.hand_anchor(), anchor);
}

#[test]
fn tracker_failure_is_reported_and_swarm_keeps_running() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(fist()));
    let anchor = engine.hand_anchor();

    engine.mailbox().fail("camera permission denied");
    engine.frame(FRAME);
    assert_eq!(
        engine.status(),
        TrackingStatus::Unavailable("camera permission denied".into())
    );
    assert_eq!(engine.hand_anchor(), anchor);

    let before = engine.store().particles()[0].position;
    engine.frame(FRAME);
    assert_ne!(engine.store().particles()[0].position, before);

    // A fresh sample clears the failure.
    feed(&mut engine, TrackerSample::with_hand(open()));
    assert_eq!(engine.status(), TrackingStatus::Detected(GestureSymbol::Open));
}

#[test]
fn zero_dt_frame_leaves_particles_in_place() {
    let mut engine = make_engine();
    feed(&mut engine, TrackerSample::with_hand(open()));
    let before: Vec<Vec3> = engine.store().iter().map(|p| p.position).collect();
    engine.frame(Duration::ZERO);
    let after: Vec<Vec3> = engine.store().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn resize_recreates_only_on_large_population_change() {
    let mut engine = make_engine();
    let seed = engine.store().seed();

    assert!(!engine.resize(950, 700));
    assert_eq!(engine.store().len(), 4000);
    assert_eq!(engine.store().seed(), seed);

    assert!(engine.resize(700, 900));
    assert_eq!(engine.store().len(), 2500);
    assert_ne!(engine.store().seed(), seed);

    assert!(!engine.resize(640, 900));
    assert!(engine.resize(1280, 720));
    assert_eq!(engine.store().len(), 4000);
}

#[test]
fn swarm_gathers_around_the_hand() {
    let mut engine = make_engine();
    for _ in 0..120 {
        feed(&mut engine, TrackerSample::with_hand(fist()));
    }
    let hand = engine.hand_anchor() * 500.0;
    let view = engine.view();
    let mean_dist = view
        .instances()
        .map(|p| Vec3::from(p.pos).distance(hand))
        .sum::<f32>()
        / view.len() as f32;
    // Ring radius tops out at 200; the core sits within 60.
    assert!(mean_dist < 210.0, "mean distance {mean_dist}");
}

#[test]
fn view_exposes_render_data() {
    let mut engine = make_engine();
    engine.force_shape(GestureSymbol::Open);
    engine.frame(FRAME);

    let view = engine.view();
    let mut instances = Vec::new();
    view.write_instances(&mut instances);
    assert_eq!(instances.len(), 4000);
    assert_eq!(view.tint(), GestureSymbol::Open.tint());
    for inst in instances.iter().take(50) {
        assert!(inst.size >= 1.0);
        assert_eq!(inst.color[3], 1.0);
    }

    let u = view.uniforms();
    assert_eq!(u.gesture, gesture_code(GestureSymbol::Open));
    assert_eq!(u.color_mix, 0.45);
    assert_eq!(bytemuck::bytes_of(&u).len(), std::mem::size_of_val(&u));
    assert_eq!(std::mem::size_of::<swarm_core::ParticleInstance>(), 32);
}

#[test]
fn camera_eases_toward_the_hand() {
    let mut engine = make_engine();
    let mut lm = open();
    lm[WRIST] = Vec3::new(0.1, 0.5, 0.0);
    lm[MIDDLE_MCP] = Vec3::new(0.1, 0.5, 0.0);
    engine.mailbox().publish(TrackerSample::with_hand(lm));
    for _ in 0..300 {
        engine.frame(FRAME);
    }
    // anchor x = 0.8 -> camera x approaches 120
    assert!((engine.camera().eye.x - 120.0).abs() < 1.0);
    assert!(engine.camera().scene_yaw > 0.0);
}

#[test]
fn custom_text_falls_back_to_default() {
    let mut engine = make_engine();
    engine.set_custom_text("HELLO");
    assert_eq!(engine.custom_text(), "HELLO");
    engine.set_custom_text("   ");
    assert_eq!(engine.custom_text(), "I LOVE U");
}
