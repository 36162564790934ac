use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::{Vec2, Vec3};
use swarm_core::{
    synthetic_hand, FingerState, GestureSymbol, ParticleInstance, SwarmEngine, SwarmParams,
    TrackerMailbox, TrackerSample,
};

const FRAME: Duration = Duration::from_micros(16_667);
const TRACKER_PERIOD: Duration = Duration::from_millis(33);
const POSE_HOLD_SEC: f32 = 2.0;
const DEFAULT_RUN_SEC: f32 = 14.0;

/// Scripted poses the simulated tracker cycles through. `None` = hand out of view.
const SCRIPT: [Option<FingerState>; 6] = [
    Some(FingerState {
        thumb: true,
        index: true,
        middle: true,
        ring: true,
        pinky: true,
    }),
    Some(FingerState {
        thumb: false,
        index: false,
        middle: false,
        ring: false,
        pinky: false,
    }),
    Some(FingerState {
        thumb: false,
        index: true,
        middle: true,
        ring: false,
        pinky: false,
    }),
    Some(FingerState {
        thumb: true,
        index: true,
        middle: false,
        ring: false,
        pinky: true,
    }),
    // index only: ambiguous, the previous gesture sticks
    Some(FingerState {
        thumb: false,
        index: true,
        middle: false,
        ring: false,
        pinky: false,
    }),
    None,
];

fn spawn_tracker_sim(mailbox: TrackerMailbox, stop: Arc<AtomicBool>) -> anyhow::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("tracker-sim".into())
        .spawn(move || {
            let start = Instant::now();
            while !stop.load(Ordering::Relaxed) {
                let t = start.elapsed().as_secs_f32();
                let step = (t / POSE_HOLD_SEC) as usize % SCRIPT.len();
                // Wrist drifts on a small loop around the image center.
                let wrist = Vec2::new(0.5 + 0.15 * (t * 0.7).cos(), 0.6 + 0.1 * (t * 0.9).sin());
                let sample = match SCRIPT[step] {
                    Some(fingers) => TrackerSample::with_hand(synthetic_hand(fingers, wrist)),
                    None => TrackerSample::empty(),
                };
                mailbox.publish(sample);
                thread::sleep(TRACKER_PERIOD);
            }
        })
        .context("spawning tracker thread")
}

fn run_seconds() -> anyhow::Result<f32> {
    match std::env::var("SWARM_RUN_SECONDS") {
        Ok(v) => v
            .parse::<f32>()
            .with_context(|| format!("SWARM_RUN_SECONDS={v:?} is not a number")),
        Err(_) => Ok(DEFAULT_RUN_SEC),
    }
}

fn log_summary(engine: &SwarmEngine, instances: &[ParticleInstance]) {
    let n = instances.len().max(1) as f32;
    let centroid = instances
        .iter()
        .fold(Vec3::ZERO, |acc, p| acc + Vec3::from(p.pos))
        / n;
    let hand = engine.hand_anchor() * engine.params().formation.hand_world_scale;
    let spread = instances
        .iter()
        .map(|p| Vec3::from(p.pos).distance(hand))
        .sum::<f32>()
        / n;
    let bytes: &[u8] = bytemuck::cast_slice(instances);
    log::info!(
        "[frame] t={:5.2}s gesture={:<5} status={:?} centroid=({:.0},{:.0},{:.0}) spread={:.0} upload={}B",
        engine.clock().elapsed_sec(),
        engine.gesture(),
        engine.status(),
        centroid.x,
        centroid.y,
        centroid.z,
        spread,
        bytes.len()
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let run_for = run_seconds()?;
    let mut engine = SwarmEngine::new(SwarmParams::default(), (1280, 720), 42)?;

    let stop = Arc::new(AtomicBool::new(false));
    let tracker = spawn_tracker_sim(engine.mailbox(), Arc::clone(&stop))?;

    let mut instances: Vec<ParticleInstance> = Vec::new();
    let mut forced = false;
    let mut resized = false;
    let mut next_report = 0.0f64;

    engine.frame_now();
    while engine.clock().elapsed_sec() < run_for as f64 {
        let frame_start = Instant::now();
        engine.frame_now();
        let now = engine.clock().elapsed_sec();

        if !forced && now >= 5.0 {
            engine.force_shape("metal".parse::<GestureSymbol>()?);
            forced = true;
        }
        if !resized && now >= 9.0 {
            engine.resize(700, 900);
            resized = true;
        }

        engine.view().write_instances(&mut instances);
        if now >= next_report {
            log_summary(&engine, &instances);
            next_report = now.floor() + 1.0;
        }

        if let Some(rest) = FRAME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    stop.store(true, Ordering::Relaxed);
    if tracker.join().is_err() {
        log::warn!("tracker thread panicked");
    }
    log::info!(
        "[swarm] done after {} frames, {} particles",
        engine.clock().frames(),
        engine.store().len()
    );
    Ok(())
}
