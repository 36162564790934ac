use crate::camera::FollowCamera;
use crate::core::{
    classify, needs_recreate, FormationEngine, FrameClock, GestureSymbol, HandSignal,
    OverrideController, ParticleStore, DEFAULT_CUSTOM_TEXT,
};
use crate::error::Result;
use crate::input::{TrackerEvent, TrackerMailbox, TrackerSample};
use crate::params::SwarmParams;
use crate::render::FrameView;
use glam::Vec3;
use rand::prelude::*;
use std::time::Duration;

/// What the UI should tell the user about tracking.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackingStatus {
    /// No hand in view yet (or it left).
    Waiting,
    Detected(GestureSymbol),
    /// A manual override is in charge.
    Manual(GestureSymbol),
    /// The tracker could not be acquired; the swarm keeps running.
    Unavailable(String),
}

/// Cross-component state, owned by [`SwarmEngine`] and handed to each
/// component by reference.
#[derive(Clone, Debug)]
pub struct EngineState {
    /// Effective gesture after override resolution.
    pub gesture: GestureSymbol,
    /// Most recent hand signal; the anchor keeps its last known value when the
    /// hand disappears (origin before the first sample).
    pub hand: HandSignal,
    pub custom_text: String,
    pub viewport: (u32, u32),
    pub tracker_error: Option<String>,
}

impl EngineState {
    fn new(viewport: (u32, u32)) -> Self {
        Self {
            gesture: GestureSymbol::None,
            hand: HandSignal::default(),
            custom_text: DEFAULT_CUSTOM_TEXT.to_string(),
            viewport,
            tracker_error: None,
        }
    }
}

/// Coordinates classifier, override, formation and particle lifecycle on the
/// frame thread.
///
/// Typical usage:
/// - Construct with `SwarmEngine::new(params, (width, height), seed)`
/// - Hand `mailbox()` to the tracker, which publishes samples at its own pace
/// - Call `frame(dt)` once per render tick, then read `view()`
/// - Wire UI buttons to `force_shape` and `set_custom_text`, window resizes to `resize`
pub struct SwarmEngine {
    params: SwarmParams,
    state: EngineState,
    overrides: OverrideController,
    clock: FrameClock,
    formation: FormationEngine,
    store: ParticleStore,
    camera: FollowCamera,
    mailbox: TrackerMailbox,
    rng: StdRng,
}

impl SwarmEngine {
    pub fn new(params: SwarmParams, viewport: (u32, u32), seed: u64) -> Result<Self> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let count = params.particle_count(viewport.0);
        let store = ParticleStore::new(count, params.spawn_edge, rng.gen());
        log::info!(
            "[swarm] created {} particles for {}x{} viewport",
            count,
            viewport.0,
            viewport.1
        );
        let mut camera = FollowCamera::new(1.0);
        camera.set_viewport(viewport.0, viewport.1);
        Ok(Self {
            overrides: OverrideController::new(params.override_duration_sec),
            formation: FormationEngine::new(params.formation),
            state: EngineState::new(viewport),
            clock: FrameClock::new(),
            mailbox: TrackerMailbox::new(),
            params,
            store,
            camera,
            rng,
        })
    }

    /// Producer handle for the tracker; clones share the same slot.
    pub fn mailbox(&self) -> TrackerMailbox {
        self.mailbox.clone()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn params(&self) -> &SwarmParams {
        &self.params
    }

    pub fn gesture(&self) -> GestureSymbol {
        self.state.gesture
    }

    pub fn hand_anchor(&self) -> Vec3 {
        self.state.hand.anchor
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn formation(&self) -> &FormationEngine {
        &self.formation
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn overrides(&self) -> &OverrideController {
        &self.overrides
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn custom_text(&self) -> &str {
        &self.state.custom_text
    }

    pub fn status(&self) -> TrackingStatus {
        if let Some(symbol) = self.overrides.symbol() {
            TrackingStatus::Manual(symbol)
        } else if let Some(reason) = &self.state.tracker_error {
            TrackingStatus::Unavailable(reason.clone())
        } else if self.state.hand.present {
            TrackingStatus::Detected(self.state.gesture)
        } else {
            TrackingStatus::Waiting
        }
    }

    /// Force `symbol` for the override duration, restarting the timer if one
    /// is already running.
    pub fn force_shape(&mut self, symbol: GestureSymbol) {
        self.overrides.force(symbol, self.clock.elapsed_sec());
        self.set_gesture(symbol);
    }

    /// Store text for a glyph renderer. Blank input restores the default.
    pub fn set_custom_text(&mut self, text: &str) {
        let text = text.trim();
        self.state.custom_text = if text.is_empty() {
            DEFAULT_CUSTOM_TEXT.to_string()
        } else {
            text.to_string()
        };
    }

    /// React to a viewport change. Returns `true` when the particle store was
    /// rebuilt; small population changes are ignored.
    pub fn resize(&mut self, width_px: u32, height_px: u32) -> bool {
        self.state.viewport = (width_px, height_px);
        self.camera.set_viewport(width_px, height_px);
        let wanted = self.params.particle_count(width_px);
        if !needs_recreate(self.store.len(), wanted, self.params.recreate_threshold) {
            return false;
        }
        log::info!(
            "[swarm] viewport {}px: recreating store {} -> {} particles",
            width_px,
            self.store.len(),
            wanted
        );
        // The old store is dropped here; releasing it cannot fail.
        self.store = ParticleStore::new(wanted, self.params.spawn_edge, self.rng.gen());
        true
    }

    /// Apply one tracker callback directly (single-threaded hosts).
    pub fn apply_sample(&mut self, sample: &TrackerSample) {
        self.state.tracker_error = None;
        let Some(landmarks) = sample.primary() else {
            self.state.hand = HandSignal::absent(self.state.hand.anchor);
            if !self.overrides.is_active() {
                self.set_gesture(GestureSymbol::None);
            }
            return;
        };

        let hand = match HandSignal::from_landmarks(landmarks) {
            Ok(hand) => hand,
            Err(e) => {
                log::warn!("[tracker] dropping sample: {e}");
                return;
            }
        };
        self.state.hand = hand;

        match classify(landmarks, self.state.gesture) {
            Ok(gesture) if self.overrides.is_active() => {
                log::trace!("[gesture] {gesture} ignored during override");
            }
            Ok(gesture) => self.set_gesture(gesture),
            Err(e) => log::warn!("[tracker] unclassifiable sample: {e}"),
        }
    }

    /// Record that the tracker is unavailable. Hand anchor and gesture keep
    /// their last values.
    pub fn tracker_failed(&mut self, reason: &str) {
        log::error!("[tracker] unavailable: {reason}");
        self.state.tracker_error = Some(reason.to_string());
    }

    /// Advance one render tick by `dt`.
    ///
    /// Order: newest tracker event, then override expiry, then formation and
    /// camera. An override expiring this frame always leaves the gesture at NONE.
    pub fn frame(&mut self, dt: Duration) {
        self.clock.advance(dt);

        match self.mailbox.take() {
            Some(TrackerEvent::Sample(sample)) => self.apply_sample(&sample),
            Some(TrackerEvent::Failed(reason)) => self.tracker_failed(&reason),
            None => {}
        }

        if self.overrides.poll_expired(self.clock.elapsed_sec()) {
            self.set_gesture(GestureSymbol::None);
        }

        self.formation.update(
            dt,
            self.state.hand.anchor,
            self.state.gesture,
            &mut self.store,
        );
        self.camera.follow(self.state.hand.anchor);
    }

    /// Advance by the wall-clock time since the previous call.
    pub fn frame_now(&mut self) -> Duration {
        let dt = self.clock.lap();
        self.frame(dt);
        dt
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            store: &self.store,
            formation: &self.formation,
            camera: &self.camera,
            hand_anchor: self.state.hand.anchor,
            gesture: self.state.gesture,
        }
    }

    fn set_gesture(&mut self, gesture: GestureSymbol) {
        if self.state.gesture != gesture {
            log::debug!("[gesture] {} -> {}", self.state.gesture, gesture);
            self.state.gesture = gesture;
        }
    }
}
