//! Tracker handoff.
//!
//! The landmark tracker runs at its own cadence, usually on another thread.
//! It publishes whole samples into a single-slot mailbox; the frame loop takes
//! the newest one once per frame. Older unread samples are simply replaced.

use crate::core::HandLandmarks;
use std::sync::{Arc, Mutex, MutexGuard};

/// One tracker callback: zero hands means "no hand in view".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerSample {
    pub hands: Vec<HandLandmarks>,
}

impl TrackerSample {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hand(landmarks: HandLandmarks) -> Self {
        Self {
            hands: vec![landmarks],
        }
    }

    /// Only the first hand drives the swarm.
    pub fn primary(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }
}

/// Everything the tracker can report to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerEvent {
    Sample(TrackerSample),
    /// The tracker could not be started or stopped delivering (camera denied,
    /// model failed to load).
    Failed(String),
}

/// Newest-wins single-slot mailbox shared between tracker and frame loop.
#[derive(Clone, Debug, Default)]
pub struct TrackerMailbox {
    slot: Arc<Mutex<Option<TrackerEvent>>>,
}

impl TrackerMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<TrackerEvent>> {
        // The slot only ever holds a complete value, so a poisoned lock is still usable.
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace whatever is pending with `sample`.
    pub fn publish(&self, sample: TrackerSample) {
        *self.lock() = Some(TrackerEvent::Sample(sample));
    }

    /// Report that the tracker is unavailable.
    pub fn fail(&self, reason: impl Into<String>) {
        *self.lock() = Some(TrackerEvent::Failed(reason.into()));
    }

    /// Take the newest pending event, leaving the slot empty.
    pub fn take(&self) -> Option<TrackerEvent> {
        self.lock().take()
    }

    pub fn has_pending(&self) -> bool {
        self.lock().is_some()
    }
}
