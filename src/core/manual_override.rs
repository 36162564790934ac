//! Timed manual override of the tracked gesture.
//!
//! Modeled as an explicit two-state machine with a monotonic expiry stamp that
//! the frame loop checks, so behavior is deterministic under a simulated clock.

use super::gesture::GestureSymbol;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OverrideState {
    /// Classifier output drives the effective gesture.
    #[default]
    Tracking,
    /// `symbol` is forced until the frame clock reaches `expires_at` (seconds).
    Overridden {
        symbol: GestureSymbol,
        expires_at: f64,
    },
}

/// Forces a gesture for a bounded duration, superseding the classifier.
#[derive(Clone, Debug)]
pub struct OverrideController {
    state: OverrideState,
    duration_sec: f64,
}

impl OverrideController {
    pub fn new(duration_sec: f64) -> Self {
        Self {
            state: OverrideState::Tracking,
            duration_sec,
        }
    }

    /// Arm (or re-arm) the override. A repeated call replaces the symbol and
    /// restarts the timer from `now`; expirations never stack.
    pub fn force(&mut self, symbol: GestureSymbol, now: f64) {
        let expires_at = now + self.duration_sec;
        log::debug!("[override] force {symbol} until t={expires_at:.2}");
        self.state = OverrideState::Overridden { symbol, expires_at };
    }

    /// Drop any active override without reporting an expiry.
    pub fn cancel(&mut self) {
        self.state = OverrideState::Tracking;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, OverrideState::Overridden { .. })
    }

    /// Forced symbol while active.
    pub fn symbol(&self) -> Option<GestureSymbol> {
        match self.state {
            OverrideState::Overridden { symbol, .. } => Some(symbol),
            OverrideState::Tracking => None,
        }
    }

    /// Seconds left before expiry, if active.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        match self.state {
            OverrideState::Overridden { expires_at, .. } => Some((expires_at - now).max(0.0)),
            OverrideState::Tracking => None,
        }
    }

    pub fn state(&self) -> OverrideState {
        self.state
    }

    /// Check the expiry stamp. Returns `true` exactly once, on the call that
    /// observes `now >= expires_at`, and drops back to tracking.
    pub fn poll_expired(&mut self, now: f64) -> bool {
        match self.state {
            OverrideState::Overridden { symbol, expires_at } if now >= expires_at => {
                log::debug!("[override] {symbol} expired at t={now:.2}");
                self.state = OverrideState::Tracking;
                true
            }
            _ => false,
        }
    }
}
