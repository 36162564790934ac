// Host-side tests for the manual override state machine.

use swarm_core::constants::OVERRIDE_DURATION_SEC;
use swarm_core::{GestureSymbol, OverrideController, OverrideState};

#[test]
fn starts_in_tracking() {
    let ctl = OverrideController::new(OVERRIDE_DURATION_SEC);
    assert!(!ctl.is_active());
    assert_eq!(ctl.state(), OverrideState::Tracking);
    assert_eq!(ctl.symbol(), None);
    assert_eq!(ctl.remaining(10.0), None);
}

#[test]
fn force_arms_with_fixed_duration() {
    let mut ctl = OverrideController::new(4.5);
    ctl.force(GestureSymbol::Peace, 10.0);
    assert!(ctl.is_active());
    assert_eq!(
        ctl.state(),
        OverrideState::Overridden {
            symbol: GestureSymbol::Peace,
            expires_at: 14.5
        }
    );
    assert_eq!(ctl.remaining(11.0), Some(3.5));
}

#[test]
fn expiry_fires_once_at_the_deadline() {
    let mut ctl = OverrideController::new(4.5);
    ctl.force(GestureSymbol::Fist, 0.0);
    assert!(!ctl.poll_expired(4.49));
    assert!(ctl.is_active());
    assert!(ctl.poll_expired(4.5));
    assert!(!ctl.is_active());
    assert!(!ctl.poll_expired(100.0), "expiry must not fire twice");
}

#[test]
fn refreshing_resets_the_timer_without_stacking() {
    let mut ctl = OverrideController::new(4.5);
    ctl.force(GestureSymbol::Fist, 0.0);
    ctl.force(GestureSymbol::Metal, 3.0);
    assert_eq!(ctl.symbol(), Some(GestureSymbol::Metal));

    // The first deadline passes without effect.
    assert!(!ctl.poll_expired(4.6));
    assert_eq!(ctl.symbol(), Some(GestureSymbol::Metal));
    assert_eq!(ctl.remaining(4.6), Some(7.5 - 4.6));

    assert!(ctl.poll_expired(7.5));
    assert_eq!(ctl.symbol(), None);
}

#[test]
fn cancel_returns_to_tracking_silently() {
    let mut ctl = OverrideController::new(4.5);
    ctl.force(GestureSymbol::Open, 1.0);
    ctl.cancel();
    assert!(!ctl.is_active());
    assert!(!ctl.poll_expired(10.0));
}
