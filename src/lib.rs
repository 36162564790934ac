//! Gesture-driven particle formations.
//!
//! A hand tracker feeds landmark samples into [`SwarmEngine`], which classifies
//! them into a [`GestureSymbol`], resolves manual overrides, and every frame
//! moves each particle toward a closed-form formation around the hand. A
//! renderer reads the result through [`FrameView`].

pub mod camera;
pub mod constants;
pub mod core;
pub mod error;
pub mod frame;
pub mod input;
pub mod params;
pub mod render;

pub use crate::core::*;
pub use camera::FollowCamera;
pub use error::{Result, SwarmError};
pub use frame::{EngineState, SwarmEngine, TrackingStatus};
pub use input::{TrackerEvent, TrackerMailbox, TrackerSample};
pub use params::SwarmParams;
pub use render::{gesture_code, FormationUniforms, FrameView, ParticleInstance};
